//! Rendered justification schedules.
//!
//! Formatted text for the pricing volume of a proposal. Everything here
//! is presentation over the numeric model; no figure is computed that
//! the calculator did not already produce, apart from display rounding.

use crate::types::{
    ContractKind, ContractTerms, DirectCosts, Evaluation, IndirectCosts, LaborLine,
    PricingStrategy, ProfitAnalysis, ProposalSchedules,
};

fn money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

fn labor_row(name: &str, line: &LaborLine) -> String {
    format!(
        "  {name:<24} {:>4} FTE x {:>6.1} hrs x {}/hr = {}\n",
        line.fte,
        line.hours,
        money(line.rate),
        money(line.cost),
    )
}

pub fn render(
    evaluation: &Evaluation,
    contract: &ContractTerms,
    monthly_loads: f64,
    direct: &DirectCosts,
    indirect: &IndirectCosts,
    total_cost: f64,
    profit: &ProfitAnalysis,
    total_price: f64,
    strategy: &PricingStrategy,
) -> ProposalSchedules {
    let labor_detail = {
        let labor = &direct.labor;
        let mut s = String::from("SCHEDULE A - DIRECT LABOR DETAIL (MONTHLY)\n\n");
        s.push_str(&labor_row("Drivers (CDL-A)", &labor.drivers));
        s.push_str(&labor_row("Dispatchers", &labor.dispatchers));
        s.push_str(&labor_row("Operations Supervisor", &labor.supervisors));
        s.push_str(&format!(
            "\n  Costs above are fully burdened; included fringe benefits: {}\n  TOTAL DIRECT LABOR: {}\n",
            money(labor.fringe),
            money(labor.total),
        ));
        s
    };

    let bill_of_materials = {
        let materials = &direct.materials;
        let subs = &direct.subcontractors;
        let mut s = String::from("SCHEDULE B - DIRECT MATERIALS AND SUBCONTRACTS (MONTHLY)\n\n");
        s.push_str(&format!(
            "  Fuel: {:.0} gallons x {} = {}\n",
            materials.fuel.quantity,
            money(materials.fuel.unit_price),
            money(materials.fuel.cost),
        ));
        for supply in &materials.supplies {
            s.push_str(&format!("  {}: {}\n", supply.description, money(supply.cost)));
        }
        s.push_str(&format!("  Materials subtotal: {}\n\n", money(materials.total)));
        s.push_str(&format!(
            "  {}: {}\n",
            subs.maintenance.description,
            money(subs.maintenance.cost)
        ));
        for item in &subs.other {
            s.push_str(&format!("  {}: {}\n", item.description, money(item.cost)));
        }
        s.push_str(&format!("  Subcontracts subtotal: {}\n", money(subs.total)));
        s
    };

    let indirect_rates = format!(
        "SCHEDULE C - INDIRECT RATE BUILDUP\n\n  Overhead rate: {:.1}% of direct labor\n  \
         Overhead amount: {}\n\n  Allocation:\n    Administrative: {}\n    Facilities: {}\n    \
         Operations: {}\n    Marketing: {}\n",
        indirect.overhead_rate * 100.0,
        money(indirect.overhead_amount),
        money(indirect.administrative),
        money(indirect.facilities),
        money(indirect.operations),
        money(indirect.marketing),
    );

    let basis_of_estimate = format!(
        "SCHEDULE D - BASIS OF ESTIMATE\n\n  Estimated volume: {monthly_loads:.0} loads per \
         month\n  Contract type: {}\n  Period of performance: {} months\n\n  Direct costs: \
         {}\n  Indirect costs: {}\n  Total cost: {}\n\n  Profit (weighted guidelines, {:.1}%): \
         {}\n    Contractor effort: {:.2}%\n    Contract cost risk: {:.2}%\n    Socioeconomic \
         programs: {:.2}%\n    Capital investment: {:.2}%\n    Cost efficiency: {:.2}%\n\n  \
         TOTAL PRICE: {}\n",
        match contract.kind {
            ContractKind::Ffp => "Firm Fixed Price",
            ContractKind::Cpff => "Cost Plus Fixed Fee",
            ContractKind::Tm => "Time and Materials",
            ContractKind::Other => "Other",
        },
        contract.period_months,
        money(direct.total),
        money(indirect.overhead_amount),
        money(total_cost),
        profit.profit_rate * 100.0,
        money(profit.profit_amount),
        profit.factors.contractor_effort * 100.0,
        profit.factors.cost_risk * 100.0,
        profit.factors.socioeconomic * 100.0,
        profit.factors.capital_investment * 100.0,
        profit.factors.cost_efficiency * 100.0,
        money(total_price),
    );

    let pricing_narrative = format!(
        "SCHEDULE E - PRICING NARRATIVE\n\n  The proposed price of {} ({} per load at \
         {monthly_loads:.0} loads/month) was developed using a bottom-up cost buildup: direct \
         labor from derived staffing levels, fuel from estimated mileage, fixed supply and \
         subcontract allowances, overhead applied to the direct labor base, and profit \
         determined under a weighted-guidelines analysis.\n\n  Evaluation basis: {:?} \
         (technical {} / past performance {} / price {}).\n  Market reference: {} per load. \
         Competitive risk: {:?}.\n",
        money(total_price),
        money(strategy.price_per_load),
        evaluation.method,
        evaluation.weights.technical,
        evaluation.weights.past_performance,
        evaluation.weights.price,
        money(strategy.market_average_per_load),
        strategy.competitive_risk,
    );

    ProposalSchedules {
        labor_detail,
        bill_of_materials,
        indirect_rates,
        basis_of_estimate,
        pricing_narrative,
    }
}
