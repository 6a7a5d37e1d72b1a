//! Weighted-guidelines-style profit determination.

use super::defaults::{
    ResolvedFinancials, COST_PLUS_PROFIT_DISCOUNT, FIXED_PRICE_PROFIT_PREMIUM, PROFIT_RATE_CEILING,
    PROFIT_RATE_FLOOR,
};
use crate::types::{
    CompanyType, ContractKind, OrganizationProfile, ProfitAnalysis, WeightedGuidelinesFactors,
};

/// Profit rate and factor breakdown.
///
/// The rate starts from the target margin, moves by contract type (fixed
/// price carries performance risk and earns a premium, cost plus earns
/// less), and clamps to the documented band. The factor table sums
/// exactly to the final rate: cost efficiency is the residual after the
/// fixed factors.
pub fn profit_analysis(
    total_cost: f64,
    contract_kind: ContractKind,
    profile: &OrganizationProfile,
    financials: &ResolvedFinancials,
) -> ProfitAnalysis {
    let adjustment = match contract_kind {
        ContractKind::Ffp => FIXED_PRICE_PROFIT_PREMIUM,
        ContractKind::Cpff => -COST_PLUS_PROFIT_DISCOUNT,
        ContractKind::Tm | ContractKind::Other => 0.0,
    };
    // Round to basis points after clamping so stated rates compare
    // exactly (0.10 + 0.02 is not the literal 0.12 in raw f64).
    let profit_rate = ((financials.profit_target + adjustment)
        .clamp(PROFIT_RATE_FLOOR, PROFIT_RATE_CEILING)
        * 1e4)
        .round()
        / 1e4;

    let contractor_effort = 0.04;
    let cost_risk = match contract_kind {
        ContractKind::Ffp => 0.03,
        ContractKind::Cpff => 0.01,
        ContractKind::Tm | ContractKind::Other => 0.02,
    };
    let socioeconomic = if profile.certifications.is_empty() {
        0.005
    } else {
        0.01
    };
    let capital_investment = if profile.company_type == CompanyType::AssetCarrier {
        0.01
    } else {
        0.005
    };
    let cost_efficiency = profit_rate - contractor_effort - cost_risk - socioeconomic - capital_investment;

    ProfitAnalysis {
        profit_rate,
        profit_amount: total_cost * profit_rate,
        factors: WeightedGuidelinesFactors {
            contractor_effort,
            cost_risk,
            socioeconomic,
            capital_investment,
            cost_efficiency,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompanyType;

    fn profile() -> OrganizationProfile {
        OrganizationProfile {
            company_name: "Test Carrier".to_string(),
            company_type: CompanyType::AssetCarrier,
            dot_number: None,
            mc_number: None,
            tax_id: None,
            certifications: Vec::new(),
            equipment_types: Vec::new(),
            service_areas: Vec::new(),
            fleet_size: None,
            years_in_business: None,
        }
    }

    #[test]
    fn ffp_premium_lands_on_twelve_percent() {
        let analysis = profit_analysis(
            100_000.0,
            ContractKind::Ffp,
            &profile(),
            &ResolvedFinancials::resolve(None),
        );
        assert_eq!(analysis.profit_rate, 0.12);
        assert!((analysis.profit_amount - 12_000.0).abs() < 1e-6);
    }

    #[test]
    fn factors_sum_exactly_to_rate() {
        let analysis = profit_analysis(
            50_000.0,
            ContractKind::Cpff,
            &profile(),
            &ResolvedFinancials::resolve(None),
        );
        let f = &analysis.factors;
        let sum = f.contractor_effort + f.cost_risk + f.socioeconomic + f.capital_investment
            + f.cost_efficiency;
        assert!((sum - analysis.profit_rate).abs() < 1e-12);
    }

    #[test]
    fn rate_is_clamped_to_band() {
        let mut financials = ResolvedFinancials::resolve(None);
        financials.profit_target = 0.20;
        let analysis = profit_analysis(10_000.0, ContractKind::Ffp, &profile(), &financials);
        assert_eq!(analysis.profit_rate, 0.15);

        financials.profit_target = 0.05;
        let analysis = profit_analysis(10_000.0, ContractKind::Cpff, &profile(), &financials);
        assert_eq!(analysis.profit_rate, 0.08);
    }
}
