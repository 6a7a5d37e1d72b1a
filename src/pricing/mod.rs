//! FAR-style cost/price buildup.
//!
//! The calculation is a fixed sequence of steps, each reading only the
//! outputs of the previous one: evaluation and contract detection,
//! direct labor from mined volume signals, materials and subcontracts,
//! overhead on the labor base, weighted-guidelines profit, pricing
//! strategy, rendered schedules, and a final verification pass.

pub mod defaults;
pub mod evaluation;
pub mod labor;
pub mod verify;

mod costs;
mod profit;
mod schedules;

use log::debug;

pub use defaults::ResolvedFinancials;
pub use labor::VolumeEstimate;

use crate::types::{
    CompanyFinancials, InvalidProfileError, OrganizationProfile, ProposalCostModel,
    VerificationReport,
};

/// Builds a complete, verified cost model from the requirement texts and
/// the bidder's profile.
#[derive(Debug, Default)]
pub struct ProposalCalculator;

impl ProposalCalculator {
    pub fn new() -> Self {
        ProposalCalculator
    }

    /// Run the full buildup. The one hard failure is an unusable
    /// profile; missing financial parameters fall back to the documented
    /// defaults and missing volume signals to the default service level.
    pub fn calculate(
        &self,
        requirements: &[String],
        profile: &OrganizationProfile,
        financials: Option<&CompanyFinancials>,
    ) -> Result<ProposalCostModel, InvalidProfileError> {
        profile.validate()?;
        let financials = ResolvedFinancials::resolve(financials);
        let text = requirements.join("\n");

        let evaluation = evaluation::detect_evaluation(&text);
        let contract = evaluation::detect_contract(&text);

        let volume = labor::estimate_volume(requirements);
        let monthly_loads = volume.monthly_loads();
        debug!(
            "pricing {monthly_loads:.0} loads/month at {:.0} miles/load",
            volume.miles_per_load
        );

        let labor = labor::direct_labor(&volume, &financials);
        let materials = costs::direct_materials(&volume, &financials);
        let subs = costs::subcontractors(&financials);
        let direct_costs = costs::direct_costs(labor, materials, subs);

        let indirect_costs = costs::indirect_costs(direct_costs.labor.total, &financials);
        let total_cost = direct_costs.total + indirect_costs.overhead_amount;

        let profit = profit::profit_analysis(total_cost, contract.kind, profile, &financials);
        let total_price = total_cost + profit.profit_amount;

        let pricing_strategy = evaluation::assess_strategy(&evaluation, total_price, monthly_loads);

        let schedules = schedules::render(
            &evaluation,
            &contract,
            monthly_loads,
            &direct_costs,
            &indirect_costs,
            total_cost,
            &profit,
            total_price,
            &pricing_strategy,
        );

        let mut model = ProposalCostModel {
            evaluation,
            contract,
            monthly_loads,
            direct_costs,
            indirect_costs,
            total_cost,
            profit,
            total_price,
            pricing_strategy,
            schedules,
            verification: VerificationReport {
                mathematical_accuracy: false,
                compliance_checks: Vec::new(),
                warnings: Vec::new(),
                ready_for_submission: false,
            },
        };
        model.verification = verify::verify(&model);
        debug!(
            "cost model complete: total price {:.2}, ready={}",
            model.total_price, model.verification.ready_for_submission
        );
        Ok(model)
    }
}
