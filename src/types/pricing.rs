use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluationMethod {
    Lpta,
    BestValue,
    PriceOnly,
}

/// Evaluation factor weights, in whole percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub technical: u32,
    pub past_performance: u32,
    pub price: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractKind {
    Ffp,
    Cpff,
    Tm,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub kind: ContractKind,
    /// Performance period in months.
    pub period_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub method: EvaluationMethod,
    pub weights: FactorWeights,
}

/// One labor category line: headcount, monthly hours, rate, burdened cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborLine {
    pub fte: u32,
    pub hours: f64,
    pub rate: f64,
    /// Fully burdened monthly cost (base wages plus fringe).
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCosts {
    pub drivers: LaborLine,
    pub dispatchers: LaborLine,
    pub supervisors: LaborLine,
    pub fringe: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelLine {
    pub quantity: f64,
    pub unit_price: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyLine {
    pub description: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsCosts {
    pub fuel: FuelLine,
    pub supplies: Vec<SupplyLine>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcontractorCosts {
    pub maintenance: SupplyLine,
    pub other: Vec<SupplyLine>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectCosts {
    pub labor: LaborCosts,
    pub materials: MaterialsCosts,
    pub subcontractors: SubcontractorCosts,
    pub total: f64,
}

/// Overhead applied to the direct labor base, split into fixed-share
/// buckets. The proportions are constants, not derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndirectCosts {
    pub overhead_rate: f64,
    pub overhead_amount: f64,
    pub administrative: f64,
    pub facilities: f64,
    pub operations: f64,
    pub marketing: f64,
}

/// Weighted-guidelines profit factor breakdown. The factors sum exactly
/// to the profit rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedGuidelinesFactors {
    pub contractor_effort: f64,
    pub cost_risk: f64,
    pub socioeconomic: f64,
    pub capital_investment: f64,
    pub cost_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitAnalysis {
    pub profit_rate: f64,
    pub profit_amount: f64,
    pub factors: WeightedGuidelinesFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompetitiveRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingStrategy {
    pub price_per_load: f64,
    pub market_average_per_load: f64,
    pub competitive_risk: CompetitiveRisk,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub check: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub mathematical_accuracy: bool,
    pub compliance_checks: Vec<ComplianceCheck>,
    pub warnings: Vec<String>,
    pub ready_for_submission: bool,
}

/// Rendered justification schedules. Purely presentational text derived
/// deterministically from the numeric model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSchedules {
    pub labor_detail: String,
    pub bill_of_materials: String,
    pub indirect_rates: String,
    pub basis_of_estimate: String,
    pub pricing_narrative: String,
}

/// The complete cost/price buildup for one calculation run. Built once;
/// re-running with different inputs produces a new instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalCostModel {
    pub evaluation: Evaluation,
    pub contract: ContractTerms,
    pub monthly_loads: f64,
    pub direct_costs: DirectCosts,
    pub indirect_costs: IndirectCosts,
    pub total_cost: f64,
    pub profit: ProfitAnalysis,
    pub total_price: f64,
    pub pricing_strategy: PricingStrategy,
    pub schedules: ProposalSchedules,
    pub verification: VerificationReport,
}
