pub mod document;
pub mod pricing;
pub mod profile;
pub mod requirement;
pub mod response;

pub use document::{
    AnalysisStats, Contact, DocumentAnalysis, DocumentType, Section, SolicitationFacts,
};
pub use pricing::{
    CompetitiveRisk, ComplianceCheck, ContractKind, ContractTerms, DirectCosts, Evaluation,
    EvaluationMethod, FactorWeights, FuelLine, IndirectCosts, LaborCosts, LaborLine,
    MaterialsCosts, PricingStrategy, ProfitAnalysis, ProposalCostModel, ProposalSchedules,
    SubcontractorCosts, SupplyLine, VerificationReport, WeightedGuidelinesFactors,
};
pub use profile::{
    CompanyFinancials, CompanyType, ExtractedCompanyProfile, InvalidProfileError,
    OrganizationProfile,
};
pub use requirement::{Category, Requirement};
pub use response::{
    ComplianceStatus, Detail, FieldType, InputField, ProposalSections, RequirementResponse,
    ResponseBundle, ResponseSummary,
};
