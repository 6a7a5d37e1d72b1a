use rfx_core::synthesis::InputNeededDetector;
use rfx_core::types::{
    Category, CompanyType, ComplianceStatus, OrganizationProfile, Requirement,
    RequirementResponse,
};
use std::collections::BTreeSet;

fn minimal_profile() -> OrganizationProfile {
    OrganizationProfile {
        company_name: "Acme Logistics".to_string(),
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

fn requirement(category: Category, text: &str, is_question: bool) -> Requirement {
    Requirement {
        id: "REQ-001".to_string(),
        section_title: category.to_string(),
        category,
        text: text.to_string(),
        is_question,
        is_mandatory: false,
        keywords: BTreeSet::new(),
        context: String::new(),
    }
}

fn response(req: &Requirement, text: &str, status: ComplianceStatus) -> RequirementResponse {
    RequirementResponse {
        requirement_id: req.id.clone(),
        requirement_text: req.text.clone(),
        response_text: text.to_string(),
        compliance_status: status,
        supporting_documents: Vec::new(),
        specific_details: Vec::new(),
        notes: Vec::new(),
        needs_input_reason: None,
        suggested_input_fields: None,
    }
}

#[test]
fn placeholder_past_project_response_escalates_with_suggested_fields() {
    let req = requirement(Category::Qualifications, "Describe your past projects.", true);
    let drafted = response(
        &req,
        "Our past projects include work for [client name] and similar engagements.",
        ComplianceStatus::Compliant,
    );

    let reviewed = InputNeededDetector::new().assess(drafted, &req, &minimal_profile());

    assert_eq!(reviewed.compliance_status, ComplianceStatus::NeedsInput);
    let fields = reviewed
        .suggested_input_fields
        .as_ref()
        .expect("escalation must suggest input fields");
    assert!(!fields.is_empty());
    assert!(reviewed.needs_input_reason.is_some());
    assert!(
        reviewed.response_text.contains("Describe your past projects."),
        "wrapper must embed the original requirement"
    );
    assert!(
        reviewed.response_text.contains("[client name]"),
        "wrapper must preserve the original draft"
    );
}

#[test]
fn specific_dollar_figures_are_not_flagged_generic() {
    let req = requirement(
        Category::Insurance,
        "Bidder must maintain $1,000,000 cargo insurance.",
        false,
    );
    let drafted = response(
        &req,
        "Acme Logistics maintains cargo insurance of $1,000,000 per occurrence with an \
         A-rated carrier, exceeding the stated minimum. Certificates of Insurance will be \
         furnished prior to award.",
        ComplianceStatus::Compliant,
    );

    let reviewed = InputNeededDetector::new().assess(drafted, &req, &minimal_profile());
    assert_eq!(reviewed.compliance_status, ComplianceStatus::Compliant);
    assert!(reviewed.needs_input_reason.is_none());
}

#[test]
fn invariant_review_never_downgrades_between_non_input_statuses() {
    let req = requirement(
        Category::Specifications,
        "All vehicles must be model year 2018 or newer.",
        false,
    );
    let drafted = response(
        &req,
        "Acme Logistics operates 12 trucks, all model year 2019 or newer, with current DOT \
         inspections on file.",
        ComplianceStatus::Partial,
    );

    let reviewed = InputNeededDetector::new().assess(drafted, &req, &minimal_profile());
    assert_eq!(
        reviewed.compliance_status,
        ComplianceStatus::Partial,
        "a submittable response must keep its original status"
    );
}

#[test]
fn pricing_without_figures_escalates() {
    let req = requirement(
        Category::Pricing,
        "State your fully burdened hourly rate.",
        false,
    );
    let drafted = response(
        &req,
        "Competitive pricing details are provided in our pricing schedule.",
        ComplianceStatus::Compliant,
    );

    let reviewed = InputNeededDetector::new().assess(drafted, &req, &minimal_profile());
    assert_eq!(reviewed.compliance_status, ComplianceStatus::NeedsInput);
    let fields = reviewed.suggested_input_fields.unwrap();
    assert!(fields.iter().any(|f| f.label == "Pricing Details"));
}

#[test]
fn experience_question_is_auto_answered_from_profile() {
    let mut profile = minimal_profile();
    profile.years_in_business = Some(12);

    let req = requirement(
        Category::Qualifications,
        "How many years has your company been in business?",
        true,
    );
    let drafted = response(&req, "[insert years]", ComplianceStatus::Compliant);

    let reviewed = InputNeededDetector::new().assess(drafted, &req, &profile);
    assert_eq!(reviewed.compliance_status, ComplianceStatus::Compliant);
    assert!(
        reviewed.response_text.contains("12 years"),
        "override must answer from the profile: {}",
        reviewed.response_text
    );
    assert!(reviewed.suggested_input_fields.is_none());
}

#[test]
fn missing_authority_numbers_escalate_qualification_requirements() {
    let req = requirement(
        Category::Qualifications,
        "Bidder must hold active DOT operating authority.",
        false,
    );
    let drafted = response(
        &req,
        "Acme Logistics holds active federal operating authority in good standing with a \
         satisfactory safety rating and will provide all documentation with this submission.",
        ComplianceStatus::Compliant,
    );

    let reviewed = InputNeededDetector::new().assess(drafted, &req, &minimal_profile());
    assert_eq!(reviewed.compliance_status, ComplianceStatus::NeedsInput);
    let fields = reviewed.suggested_input_fields.unwrap();
    assert!(fields.iter().any(|f| f.label == "USDOT Number"));
}
