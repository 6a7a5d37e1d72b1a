use rfx_core::structuring::DocumentStructurer;
use rfx_core::synthesis::ResponseSynthesizer;
use rfx_core::types::{
    Category, CompanyType, ComplianceStatus, OrganizationProfile, Requirement,
    SolicitationFacts,
};
use std::collections::BTreeSet;

fn broker_profile() -> OrganizationProfile {
    OrganizationProfile {
        company_name: "Gulf Coast Freight Partners".to_string(),
        company_type: CompanyType::FreightBroker,
        dot_number: Some("3456789".to_string()),
        mc_number: Some("MC-987654".to_string()),
        tax_id: None,
        certifications: vec!["WOSB".to_string()],
        equipment_types: vec!["dry van".to_string(), "dump truck".to_string()],
        service_areas: vec!["Anytown County".to_string()],
        fleet_size: None,
        years_in_business: Some(8),
    }
}

fn requirement(id: &str, category: Category, text: &str, is_question: bool) -> Requirement {
    Requirement {
        id: id.to_string(),
        section_title: category.to_string(),
        category,
        text: text.to_string(),
        is_question,
        is_mandatory: text.to_lowercase().contains("must") || text.to_lowercase().contains("shall"),
        keywords: BTreeSet::new(),
        context: String::new(),
    }
}

#[test]
fn broker_cargo_insurance_response_echoes_the_required_figure() {
    let text = "\
1. INSURANCE REQUIREMENTS
Bidder must maintain $1,000,000 cargo insurance at all times during the contract period.
";
    let analysis = DocumentStructurer::new().analyze(text, "rfb.pdf");
    let requirement = analysis
        .requirements
        .iter()
        .find(|r| r.category == Category::Insurance && r.text.contains("$1,000,000"))
        .expect("the cargo insurance requirement must be mined");

    let response = ResponseSynthesizer::new().synthesize(requirement, &broker_profile(), None);

    assert_eq!(response.compliance_status, ComplianceStatus::Compliant);
    assert!(
        response.response_text.contains("$1,000,000"),
        "response must echo the required coverage figure: {}",
        response.response_text
    );
    assert!(
        response.response_text.contains("carrier"),
        "broker narrative must describe carrier-verified coverage"
    );
    assert!(response.needs_input_reason.is_none());
}

#[test]
fn equipment_mismatch_downgrades_to_partial() {
    let req = requirement(
        "REQ-001",
        Category::Specifications,
        "All vehicles must be refrigerated trucks with current DOT inspections.",
        false,
    );
    let response = ResponseSynthesizer::new().synthesize(&req, &broker_profile(), None);

    assert_eq!(response.compliance_status, ComplianceStatus::Partial);
    assert!(
        response.response_text.contains("subcontract"),
        "mismatch response must offer a subcontracting path"
    );
}

#[test]
fn declared_equipment_stays_compliant() {
    let req = requirement(
        "REQ-001",
        Category::Specifications,
        "All vehicles must be dump trucks with current DOT inspections.",
        false,
    );
    let response = ResponseSynthesizer::new().synthesize(&req, &broker_profile(), None);
    assert_eq!(response.compliance_status, ComplianceStatus::Compliant);
}

#[test]
fn question_requirements_get_direct_answers() {
    let req = requirement(
        "REQ-002",
        Category::Other,
        "Do you have a current DOT number?",
        true,
    );
    let response = ResponseSynthesizer::new().synthesize(&req, &broker_profile(), None);

    assert_eq!(response.compliance_status, ComplianceStatus::Compliant);
    assert!(response.response_text.starts_with("Yes"));
    assert!(
        response.response_text.contains("3456789")
            || response
                .specific_details
                .iter()
                .any(|d| d.value.contains("3456789")),
        "the answer must carry the DOT number"
    );
}

#[test]
fn bundle_summary_counts_match_statuses() {
    let requirements = vec![
        requirement(
            "REQ-001",
            Category::Insurance,
            "Bidder must maintain $1,000,000 cargo insurance.",
            false,
        ),
        requirement(
            "REQ-002",
            Category::Specifications,
            "All vehicles must be refrigerated trucks.",
            false,
        ),
        requirement(
            "REQ-003",
            Category::Compliance,
            "Contractor shall comply with all applicable regulations.",
            false,
        ),
    ];

    let facts = SolicitationFacts {
        solicitation_number: Some("RFB-2024-017".to_string()),
        issuing_agency: Some("Anytown County Public Works".to_string()),
        project_title: None,
    };
    let bundle = ResponseSynthesizer::new()
        .synthesize_all(&requirements, &broker_profile(), None, facts)
        .expect("valid profile must synthesize");

    assert_eq!(bundle.summary.total_requirements, 3);
    let recount = bundle
        .responses
        .iter()
        .filter(|r| r.compliance_status == ComplianceStatus::Compliant)
        .count();
    assert_eq!(bundle.summary.compliant, recount);
    assert_eq!(bundle.summary.partial, 1, "the refrigerated mismatch is partial");
    assert_eq!(
        bundle.summary.compliant
            + bundle.summary.partial
            + bundle.summary.non_compliant
            + bundle.summary.not_applicable
            + bundle.summary.needs_input,
        bundle.summary.total_requirements
    );
    assert_eq!(bundle.solicitation_number.as_deref(), Some("RFB-2024-017"));
}

#[test]
fn bundle_carries_the_eight_proposal_sections() {
    let requirements = vec![requirement(
        "REQ-001",
        Category::Insurance,
        "Bidder must maintain $1,000,000 cargo insurance.",
        false,
    )];
    let facts = SolicitationFacts {
        solicitation_number: Some("RFB-2024-017".to_string()),
        issuing_agency: Some("Anytown County Public Works".to_string()),
        project_title: Some("drayage services".to_string()),
    };
    let bundle = ResponseSynthesizer::new()
        .synthesize_all(&requirements, &broker_profile(), None, facts)
        .expect("valid profile must synthesize");

    let sections = &bundle.proposal_sections;
    let summary = &sections.executive_summary;
    assert!(summary.contains("Gulf Coast Freight Partners"));
    assert!(summary.contains("Anytown County Public Works"));
    assert!(summary.contains("RFB-2024-017"));
    assert!(summary.contains("drayage services"));
    assert!(
        summary.contains(&format!(
            "{} of {} requirements fully compliant",
            bundle.summary.compliant, bundle.summary.total_requirements
        )),
        "the summary must cite the compliance tally"
    );

    for text in [
        &sections.company_overview,
        &sections.technical_approach,
        &sections.qualifications_and_experience,
        &sections.key_personnel,
        &sections.equipment_and_capabilities,
        &sections.quality_assurance,
        &sections.safety_program,
    ] {
        assert!(!text.is_empty(), "every proposal section must be rendered");
    }
}

#[test]
fn proposal_sections_branch_on_company_type() {
    let requirements: Vec<Requirement> = Vec::new();
    let synthesizer = ResponseSynthesizer::new();

    let broker_bundle = synthesizer
        .synthesize_all(&requirements, &broker_profile(), None, SolicitationFacts::default())
        .unwrap();
    assert!(broker_bundle
        .proposal_sections
        .company_overview
        .contains("licensed freight broker"));
    assert!(broker_bundle
        .proposal_sections
        .equipment_and_capabilities
        .contains("CARRIER NETWORK"));
    assert!(broker_bundle
        .proposal_sections
        .key_personnel
        .contains("Carrier Relations Manager"));

    let mut carrier_profile = broker_profile();
    carrier_profile.company_type = CompanyType::AssetCarrier;
    carrier_profile.fleet_size = Some(25);
    let carrier_bundle = synthesizer
        .synthesize_all(&requirements, &carrier_profile, None, SolicitationFacts::default())
        .unwrap();
    assert!(carrier_bundle
        .proposal_sections
        .company_overview
        .contains("asset-based carrier"));
    assert!(carrier_bundle
        .proposal_sections
        .equipment_and_capabilities
        .contains("25 company-owned trucks"));
    assert!(carrier_bundle
        .proposal_sections
        .key_personnel
        .contains("Maintenance Supervisor"));
}

#[test]
fn empty_company_name_is_the_one_hard_failure() {
    let mut profile = broker_profile();
    profile.company_name = "   ".to_string();

    let result =
        ResponseSynthesizer::new().synthesize_all(&[], &profile, None, SolicitationFacts::default());
    assert!(result.is_err(), "blank company name must fail validation");
}
