use rfx_core::pricing::ProposalCalculator;
use rfx_core::structuring::DocumentStructurer;
use rfx_core::synthesis::ResponseSynthesizer;
use rfx_core::types::{CompanyType, ComplianceStatus, ContractKind, OrganizationProfile};

const SOLICITATION: &str = "\
REQUEST FOR BID
Solicitation Number: RFB-2025-112
Due Date: June 30, 2025

1. SCOPE OF WORK
Contractor shall provide drayage services handling 1,100 loads per month at approximately 50 miles per load under a firm fixed price contract.

2. INSURANCE REQUIREMENTS
Bidder must maintain $1,000,000 cargo insurance at all times during the contract period.

3. QUALIFICATIONS
Bidder must hold a valid DOT number and demonstrate a minimum of 3 years of experience in municipal hauling.

4. SUBMISSION INSTRUCTIONS
Bids must be submitted in a sealed envelope no later than 14 days after issuance.
";

fn profile() -> OrganizationProfile {
    OrganizationProfile {
        company_name: "Acme Logistics".to_string(),
        company_type: CompanyType::AssetCarrier,
        dot_number: Some("1234567".to_string()),
        mc_number: Some("MC-123456".to_string()),
        tax_id: None,
        certifications: vec!["SmartWay".to_string()],
        equipment_types: vec!["dump truck".to_string()],
        service_areas: vec!["Anytown County".to_string()],
        fleet_size: Some(25),
        years_in_business: Some(10),
    }
}

#[test]
fn full_pipeline_analyze_synthesize_price() {
    let structurer = DocumentStructurer::new();
    let analysis = structurer.analyze(SOLICITATION, "rfb-2025-112.pdf");

    assert_eq!(analysis.solicitation_number.as_deref(), Some("RFB-2025-112"));
    assert!(analysis.stats.requirements_extracted >= 4);
    assert!(analysis.stats.mandatory_items >= 3);

    let bundle = ResponseSynthesizer::new()
        .synthesize_all(&analysis.requirements, &profile(), None, analysis.facts())
        .expect("profile is valid");

    assert_eq!(bundle.responses.len(), analysis.requirements.len());
    assert_eq!(
        bundle.needs_input().len(),
        bundle.summary.needs_input,
        "filtered view must agree with the summary count"
    );
    for response in &bundle.responses {
        assert!(!response.response_text.is_empty(), "every requirement gets a response");
        if response.compliance_status == ComplianceStatus::NeedsInput {
            assert!(response.needs_input_reason.is_some());
            assert!(response.suggested_input_fields.is_some());
        }
    }

    assert!(
        bundle
            .proposal_sections
            .executive_summary
            .contains("RFB-2025-112"),
        "the executive summary must cite the solicitation number"
    );

    let requirement_texts: Vec<String> =
        analysis.requirements.iter().map(|r| r.text.clone()).collect();
    let model = ProposalCalculator::new()
        .calculate(&requirement_texts, &profile(), None)
        .expect("profile is valid");

    assert_eq!(model.contract.kind, ContractKind::Ffp);
    assert_eq!(model.monthly_loads, 1_100.0);
    assert_eq!(model.profit.profit_rate, 0.12);
    assert!(model.verification.ready_for_submission);
}

#[test]
fn pipeline_is_deterministic() {
    let structurer = DocumentStructurer::new();
    let first = structurer.analyze(SOLICITATION, "rfb-2025-112.pdf");
    let second = structurer.analyze(SOLICITATION, "rfb-2025-112.pdf");
    assert_eq!(first, second, "identical inputs must produce identical analyses");

    let synthesizer = ResponseSynthesizer::new();
    let bundle_a = synthesizer
        .synthesize_all(&first.requirements, &profile(), None, first.facts())
        .unwrap();
    let bundle_b = synthesizer
        .synthesize_all(&second.requirements, &profile(), None, second.facts())
        .unwrap();
    assert_eq!(bundle_a, bundle_b);
}
