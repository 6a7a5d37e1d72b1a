use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use rfx_core::types::{
    Category, CompanyType, ComplianceStatus, Detail, DocumentType, FieldType, InputField,
    RequirementResponse,
};

#[test]
fn golden_category_and_status_wire_casing() {
    assert_eq!(
        serde_json::to_value(Category::Qualifications).unwrap(),
        json!("QUALIFICATIONS")
    );
    assert_eq!(
        serde_json::to_value(ComplianceStatus::NeedsInput).unwrap(),
        json!("NEEDS_INPUT")
    );
    assert_eq!(
        serde_json::to_value(ComplianceStatus::NonCompliant).unwrap(),
        json!("NON_COMPLIANT")
    );
    assert_eq!(serde_json::to_value(DocumentType::Rfb).unwrap(), json!("RFB"));
    assert_eq!(serde_json::to_value(FieldType::Textarea).unwrap(), json!("textarea"));
}

#[test]
fn golden_company_type_uses_3pl_alias() {
    assert_eq!(
        serde_json::to_value(CompanyType::ThirdPartyLogistics).unwrap(),
        json!("3pl")
    );
    assert_eq!(
        serde_json::from_value::<CompanyType>(json!("freight_broker")).unwrap(),
        CompanyType::FreightBroker
    );
}

#[test]
fn golden_response_serialization_omits_absent_escalation_fields() {
    let response = RequirementResponse {
        requirement_id: "REQ-001".to_string(),
        requirement_text: "Bidder must maintain $1,000,000 cargo insurance.".to_string(),
        response_text: "Coverage of $1,000,000 is in force.".to_string(),
        compliance_status: ComplianceStatus::Compliant,
        supporting_documents: vec!["Certificate of Insurance (COI)".to_string()],
        specific_details: vec![Detail::new("Cargo Insurance", "$1,000,000")],
        notes: Vec::new(),
        needs_input_reason: None,
        suggested_input_fields: None,
    };

    let value = serde_json::to_value(&response).unwrap();
    let object = value.as_object().unwrap();
    assert!(
        !object.contains_key("needs_input_reason"),
        "absent escalation fields must not serialize"
    );
    assert!(!object.contains_key("suggested_input_fields"));
    assert_eq!(object["compliance_status"], json!("COMPLIANT"));

    let round_tripped: RequirementResponse = serde_json::from_value(value).unwrap();
    assert_eq!(round_tripped, response);
}

#[test]
fn golden_escalated_response_serialization() {
    let response = RequirementResponse {
        requirement_id: "REQ-002".to_string(),
        requirement_text: "Describe your past projects.".to_string(),
        response_text: "ORIGINAL REQUIREMENT:\n...".to_string(),
        compliance_status: ComplianceStatus::NeedsInput,
        supporting_documents: Vec::new(),
        specific_details: Vec::new(),
        notes: vec!["Requires human review before submission".to_string()],
        needs_input_reason: Some("Past performance response contains placeholder brackets".to_string()),
        suggested_input_fields: Some(vec![InputField::new(
            "Client Name",
            "Name of a reference client or contracting agency",
            FieldType::Text,
        )]),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value["suggested_input_fields"],
        json!([{
            "label": "Client Name",
            "description": "Name of a reference client or contracting agency",
            "field_type": "text",
        }])
    );
    assert_eq!(value["compliance_status"], json!("NEEDS_INPUT"));

    let parsed: Value = serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
    assert_eq!(parsed, value);
}
