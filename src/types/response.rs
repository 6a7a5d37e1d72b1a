use serde::{Deserialize, Serialize};

/// Per-requirement compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
    NotApplicable,
    NeedsInput,
}

/// One structured key/value row supporting a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub key: String,
    pub value: String,
}

impl Detail {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Detail {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Textarea,
}

/// A form field the human-review UI should render when a response is
/// escalated with `NeedsInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub label: String,
    pub description: String,
    pub field_type: FieldType,
}

impl InputField {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        InputField {
            label: label.into(),
            description: description.into(),
            field_type,
        }
    }
}

/// A synthesized compliance response for one requirement.
///
/// Created once by the synthesizer; the input-needed review may replace
/// `compliance_status`, `response_text`, `needs_input_reason`, and
/// `suggested_input_fields` and append to `notes`. That review is the
/// only mutation path, and it only ever moves the status toward
/// `NeedsInput`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementResponse {
    pub requirement_id: String,
    pub requirement_text: String,
    pub response_text: String,
    pub compliance_status: ComplianceStatus,
    pub supporting_documents: Vec<String>,
    pub specific_details: Vec<Detail>,
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_input_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_input_fields: Option<Vec<InputField>>,
}

/// Aggregate counts per compliance status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub total_requirements: usize,
    pub compliant: usize,
    pub partial: usize,
    pub non_compliant: usize,
    pub not_applicable: usize,
    pub needs_input: usize,
}

/// The eight narrative volumes of a full bid package, rendered as
/// formatted text from the organization profile and document facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSections {
    pub executive_summary: String,
    pub company_overview: String,
    pub technical_approach: String,
    pub qualifications_and_experience: String,
    pub key_personnel: String,
    pub equipment_and_capabilities: String,
    pub quality_assurance: String,
    pub safety_program: String,
}

/// The full synthesis output for one document run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBundle {
    pub solicitation_number: Option<String>,
    pub summary: ResponseSummary,
    pub responses: Vec<RequirementResponse>,
    pub proposal_sections: ProposalSections,
}

impl ResponseBundle {
    /// Responses escalated for human input, in original order. Intended
    /// for the review UI owned by the caller.
    pub fn needs_input(&self) -> Vec<&RequirementResponse> {
        self.responses
            .iter()
            .filter(|r| r.compliance_status == ComplianceStatus::NeedsInput)
            .collect()
    }
}
