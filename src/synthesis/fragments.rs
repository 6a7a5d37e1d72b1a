//! Response assembly from handler fragments.
//!
//! Handlers return an ordered list of fragments instead of mutating an
//! accumulator string; the fragments are joined exactly once. This keeps
//! each sub-branch independently testable.

use crate::types::{ComplianceStatus, Detail, Requirement, RequirementResponse};

/// One paragraph of response text plus its structured attachments.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub text: String,
    pub details: Vec<Detail>,
    pub documents: Vec<String>,
    pub notes: Vec<String>,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment {
            text: text.into(),
            ..Fragment::default()
        }
    }

    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push(Detail::new(key, value));
        self
    }

    pub fn document(mut self, name: impl Into<String>) -> Self {
        self.documents.push(name.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// A handler's full output before assembly.
#[derive(Debug, Clone)]
pub struct Draft {
    pub fragments: Vec<Fragment>,
    pub status: ComplianceStatus,
}

impl Draft {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Draft {
            fragments,
            status: ComplianceStatus::Compliant,
        }
    }

    pub fn with_status(mut self, status: ComplianceStatus) -> Self {
        self.status = status;
        self
    }
}

/// Join a draft's fragments into the final response record.
pub fn assemble(requirement: &Requirement, draft: Draft) -> RequirementResponse {
    let mut texts = Vec::new();
    let mut details = Vec::new();
    let mut documents = Vec::new();
    let mut notes = Vec::new();

    for fragment in draft.fragments {
        if !fragment.text.is_empty() {
            texts.push(fragment.text);
        }
        details.extend(fragment.details);
        documents.extend(fragment.documents);
        notes.extend(fragment.notes);
    }

    RequirementResponse {
        requirement_id: requirement.id.clone(),
        requirement_text: requirement.text.clone(),
        response_text: texts.join("\n\n"),
        compliance_status: draft.status,
        supporting_documents: documents,
        specific_details: details,
        notes,
        needs_input_reason: None,
        suggested_input_fields: None,
    }
}
