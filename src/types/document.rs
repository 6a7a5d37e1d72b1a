use serde::{Deserialize, Serialize};

use super::requirement::Requirement;

/// A titled, contiguous span of the source document.
///
/// Sections are ordered, non-overlapping, and together reconstruct the
/// original text byte-for-byte: `content` is exactly `text[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
    /// Byte offset of the section start in the source text.
    pub start: usize,
    /// Byte offset one past the section end.
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Rfb,
    Rfp,
    Rfq,
    Ifb,
    Rfi,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.title.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// Headline counts for one document run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_length: usize,
    pub sections_found: usize,
    pub requirements_extracted: usize,
    pub questions_found: usize,
    pub mandatory_items: usize,
}

/// The full output of document structuring: metadata, sections, and the
/// deduplicated requirement inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_type: DocumentType,
    pub solicitation_number: Option<String>,
    pub issuing_agency: Option<String>,
    pub project_title: Option<String>,
    pub due_date: Option<String>,
    pub sections: Vec<Section>,
    pub requirements: Vec<Requirement>,
    pub contacts: Vec<Contact>,
    pub stats: AnalysisStats,
}

impl DocumentAnalysis {
    /// The metadata the synthesis stage cites in its narratives.
    pub fn facts(&self) -> SolicitationFacts {
        SolicitationFacts {
            solicitation_number: self.solicitation_number.clone(),
            issuing_agency: self.issuing_agency.clone(),
            project_title: self.project_title.clone(),
        }
    }
}

/// Document facts carried into response synthesis. All optional; absent
/// fields fall back to neutral phrasing in the generated narratives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolicitationFacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicitation_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_agency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
}
