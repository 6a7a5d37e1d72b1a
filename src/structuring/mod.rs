//! Document structuring: section segmentation, requirement mining,
//! deduplication, and document-level metadata extraction.

pub mod dedup;
pub mod metadata;
pub mod mining;
pub mod sections;
mod text;

use log::debug;

pub use dedup::{similarity, SIMILARITY_THRESHOLD};
pub use mining::{categorize_section, extract_keywords, is_mandatory};
pub use sections::{segment_sections, PREAMBLE_TITLE, WHOLE_DOCUMENT_TITLE};

use crate::types::{AnalysisStats, DocumentAnalysis};

/// Orchestrates the structuring pipeline: segment, mine per section,
/// deduplicate, and collect document metadata.
#[derive(Debug, Default)]
pub struct DocumentStructurer;

impl DocumentStructurer {
    pub fn new() -> Self {
        DocumentStructurer
    }

    /// Scan the whole solicitation and produce the requirement inventory
    /// plus document metadata. Degenerate inputs produce degenerate but
    /// valid analyses; this never fails.
    pub fn analyze(&self, text: &str, file_name: &str) -> DocumentAnalysis {
        debug!("structuring {} bytes from '{file_name}'", text.len());

        let document_type = metadata::detect_document_type(text, file_name);
        let solicitation_number = metadata::extract_solicitation_number(text);
        let issuing_agency = metadata::extract_issuing_agency(text);
        let project_title = metadata::extract_project_title(text, file_name);
        let due_date = metadata::extract_due_date(text);
        let contacts = metadata::extract_contacts(text);

        let sections = segment_sections(text);
        debug!("identified {} sections", sections.len());

        let candidates: Vec<_> = sections.iter().flat_map(mining::mine_section).collect();
        let requirements = dedup::dedup_and_assign_ids(candidates);
        debug!("extracted {} requirements", requirements.len());

        let questions_found = requirements.iter().filter(|r| r.is_question).count();
        let mandatory_items = requirements.iter().filter(|r| r.is_mandatory).count();

        let stats = AnalysisStats {
            total_length: text.len(),
            sections_found: sections.len(),
            requirements_extracted: requirements.len(),
            questions_found,
            mandatory_items,
        };

        DocumentAnalysis {
            document_type,
            solicitation_number,
            issuing_agency,
            project_title,
            due_date,
            sections,
            requirements,
            contacts,
            stats,
        }
    }
}
