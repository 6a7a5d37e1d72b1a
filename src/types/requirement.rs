use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Requirement taxonomy shared by section categorization and the
/// specialized extraction passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Scope,
    Specifications,
    Qualifications,
    Insurance,
    Timeline,
    Pricing,
    Submission,
    Technical,
    Compliance,
    Administrative,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Scope => "SCOPE",
            Category::Specifications => "SPECIFICATIONS",
            Category::Qualifications => "QUALIFICATIONS",
            Category::Insurance => "INSURANCE",
            Category::Timeline => "TIMELINE",
            Category::Pricing => "PRICING",
            Category::Submission => "SUBMISSION",
            Category::Technical => "TECHNICAL",
            Category::Compliance => "COMPLIANCE",
            Category::Administrative => "ADMINISTRATIVE",
            Category::Other => "OTHER",
        };
        f.write_str(s)
    }
}

/// One discrete obligation the solicitation imposes on the bidder.
///
/// Immutable once produced by the miner. `section_title` is a by-value
/// reference: sections may be discarded after structuring while
/// requirements live on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Stable `REQ-NNN` identifier, unique within one document run and
    /// strictly increasing in discovery order.
    pub id: String,
    pub section_title: String,
    pub category: Category,
    pub text: String,
    pub is_question: bool,
    pub is_mandatory: bool,
    pub keywords: BTreeSet<String>,
    /// Bounded window of surrounding text for downstream disambiguation.
    pub context: String,
}
