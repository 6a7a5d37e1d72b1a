//! Header-pattern section segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Section;

/// Title given to the single section emitted when no headers are found.
pub const WHOLE_DOCUMENT_TITLE: &str = "COMPLETE DOCUMENT";

/// Title given to text preceding the first detected header.
pub const PREAMBLE_TITLE: &str = "PREAMBLE";

/// Two headers within this many bytes of each other are the same header
/// seen by two patterns; the first acceptance wins.
const HEADER_OFFSET_EPSILON: usize = 10;

struct HeaderRule {
    pattern: Regex,
    /// Index of the capture group holding the section title.
    title_group: usize,
}

static HEADER_RULES: Lazy<Vec<HeaderRule>> = Lazy::new(|| {
    vec![
        // Numbered headings: "1. SCOPE OF WORK", "IV. INSURANCE", "2.1 TERMS"
        HeaderRule {
            pattern: Regex::new(r"(?m)^[ \t]*(?:[IVX]+|[0-9A-Z]+(?:\.[0-9]+)*)\.[ \t]*([A-Z][A-Z ,&'\-]{5,80}?)[ \t]*(?:\n|:)")
                .expect("numbered heading pattern"),
            title_group: 1,
        },
        // Named headings: "SECTION 3: PRICING", "ATTACHMENT B - FORMS"
        HeaderRule {
            pattern: Regex::new(r"(?mi)^[ \t]*(?:SECTION|PART|ARTICLE|SCHEDULE|ATTACHMENT|APPENDIX|EXHIBIT)[ \t]+[IVX0-9A-Z]+[:. \t-]*([A-Za-z][A-Za-z ,&'\-]{5,80}?)[ \t]*(?:\n|:)")
                .expect("named heading pattern"),
            title_group: 1,
        },
        // Generic all-caps lines of bounded length
        HeaderRule {
            pattern: Regex::new(r"(?m)^[ \t]*([A-Z][A-Z ,&'\-]{10,80}?)[ \t]*(?:\n|:)")
                .expect("all-caps heading pattern"),
            title_group: 1,
        },
    ]
});

static TITLE_STOPLIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(page|rev|date|time)\b").expect("stoplist pattern"));

#[derive(Debug)]
struct FoundHeader {
    title: String,
    offset: usize,
}

/// Split raw text into titled, ordered, non-overlapping sections.
///
/// Invariants, enforced by construction: sections are contiguous, no
/// section has zero length, and concatenating all section contents
/// reconstructs the input exactly. Zero detected headers yields one
/// whole-document section.
pub fn segment_sections(text: &str) -> Vec<Section> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut headers: Vec<FoundHeader> = Vec::new();

    for rule in HEADER_RULES.iter() {
        for caps in rule.pattern.captures_iter(text) {
            let whole = caps.get(0).expect("match group 0");
            let title = caps
                .get(rule.title_group)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            if title.len() < 5 || TITLE_STOPLIST.is_match(&title) {
                continue;
            }
            let offset = whole.start();
            if headers
                .iter()
                .any(|h| h.offset.abs_diff(offset) < HEADER_OFFSET_EPSILON)
            {
                continue;
            }
            headers.push(FoundHeader { title, offset });
        }
    }

    headers.sort_by_key(|h| h.offset);

    if headers.is_empty() {
        return vec![Section {
            title: WHOLE_DOCUMENT_TITLE.to_string(),
            content: text.to_string(),
            start: 0,
            end: text.len(),
        }];
    }

    let mut sections = Vec::with_capacity(headers.len() + 1);

    if headers[0].offset > 0 {
        sections.push(Section {
            title: PREAMBLE_TITLE.to_string(),
            content: text[..headers[0].offset].to_string(),
            start: 0,
            end: headers[0].offset,
        });
    }

    for (i, header) in headers.iter().enumerate() {
        let start = header.offset;
        let end = headers.get(i + 1).map_or(text.len(), |next| next.offset);
        sections.push(Section {
            title: header.title.clone(),
            content: text[start..end].to_string(),
            start,
            end,
        });
    }

    sections
}
