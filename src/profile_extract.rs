//! Company-profile fact mining from a supporting document.
//!
//! A satellite of the main pipeline with the same text-in, struct-out
//! contract but a much simpler shape: keyword-anchored section scans
//! over a capability statement or company overview. Everything is
//! best-effort; an unrecognizable document yields an empty profile.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ExtractedCompanyProfile;

static PAST_PERFORMANCE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:past performance|relevant (?:projects?|experience)|project history)\b.*$")
        .expect("past performance header")
});
static CERTIFICATIONS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*certifications?\b.*$").expect("certifications header")
});
static QUALIFICATIONS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*qualifications?\b.*$").expect("qualifications header")
});
static REFERENCES_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*references?\b.*$").expect("references header"));

static EXPERIENCE_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:over |more than )?\d+\+? years(?: of)? [a-z ,\-]{5,80}?(?:experience|operations?|service)")
        .expect("experience statement")
});

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:[-•*]|\d+[.)])[ \t]+(.+)$").expect("bullet pattern"));

/// Mine best-effort company facts from a supporting document such as a
/// capability statement.
pub fn extract_company_profile(text: &str) -> ExtractedCompanyProfile {
    ExtractedCompanyProfile {
        past_performance: items_after(text, &PAST_PERFORMANCE_HEADER),
        certifications: items_after(text, &CERTIFICATIONS_HEADER),
        description: first_paragraph(text),
        experience: EXPERIENCE_STATEMENT
            .find(text)
            .map(|m| m.as_str().trim().to_string()),
        qualifications: items_after(text, &QUALIFICATIONS_HEADER),
        references: items_after(text, &REFERENCES_HEADER),
    }
}

/// Bulleted items from the block following a section header, stopping at
/// the first blank-line gap after the bullets begin. Capped at ten items
/// so a malformed document cannot balloon the profile.
fn items_after(text: &str, header: &Regex) -> Vec<String> {
    let Some(m) = header.find(text) else {
        return Vec::new();
    };
    let block = block_after(&text[m.end()..]);

    let items: Vec<String> = BULLET
        .captures_iter(block)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| s.len() > 3)
        .take(10)
        .collect();

    if !items.is_empty() {
        return items;
    }

    // No bullets: fall back to non-empty lines of the block.
    block
        .lines()
        .map(str::trim)
        .filter(|l| l.len() > 3)
        .map(str::to_string)
        .take(10)
        .collect()
}

/// The text up to the next blank-line-separated header-looking line.
fn block_after(rest: &str) -> &str {
    static NEXT_HEADER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^[ \t]*[A-Z][A-Z &/\-]{4,60}[ \t]*$").expect("next header pattern")
    });
    match NEXT_HEADER.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    }
}

fn first_paragraph(text: &str) -> Option<String> {
    let paragraph = text
        .split("\n\n")
        .map(str::trim)
        .find(|p| p.len() > 40)?
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    Some(paragraph)
}
