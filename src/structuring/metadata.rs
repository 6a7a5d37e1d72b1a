//! Document-level metadata extraction: type, solicitation number, agency,
//! title, due date, and contacts.
//!
//! Every extractor degrades to `None`/empty on a miss. Nothing here can
//! fail.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Contact, DocumentType};

static SOLICITATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:solicitation|bid|document|reference|contract|project)\s*(?:number|no|#|id)[:\s]+([A-Z0-9-]+)").expect("solicitation number pattern"),
        Regex::new(r"(?i)document\s+number[:\s]+([A-Z]{2,4}-\d{2,4}-\d+(?:-[A-Z])?)").expect("document number pattern"),
        Regex::new(r"\b([A-Z]{2,4}-\d{2,4}-\d+(?:-[A-Z])?)\b").expect("bare number pattern"),
        Regex::new(r"(?i)solicitation[:\s#]+([A-Z0-9-]{5,})").expect("solicitation fallback pattern"),
    ]
});

static AGENCY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:county|city|state|department|agency)\s+of\s+([A-Z][a-zA-Z ]+?)(?:\n|,|solicitation)").expect("agency-of pattern"),
        Regex::new(r"(?i)issuing\s+(?:agency|office)[:\s]+([A-Z][a-zA-Z ]+?)(?:\n|,)").expect("issuing agency pattern"),
    ]
});

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:project|contract)\s+title[:\s]+([^\n]{10,150})").expect("project title pattern"),
        Regex::new(r"(?i)title[:\s]+([A-Z][^\n]{10,150}?)(?:\n|document number)").expect("title pattern"),
        Regex::new(r"for[:\s]+([A-Z][a-zA-Z ,&]+?(?:Services?|Trucking|Transportation|Hauling))").expect("title-for pattern"),
    ]
});

static DUE_DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)due\s+date[:\s]+([A-Z][a-z]+\s+\d{1,2},?\s+\d{4})").expect("due date pattern"),
        Regex::new(r"(?i)bids?\s+due[:\s]+([A-Z][a-z]+\s+\d{1,2},?\s+\d{4})").expect("bids due pattern"),
        Regex::new(r"(?i)submission\s+deadline[:\s]+([A-Z][a-z]+\s+\d{1,2},?\s+\d{4})").expect("deadline pattern"),
        Regex::new(r"(?i)on\s+or\s+before[:\s]+([A-Z][a-z]+\s+\d{1,2},?\s+\d{4})").expect("on-or-before pattern"),
        Regex::new(r"(?i)(\d{1,2}/\d{1,2}/\d{2,4})\s+at\s+(\d{1,2}:\d{2}\s*[AP]M)").expect("slash date pattern"),
    ]
});

static CONTACT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:contact|attn:|attention:|coordinator)[:\s]+([A-Z][a-z]+\s+(?:[A-Z][a-z]+\s+)?[A-Z][a-z]+)(?:[,\s]+([A-Za-z ]+?))?(?:\n|phone|email)")
        .expect("contact name pattern")
});

static CONTACT_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)phone[:\s]+(\(?\d{3}\)?[-\s]?\d{3}[-\s]?\d{4})").expect("phone pattern")
});

static CONTACT_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").expect("email pattern")
});

/// Classify the solicitation by content and filename indicators. The
/// default is RFB, matching this core's government transport focus.
pub fn detect_document_type(text: &str, file_name: &str) -> DocumentType {
    let content = text.to_lowercase();
    let name = file_name.to_lowercase();

    let checks: [(DocumentType, &str, &str); 5] = [
        (DocumentType::Rfb, "request for bid", "rfb"),
        (DocumentType::Ifb, "invitation for bid", "ifb"),
        (DocumentType::Rfp, "request for proposal", "rfp"),
        (DocumentType::Rfq, "request for quote", "rfq"),
        (DocumentType::Rfi, "request for information", "rfi"),
    ];
    for (doc_type, phrase, abbrev) in checks {
        if content.contains(phrase) || content.contains(abbrev) || name.contains(abbrev) {
            return doc_type;
        }
    }
    DocumentType::Rfb
}

pub fn extract_solicitation_number(text: &str) -> Option<String> {
    first_capture(&SOLICITATION_PATTERNS, text)
}

pub fn extract_issuing_agency(text: &str) -> Option<String> {
    for pattern in AGENCY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(agency) = caps.get(1) {
                let agency = agency.as_str().trim();
                if agency.len() > 3 && agency.len() < 100 {
                    return Some(agency.to_string());
                }
            }
        }
    }
    None
}

/// Title from the document body, falling back to the cleaned filename.
pub fn extract_project_title(text: &str, file_name: &str) -> Option<String> {
    if let Some(title) = first_capture(&TITLE_PATTERNS, text) {
        return Some(title);
    }

    static EXTENSION: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\.(pdf|docx?|txt)$").expect("extension pattern"));
    static RFX_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)^(rfb|rfp|rfq|ifb|rfi)[-_\s]*").expect("prefix pattern"));

    let cleaned = EXTENSION.replace(file_name, "");
    let cleaned = RFX_PREFIX.replace(&cleaned, "");
    let cleaned = cleaned.replace(['-', '_'], " ").trim().to_string();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

pub fn extract_due_date(text: &str) -> Option<String> {
    for pattern in DUE_DATE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(date) = caps.get(1) {
                let mut out = date.as_str().trim().to_string();
                if let Some(time) = caps.get(2) {
                    out.push_str(" at ");
                    out.push_str(time.as_str().trim());
                }
                return Some(out);
            }
        }
    }
    None
}

/// Named contacts with titles, merged with the first phone and email
/// found anywhere in the document.
pub fn extract_contacts(text: &str) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = CONTACT_NAME
        .captures_iter(text)
        .map(|caps| Contact {
            name: caps.get(1).map(|m| m.as_str().trim().to_string()),
            title: caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .filter(|t| !t.is_empty()),
            phone: None,
            email: None,
        })
        .collect();

    let phone = CONTACT_PHONE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());
    let email = CONTACT_EMAIL
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase());

    match contacts.first_mut() {
        Some(first) => {
            first.phone = phone;
            first.email = email;
        }
        None => {
            let orphan = Contact {
                name: None,
                title: None,
                phone,
                email,
            };
            if !orphan.is_empty() {
                contacts.push(orphan);
            }
        }
    }

    contacts
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            if let Some(m) = caps.get(1) {
                let value = m.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}
