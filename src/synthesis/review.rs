//! Post-synthesis review: decide whether a drafted response is too
//! generic to submit and must be escalated to a human.
//!
//! The review is the only mutation path in the pipeline and it is
//! one-way: a response's status can move to `NeedsInput` but never back.
//! Auto-answer overrides run first so that well-known boilerplate
//! questions get a deterministic answer instead of a false escalation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{
    Category, ComplianceStatus, FieldType, InputField, OrganizationProfile, Requirement,
    RequirementResponse,
};

/// Placeholder tokens that mark a response as generic. Matched
/// case-insensitively against the response text. Empirically tuned;
/// keep as-is unless the product owner asks for different behavior.
const GENERIC_TOKENS: [&str; 12] = [
    "[x]",
    "[insert",
    "[client",
    "[company",
    "[project",
    "[date",
    "[amount",
    "[name",
    "to be determined",
    "tbd",
    "xxx",
    "lorem ipsum",
];

/// Responses longer than this without generic tokens count as specific.
const SPECIFIC_LENGTH_THRESHOLD: usize = 200;

static PROPER_NOUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("proper noun pattern"));
static AGENCY_CAPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{3,}\b").expect("agency caps pattern"));
static MULTI_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2,}").expect("multi digit pattern"));
static DOLLAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[\d,]+").expect("dollar pattern"));
static DATE_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\b|\d{1,2}/\d{1,2}/\d{2,4}",
    )
    .expect("date pattern")
});

fn has_generic_tokens(text: &str) -> bool {
    let lower = text.to_lowercase();
    GENERIC_TOKENS.iter().any(|t| lower.contains(t))
}

fn has_specific_content(text: &str) -> bool {
    if has_generic_tokens(text) {
        return false;
    }
    PROPER_NOUN.is_match(text)
        || AGENCY_CAPS.is_match(text)
        || MULTI_DIGIT.is_match(text)
        || DOLLAR.is_match(text)
        || text.len() > SPECIFIC_LENGTH_THRESHOLD
}

/// Flags drafted responses that need human input before submission.
#[derive(Debug, Default)]
pub struct InputNeededDetector;

impl InputNeededDetector {
    pub fn new() -> Self {
        InputNeededDetector
    }

    /// Review one drafted response. Returns the response unchanged when
    /// it is submittable, a rewritten `Compliant` response when an
    /// auto-answer override matches, or a `NeedsInput` escalation
    /// wrapping the original draft. Called exactly once per response.
    pub fn assess(
        &self,
        mut response: RequirementResponse,
        requirement: &Requirement,
        profile: &OrganizationProfile,
    ) -> RequirementResponse {
        if let Some(answer) = auto_answer(requirement, profile) {
            response.response_text = answer;
            response.compliance_status = ComplianceStatus::Compliant;
            response
                .notes
                .push("Answered from company profile data".to_string());
            return response;
        }

        let generic = has_generic_tokens(&response.response_text);
        let specific = has_specific_content(&response.response_text);

        let mut reasons: Vec<String> = Vec::new();
        let mut fields: Vec<InputField> = Vec::new();

        if generic && !specific {
            reasons.push("Response contains placeholder text".to_string());
            fields.push(InputField::new(
                "Response Details",
                "Replace the placeholder content with company-specific information",
                FieldType::Textarea,
            ));
        }

        for rule in escalation_rules(&response, requirement, profile, generic, specific) {
            reasons.push(rule.reason);
            fields.extend(rule.fields);
        }

        if reasons.is_empty() {
            return response;
        }

        fields.dedup_by(|a, b| a.label == b.label);
        let reason = reasons.join("; ");

        response.response_text = format!(
            "ORIGINAL REQUIREMENT:\n{}\n\nADDITIONAL INPUT NEEDED:\n{}\n\nDRAFT RESPONSE (for reference):\n{}",
            requirement.text.trim(),
            reason,
            response.response_text,
        );
        response.compliance_status = ComplianceStatus::NeedsInput;
        response.needs_input_reason = Some(reason);
        response.suggested_input_fields = Some(fields);
        response
            .notes
            .push("Requires human review before submission".to_string());
        response
    }
}

static EXPERIENCE_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)how (?:long|many years)|years (?:of experience|in business)")
        .expect("experience question pattern")
});
static INSURANCE_DETAIL_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:what|list|state) .*(?:insurance|coverage)|insurance (?:limits|amounts)")
        .expect("insurance detail pattern")
});
static COMPANY_IDENTITY_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:legal )?name of (?:the )?(?:company|bidder|firm)|company name")
        .expect("identity pattern")
});
static EXCEPTIONS_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:exceptions?|deviations?) (?:to|taken|from)").expect("exceptions pattern")
});

/// High-value question patterns answered directly from profile data.
/// Naive genericity checks would flag these safe answers, so they
/// short-circuit the review entirely.
fn auto_answer(requirement: &Requirement, profile: &OrganizationProfile) -> Option<String> {
    let text = &requirement.text;

    if requirement.category == Category::Qualifications && EXPERIENCE_QUESTION.is_match(text) {
        let years = profile.years_in_business?;
        return Some(format!(
            "{} has been in business for {years} years, providing transportation and \
             logistics services throughout that period. Supporting documentation is \
             available upon request.",
            profile.company_name
        ));
    }

    if requirement.category == Category::Insurance && INSURANCE_DETAIL_QUESTION.is_match(text) {
        return Some(format!(
            "{} maintains commercial auto liability of $1,000,000 CSL, cargo insurance of \
             $100,000 per occurrence, and commercial general liability of $1,000,000 per \
             occurrence / $2,000,000 aggregate. Certificates of Insurance naming the agency \
             as certificate holder will be furnished prior to award.",
            profile.company_name
        ));
    }

    if COMPANY_IDENTITY_QUESTION.is_match(text) {
        let mut answer = profile.company_name.clone();
        if let Some(dot) = profile.dot_number.as_deref() {
            answer.push_str(&format!(" (USDOT {dot})"));
        }
        answer.push('.');
        return Some(answer);
    }

    if EXCEPTIONS_QUESTION.is_match(text) {
        return Some(format!(
            "{} takes no exceptions to the terms, conditions, or specifications of this \
             solicitation.",
            profile.company_name
        ));
    }

    None
}

struct EscalationHit {
    reason: String,
    fields: Vec<InputField>,
}

fn hit(reason: &str, fields: Vec<InputField>) -> EscalationHit {
    EscalationHit {
        reason: reason.to_string(),
        fields,
    }
}

static PAST_PERFORMANCE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)past (?:performance|projects?)|references?").expect("past performance pattern")
});
static QUANTITY_QUESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)how many|quantity|number of").expect("quantity pattern"));
static AUTHORITY_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdot\b|\bmc\b|authority").expect("authority ref pattern"));

/// The independent category escalation rules. Every firing rule
/// contributes its reason and fields; nothing short-circuits.
fn escalation_rules(
    response: &RequirementResponse,
    requirement: &Requirement,
    profile: &OrganizationProfile,
    generic: bool,
    specific: bool,
) -> Vec<EscalationHit> {
    let text = &response.response_text;
    let req_lower = requirement.text.to_lowercase();
    let mut hits = Vec::new();

    if requirement.category == Category::Pricing && !MULTI_DIGIT.is_match(text) && !DOLLAR.is_match(text)
    {
        hits.push(hit(
            "Pricing response has no concrete figures",
            vec![InputField::new(
                "Pricing Details",
                "Rates, unit prices, or total pricing for this requirement",
                FieldType::Textarea,
            )],
        ));
    }

    if requirement.category == Category::Timeline
        && (req_lower.contains("date") || req_lower.contains("deadline"))
        && !DATE_LIKE.is_match(text)
    {
        hits.push(hit(
            "Timeline response has no concrete date",
            vec![InputField::new(
                "Date",
                "The specific date committed to for this requirement",
                FieldType::Date,
            )],
        ));
    }

    if requirement.is_question && QUANTITY_QUESTION.is_match(&requirement.text) && !MULTI_DIGIT.is_match(text)
    {
        hits.push(hit(
            "Quantity question answered without figures",
            vec![InputField::new(
                "Quantity",
                "The numeric answer to the question",
                FieldType::Number,
            )],
        ));
    }

    if requirement.category == Category::Technical && generic && !specific {
        hits.push(hit(
            "Technical response is generic",
            vec![InputField::new(
                "Technical Details",
                "Specific technical approach for this requirement",
                FieldType::Textarea,
            )],
        ));
    }

    if PAST_PERFORMANCE_REF.is_match(&requirement.text) && text.contains('[') {
        hits.push(hit(
            "Past performance response contains placeholder brackets",
            vec![
                InputField::new(
                    "Client Name",
                    "Name of a reference client or contracting agency",
                    FieldType::Text,
                ),
                InputField::new(
                    "Project Description",
                    "Scope, duration, and outcome of the reference project",
                    FieldType::Textarea,
                ),
            ],
        ));
    }

    if req_lower.contains("maintenance") && !specific {
        hits.push(hit(
            "Maintenance response lacks a concrete schedule",
            vec![InputField::new(
                "Maintenance Schedule",
                "Preventive maintenance intervals and inspection cadence",
                FieldType::Textarea,
            )],
        ));
    }

    if requirement.is_question && generic && !specific {
        hits.push(hit(
            "Question answered only with generic text",
            vec![InputField::new(
                "Answer",
                "The direct answer to this question",
                FieldType::Textarea,
            )],
        ));
    }

    if requirement.category == Category::Qualifications
        && AUTHORITY_REF.is_match(&req_lower)
        && profile.dot_number.is_none()
    {
        hits.push(hit(
            "Profile has no operating authority numbers on file",
            vec![
                InputField::new("USDOT Number", "Federal DOT registration number", FieldType::Text),
                InputField::new("MC Number", "Motor carrier authority number", FieldType::Text),
            ],
        ));
    }

    if requirement.category == Category::Insurance && (text.len() < 100 || generic) {
        hits.push(hit(
            "Insurance response is too short or contains placeholders",
            vec![InputField::new(
                "Insurance Coverage Details",
                "Policy types, limits, and carrier names",
                FieldType::Textarea,
            )],
        ));
    }

    if requirement.category == Category::Qualifications
        && PAST_PERFORMANCE_REF.is_match(&requirement.text)
        && (text.len() < 80 || generic)
    {
        hits.push(hit(
            "Past performance response is too short or contains placeholders",
            vec![InputField::new(
                "Past Performance",
                "Comparable contracts with client, scope, and dates",
                FieldType::Textarea,
            )],
        ));
    }

    hits
}
