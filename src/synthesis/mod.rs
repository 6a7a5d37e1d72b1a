//! Compliance response synthesis.
//!
//! Dispatch is a data table from requirement category to handler, so
//! adding a category means adding a row, not editing a match arm spread
//! across the module. Question-phrased requirements with no handler
//! fragments fall through to the question-intent dispatcher, and every
//! drafted response passes through the input-needed review exactly once.

mod fragments;
mod handlers;
mod questions;
pub mod review;
mod sections;

use log::debug;

pub use fragments::{Draft, Fragment};
pub use review::InputNeededDetector;

use crate::types::{
    Category, ComplianceStatus, ExtractedCompanyProfile, InvalidProfileError,
    OrganizationProfile, Requirement, RequirementResponse, ResponseBundle, ResponseSummary,
    SolicitationFacts,
};

/// Category dispatch table. `Administrative` and `Other` have no
/// specialized narrative and fall through to the generic path.
const HANDLERS: [(Category, handlers::Handler); 9] = [
    (Category::Scope, handlers::scope),
    (Category::Specifications, handlers::specification),
    (Category::Qualifications, handlers::qualification),
    (Category::Insurance, handlers::insurance),
    (Category::Timeline, handlers::timeline),
    (Category::Pricing, handlers::pricing),
    (Category::Submission, handlers::submission),
    (Category::Technical, handlers::technical),
    (Category::Compliance, handlers::compliance),
];

/// Drafts one compliance response per requirement and reviews each for
/// missing company-specific input.
#[derive(Debug, Default)]
pub struct ResponseSynthesizer {
    detector: InputNeededDetector,
}

impl ResponseSynthesizer {
    pub fn new() -> Self {
        ResponseSynthesizer {
            detector: InputNeededDetector::new(),
        }
    }

    /// Draft and review a response for a single requirement.
    pub fn synthesize(
        &self,
        requirement: &Requirement,
        profile: &OrganizationProfile,
        extracted: Option<&ExtractedCompanyProfile>,
    ) -> RequirementResponse {
        let handler = HANDLERS
            .iter()
            .find(|(category, _)| *category == requirement.category)
            .map(|(_, handler)| *handler);

        let draft = match handler {
            Some(handler) => {
                let draft = handler(requirement, profile, extracted);
                if draft.fragments.is_empty() && requirement.is_question {
                    questions::answer(requirement, profile, extracted)
                } else if draft.fragments.is_empty() {
                    generic_draft(requirement, profile)
                } else {
                    draft
                }
            }
            None if requirement.is_question => questions::answer(requirement, profile, extracted),
            None => generic_draft(requirement, profile),
        };

        let response = fragments::assemble(requirement, draft);
        self.detector.assess(response, requirement, profile)
    }

    /// Draft, review, and aggregate responses for a whole document run,
    /// then render the narrative proposal sections from the profile and
    /// the document facts.
    ///
    /// The one hard failure is an unusable profile; everything past
    /// validation is total.
    pub fn synthesize_all(
        &self,
        requirements: &[Requirement],
        profile: &OrganizationProfile,
        extracted: Option<&ExtractedCompanyProfile>,
        facts: SolicitationFacts,
    ) -> Result<ResponseBundle, InvalidProfileError> {
        profile.validate()?;
        debug!(
            "synthesizing {} responses for '{}'",
            requirements.len(),
            profile.company_name
        );

        let responses: Vec<RequirementResponse> = requirements
            .iter()
            .map(|r| self.synthesize(r, profile, extracted))
            .collect();

        let summary = summarize(&responses);
        debug!(
            "synthesis complete: {} compliant, {} need input",
            summary.compliant, summary.needs_input
        );

        let proposal_sections = sections::generate(profile, &facts, &summary, extracted);

        Ok(ResponseBundle {
            solicitation_number: facts.solicitation_number,
            summary,
            responses,
            proposal_sections,
        })
    }
}

fn generic_draft(requirement: &Requirement, profile: &OrganizationProfile) -> Draft {
    Draft::new(vec![Fragment::text(format!(
        "{} acknowledges this requirement and confirms compliance:\n\n\"{}\"\n\nSupporting \
         detail is provided in the relevant sections of this proposal and documentation is \
         available upon request.",
        profile.company_name,
        requirement.text.trim()
    ))])
}

fn summarize(responses: &[RequirementResponse]) -> ResponseSummary {
    let mut summary = ResponseSummary {
        total_requirements: responses.len(),
        ..ResponseSummary::default()
    };
    for response in responses {
        match response.compliance_status {
            ComplianceStatus::Compliant => summary.compliant += 1,
            ComplianceStatus::Partial => summary.partial += 1,
            ComplianceStatus::NonCompliant => summary.non_compliant += 1,
            ComplianceStatus::NotApplicable => summary.not_applicable += 1,
            ComplianceStatus::NeedsInput => summary.needs_input += 1,
        }
    }
    summary
}
