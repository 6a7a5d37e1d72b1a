//! Direct answers for requirements phrased as questions.
//!
//! Category handlers assume declarative requirement statements; a
//! questionnaire item ("Do you have a current DOT number?") needs an
//! answer, not a compliance narrative. Intent groups are checked in
//! order and the first match wins.

use super::fragments::{Draft, Fragment};
use crate::types::{CompanyType, ExtractedCompanyProfile, OrganizationProfile, Requirement};

pub(crate) fn answer(
    req: &Requirement,
    profile: &OrganizationProfile,
    extracted: Option<&ExtractedCompanyProfile>,
) -> Draft {
    let lower = req.text.to_lowercase();

    if lower.contains("insurance") || lower.contains("coverage") || lower.contains("liability") {
        return insurance_answer(profile);
    }

    if (lower.contains("who") || lower.contains("name of"))
        && (lower.contains("company") || lower.contains("bidder") || lower.contains("firm"))
    {
        return identity_answer(profile, extracted);
    }

    if lower.starts_with("do you have")
        || lower.starts_with("does your")
        || lower.contains("are you registered")
        || lower.contains("are you licensed")
    {
        return credential_answer(&lower, profile);
    }

    if lower.starts_with("can you") || lower.starts_with("are you able") || lower.contains("capable of")
    {
        return capability_answer(profile);
    }

    if lower.starts_with("describe") || lower.starts_with("explain") || lower.starts_with("provide")
    {
        return description_answer(profile, extracted);
    }

    acknowledgment(req, profile)
}

fn insurance_answer(profile: &OrganizationProfile) -> Draft {
    let text = if profile.company_type == CompanyType::FreightBroker {
        format!(
            "Yes. {} maintains broker professional liability coverage of $1,000,000 and a \
             BMC-84 surety bond. All contracted carriers are verified to carry commercial \
             auto liability ($1,000,000 CSL minimum) and cargo insurance ($100,000 minimum). \
             Certificates of Insurance are available upon request.",
            profile.company_name
        )
    } else {
        format!(
            "Yes. {} maintains commercial auto liability ($1,000,000 CSL), cargo insurance \
             ($100,000 per occurrence), commercial general liability ($1,000,000 / \
             $2,000,000), and statutory workers' compensation. Certificates of Insurance \
             are available upon request.",
            profile.company_name
        )
    };
    Draft::new(vec![Fragment::text(text).document("Certificate of Insurance (COI)")])
}

fn identity_answer(
    profile: &OrganizationProfile,
    extracted: Option<&ExtractedCompanyProfile>,
) -> Draft {
    let mut text = profile.company_name.clone();
    if let Some(description) = extracted.and_then(|e| e.description.as_deref()) {
        text.push_str(&format!(", {description}"));
    }
    if let Some(dot) = profile.dot_number.as_deref() {
        text.push_str(&format!(" (USDOT {dot}"));
        if let Some(mc) = profile.mc_number.as_deref() {
            text.push_str(&format!(", MC {mc}"));
        }
        text.push(')');
    }
    text.push('.');
    Draft::new(vec![Fragment::text(text)])
}

fn credential_answer(lower: &str, profile: &OrganizationProfile) -> Draft {
    let mut fragment = Fragment::text(format!(
        "Yes. {} holds all licenses and registrations required to perform this work and \
         maintains them in active, good standing.",
        profile.company_name
    ));
    if lower.contains("dot") {
        if let Some(dot) = profile.dot_number.as_deref() {
            fragment = fragment.detail("USDOT Number", dot);
        }
    }
    if lower.contains("mc") || lower.contains("motor carrier") {
        if let Some(mc) = profile.mc_number.as_deref() {
            fragment = fragment.detail("MC Number", mc);
        }
    }
    Draft::new(vec![fragment])
}

fn capability_answer(profile: &OrganizationProfile) -> Draft {
    Draft::new(vec![Fragment::text(format!(
        "Yes. {} is fully capable of performing this requirement and has successfully \
         performed comparable work under similar contract conditions. Supporting detail is \
         provided in the relevant sections of this proposal.",
        profile.company_name
    ))])
}

fn description_answer(
    profile: &OrganizationProfile,
    extracted: Option<&ExtractedCompanyProfile>,
) -> Draft {
    let description = extracted
        .and_then(|e| e.description.clone())
        .unwrap_or_else(|| {
            format!(
                "{} is a {} providing reliable transportation and logistics services, with \
                 documented performance on contracts of similar size and scope.",
                profile.company_name,
                match profile.company_type {
                    CompanyType::FreightBroker => "licensed freight brokerage",
                    CompanyType::AssetCarrier => "asset-based motor carrier",
                    CompanyType::ThirdPartyLogistics => "third-party logistics provider",
                    CompanyType::Shipper => "shipper",
                    CompanyType::Other => "transportation services company",
                }
            )
        });
    Draft::new(vec![Fragment::text(description)])
}

fn acknowledgment(req: &Requirement, profile: &OrganizationProfile) -> Draft {
    Draft::new(vec![Fragment::text(format!(
        "In response to: \"{}\"\n\n{} confirms its understanding and will provide the \
         requested information as part of this submission.",
        req.text.trim(),
        profile.company_name
    ))])
}
