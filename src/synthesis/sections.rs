//! Narrative proposal sections.
//!
//! The eight standing volumes of a bid package, rendered from the
//! organization profile and document facts. Content branches on the
//! company type the same way the category handlers do: an asset carrier
//! describes its own fleet and maintenance shop, a broker describes its
//! carrier network and vetting standards. Paragraph blocks are built
//! independently and joined once at the end.

use super::handlers::is_carrier;
use crate::types::{
    ExtractedCompanyProfile, OrganizationProfile, ProposalSections, ResponseSummary,
    SolicitationFacts,
};

pub(crate) fn generate(
    profile: &OrganizationProfile,
    facts: &SolicitationFacts,
    summary: &ResponseSummary,
    extracted: Option<&ExtractedCompanyProfile>,
) -> ProposalSections {
    ProposalSections {
        executive_summary: executive_summary(profile, facts, summary),
        company_overview: company_overview(profile),
        technical_approach: technical_approach(profile, facts),
        qualifications_and_experience: qualifications_and_experience(profile, extracted),
        key_personnel: key_personnel(profile),
        equipment_and_capabilities: equipment_and_capabilities(profile),
        quality_assurance: quality_assurance(profile),
        safety_program: safety_program(profile),
    }
}

fn join(blocks: Vec<String>) -> String {
    blocks.join("\n\n")
}

fn years_line(profile: &OrganizationProfile) -> String {
    profile
        .years_in_business
        .map(|y| y.to_string())
        .unwrap_or_else(|| "5+".to_string())
}

fn list_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn executive_summary(
    profile: &OrganizationProfile,
    facts: &SolicitationFacts,
    summary: &ResponseSummary,
) -> String {
    let agency = facts.issuing_agency.as_deref().unwrap_or("your");
    let number = facts
        .solicitation_number
        .as_deref()
        .map(|n| format!(" {n}"))
        .unwrap_or_default();
    let title = facts
        .project_title
        .as_deref()
        .unwrap_or("transportation services");
    let model = if is_carrier(profile) {
        "Asset-based carrier with a company-owned fleet"
    } else {
        "Licensed property broker with an extensive carrier network"
    };

    let mut qualifications = vec![
        format!(
            "• {} years of proven transportation experience",
            years_line(profile)
        ),
        format!("• {model}"),
        format!(
            "• {} of {} requirements fully compliant",
            summary.compliant, summary.total_requirements
        ),
    ];
    for certification in &profile.certifications {
        qualifications.push(format!("• {certification} certified"));
    }
    qualifications.push("• Real-time shipment tracking and reporting platform".to_string());

    join(vec![
        "EXECUTIVE SUMMARY".to_string(),
        format!(
            "{} is pleased to submit this proposal in response to {agency} \
             solicitation{number} for {title}.",
            profile.company_name
        ),
        format!("KEY QUALIFICATIONS:\n{}", qualifications.join("\n")),
        format!(
            "{} offers the combination of competitive pricing, proven performance, and \
             direct accountability this contract requires. Our {} model ensures reliable \
             capacity, and this proposal demonstrates our complete understanding of the \
             stated requirements.",
            profile.company_name,
            if is_carrier(profile) { "direct carrier" } else { "brokerage" }
        ),
    ])
}

fn company_overview(profile: &OrganizationProfile) -> String {
    let mut information = vec![format!("• Legal Name: {}", profile.company_name)];
    information.push(format!(
        "• Years in Operation: {} years",
        years_line(profile)
    ));
    if let Some(dot) = &profile.dot_number {
        information.push(format!("• USDOT Number: {dot}"));
    }
    if let Some(mc) = &profile.mc_number {
        information.push(format!("• MC Number: {mc}"));
    }
    information.push(format!(
        "• Service Area: {}",
        list_or(&profile.service_areas, "Regional and nationwide")
    ));

    let certifications = if profile.certifications.is_empty() {
        "Certification documentation available upon request.".to_string()
    } else {
        bullets(&profile.certifications)
    };

    let business_model = if is_carrier(profile) {
        "As an asset-based carrier we own and operate our fleet, providing direct \
         operational control, company-employed drivers, in-house maintenance, and \
         guaranteed capacity without broker intermediaries."
    } else {
        "As a licensed freight broker we coordinate transportation through a network of \
         pre-qualified carriers, with rigorous vetting, ongoing safety monitoring, and \
         flexible capacity to meet varying demand."
    };

    join(vec![
        "COMPANY OVERVIEW".to_string(),
        format!(
            "{} is a {} specializing in {}.",
            profile.company_name,
            if is_carrier(profile) {
                "fleet-based transportation company"
            } else {
                "licensed property freight broker"
            },
            list_or(&profile.equipment_types, "transportation and logistics services")
        ),
        format!("COMPANY INFORMATION:\n{}", information.join("\n")),
        format!("CERTIFICATIONS:\n{certifications}"),
        format!("BUSINESS MODEL:\n{business_model}"),
    ])
}

fn technical_approach(profile: &OrganizationProfile, facts: &SolicitationFacts) -> String {
    join(vec![
        "TECHNICAL APPROACH".to_string(),
        format!(
            "{}'s approach to {} is built on proven processes, experienced personnel, and \
             real-time operational visibility.",
            profile.company_name,
            facts.project_title.as_deref().unwrap_or("this project")
        ),
        "OPERATIONAL METHODOLOGY:\n\
         1. Pre-service planning: route analysis, equipment assignment, and driver \
         briefings on contract-specific requirements\n\
         2. Daily operations: dispatch coordination, GPS tracking, proactive status \
         updates, and exception handling\n\
         3. Quality control: daily performance monitoring against contract KPIs, \
         equipment inspections, and documented corrective action"
            .to_string(),
        "TECHNOLOGY PLATFORM:\n\
         • Real-time GPS tracking of all equipment\n\
         • Automated dispatch and load management\n\
         • Electronic proof of delivery\n\
         • Customer portal with around-the-clock access and reporting"
            .to_string(),
        "PERFORMANCE MANAGEMENT:\nDaily KPI tracking, monthly reporting to the customer, \
         and quarterly business reviews over the life of the contract."
            .to_string(),
    ])
}

fn qualifications_and_experience(
    profile: &OrganizationProfile,
    extracted: Option<&ExtractedCompanyProfile>,
) -> String {
    let mut corporate = Vec::new();
    if let Some(dot) = &profile.dot_number {
        corporate.push(format!("• USDOT Number: {dot} (Active)"));
    }
    if let Some(mc) = &profile.mc_number {
        corporate.push(format!("• MC Number: {mc} (Active)"));
    }
    corporate.push("• Operating authority: current and unrestricted".to_string());
    corporate.push("• Insurance: all coverage current and compliant".to_string());
    for certification in &profile.certifications {
        corporate.push(format!("• {certification}"));
    }

    // Cited engagements come from the supporting company document when
    // one was provided; otherwise bracketed placeholders remain for the
    // bid preparer to complete.
    let experience = match extracted {
        Some(facts) if !facts.past_performance.is_empty() => bullets(&facts.past_performance),
        _ => "\
1. Municipal materials transport\n\
   Client: [Client Name]\n\
   Scope: recurring hauling services, high monthly volume\n\
   Result: on-time performance, contract renewed\n\
2. Construction site logistics\n\
   Client: [Client Name]\n\
   Scope: multi-site material delivery coordination\n\
   Result: completed on schedule, customer commendation"
            .to_string(),
    };

    let references = match extracted {
        Some(facts) if !facts.references.is_empty() => bullets(&facts.references),
        _ => "Available upon request. References include government entities, general \
              contractors, and private sector clients."
            .to_string(),
    };

    join(vec![
        "QUALIFICATIONS AND EXPERIENCE".to_string(),
        format!(
            "{} brings {} years of transportation expertise to this contract.",
            profile.company_name,
            years_line(profile)
        ),
        format!("CORPORATE QUALIFICATIONS:\n{}", corporate.join("\n")),
        format!("RELEVANT EXPERIENCE:\n{experience}"),
        format!("CUSTOMER REFERENCES:\n{references}"),
    ])
}

fn key_personnel(profile: &OrganizationProfile) -> String {
    let specialist = if is_carrier(profile) {
        "Maintenance Supervisor\n\
         • Role: fleet maintenance and equipment readiness\n\
         • Responsibilities: preventive maintenance, repairs, DOT compliance"
    } else {
        "Carrier Relations Manager\n\
         • Role: carrier network management and qualification\n\
         • Responsibilities: carrier vetting, capacity sourcing, performance monitoring"
    };

    join(vec![
        "KEY PERSONNEL".to_string(),
        "President/Owner\n\
         • Role: contract oversight and customer relationship management\n\
         • Responsibilities: strategic planning, quality assurance, escalation resolution"
            .to_string(),
        "Operations Manager\n\
         • Role: daily operations management and dispatch coordination\n\
         • Responsibilities: fleet management, driver supervision, service delivery\n\
         • Availability: on-call around the clock"
            .to_string(),
        specialist.to_string(),
        "Safety Manager\n\
         • Role: safety program administration and compliance\n\
         • Responsibilities: driver training, accident investigation, regulatory \
         compliance, audit support"
            .to_string(),
    ])
}

fn equipment_and_capabilities(profile: &OrganizationProfile) -> String {
    let capability = if is_carrier(profile) {
        join(vec![
            format!(
                "COMPANY FLEET:\n\
                 • Fleet size: {} company-owned trucks\n\
                 • Equipment types: {}\n\
                 • Maintenance: in-house facility, preventive program\n\
                 • DOT inspections: current and compliant",
                profile
                    .fleet_size
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "[Fleet Size]".to_string()),
                list_or(&profile.equipment_types, "various truck types")
            ),
            "EQUIPMENT AVAILABILITY:\nDedicated equipment assigned to this contract, with \
             backup units held for maintenance windows and surge demand."
                .to_string(),
        ])
    } else {
        join(vec![
            format!(
                "CARRIER NETWORK:\n\
                 • Pre-qualified carriers across {}\n\
                 • Equipment types: {}\n\
                 • Capacity scalable to demand",
                list_or(&profile.service_areas, "regional and national lanes"),
                list_or(&profile.equipment_types, "all common trailer types")
            ),
            "CARRIER QUALIFICATION:\nEvery carrier must hold active DOT/MC authority, a \
             satisfactory safety rating, $1,000,000 minimum auto liability and $100,000 \
             minimum cargo coverage, and a documented on-time record."
                .to_string(),
        ])
    };

    join(vec![
        "EQUIPMENT AND CAPABILITIES".to_string(),
        capability,
        "TRACKING AND TECHNOLOGY:\nReal-time GPS tracking, electronic proof of delivery, \
         mobile driver communication, and a customer portal with automated alerts."
            .to_string(),
    ])
}

fn quality_assurance(profile: &OrganizationProfile) -> String {
    join(vec![
        "QUALITY ASSURANCE PROGRAM".to_string(),
        format!(
            "{} maintains a documented quality assurance program covering every stage of \
             service delivery.",
            profile.company_name
        ),
        "QUALITY STANDARDS:\n\
         • On-time delivery: 99% minimum target\n\
         • Dispatch response: under 2 hours\n\
         • Equipment availability: 99% or better\n\
         • Safety: zero preventable accidents goal"
            .to_string(),
        "QUALITY CONTROL PROCESSES:\n\
         1. Pre-service verification: equipment inspection, driver readiness, route \
         planning\n\
         2. In-service monitoring: GPS tracking, proactive exception management, status \
         updates\n\
         3. Post-service review: proof of delivery capture, feedback collection, metrics \
         analysis"
            .to_string(),
        "CORRECTIVE ACTION:\nIssues trigger immediate customer notification, root cause \
         analysis within 24 hours, and a corrective action plan within 48 hours with \
         follow-up reporting."
            .to_string(),
    ])
}

fn safety_program(profile: &OrganizationProfile) -> String {
    join(vec![
        "SAFETY PROGRAM".to_string(),
        format!(
            "Safety is the top priority at {}. The program meets or exceeds FMCSA \
             requirements and is administered by a dedicated safety manager.",
            profile.company_name
        ),
        "PROGRAM COMPONENTS:\n\
         1. Driver safety: screening, DOT-compliant drug and alcohol testing, defensive \
         driving training, performance coaching\n\
         2. Vehicle safety: daily pre-trip inspections, preventive maintenance, annual \
         DOT inspections\n\
         3. Operational safety: hours-of-service monitoring, route risk assessment, \
         weather monitoring, fatigue management\n\
         4. Emergency response: around-the-clock incident protocol, post-accident \
         testing, documented investigation and reporting"
            .to_string(),
        "REGULATORY COMPLIANCE:\nFull compliance with the FMCSRs, DOT hours-of-service \
         rules, drug and alcohol testing regulations, and applicable state and local \
         transportation requirements."
            .to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompanyType;

    fn carrier() -> OrganizationProfile {
        OrganizationProfile {
            company_name: "Acme Logistics".to_string(),
            company_type: CompanyType::AssetCarrier,
            dot_number: Some("1234567".to_string()),
            mc_number: None,
            tax_id: None,
            certifications: vec!["SmartWay".to_string()],
            equipment_types: vec!["dump truck".to_string()],
            service_areas: vec!["Anytown County".to_string()],
            fleet_size: Some(25),
            years_in_business: Some(10),
        }
    }

    #[test]
    fn extracted_past_performance_replaces_placeholders() {
        let extracted = ExtractedCompanyProfile {
            past_performance: vec![
                "County aggregate hauling, 2022-2024, 500 loads per month".to_string()
            ],
            ..ExtractedCompanyProfile::default()
        };
        let with = qualifications_and_experience(&carrier(), Some(&extracted));
        assert!(with.contains("County aggregate hauling"));
        assert!(!with.contains("[Client Name]"));

        let without = qualifications_and_experience(&carrier(), None);
        assert!(without.contains("[Client Name]"));
    }

    #[test]
    fn fleet_size_flows_into_equipment_section() {
        let section = equipment_and_capabilities(&carrier());
        assert!(section.contains("25 company-owned trucks"));
        assert!(section.contains("dump truck"));
    }
}
