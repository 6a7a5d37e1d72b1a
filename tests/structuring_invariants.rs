use rfx_core::structuring::{
    is_mandatory, segment_sections, similarity, DocumentStructurer, SIMILARITY_THRESHOLD,
    WHOLE_DOCUMENT_TITLE,
};
use rfx_core::types::{Category, DocumentType};

const SAMPLE_RFB: &str = "\
REQUEST FOR BID

Anytown County Public Works
Solicitation Number: RFB-2024-017
Due Date: March 15, 2024

1. SCOPE OF WORK
The County seeks drayage services for its transfer station. Contractor shall provide all labor and equipment necessary for daily operations of the facility.

2. INSURANCE REQUIREMENTS
Bidder must maintain $1,000,000 cargo insurance at all times during the contract period.

3. SUBMISSION INSTRUCTIONS
Bids must be submitted in a sealed envelope no later than 30 days after issuance.
";

#[test]
fn invariant_sections_reconstruct_document_exactly() {
    for text in [
        SAMPLE_RFB,
        "no headers at all, just prose about trucking services",
        "UNICODE PRÉAMBLE TEXT\n\n1. SCOPE OF WORK\nHaul débris daily.\n",
    ] {
        let sections = segment_sections(text);
        assert!(!sections.is_empty(), "non-empty text must yield sections");

        let mut rebuilt = String::new();
        let mut cursor = 0;
        for section in &sections {
            assert_eq!(section.start, cursor, "sections must be contiguous");
            assert!(section.end > section.start, "sections must be non-empty");
            assert_eq!(
                section.content,
                &text[section.start..section.end],
                "content must be the exact span slice"
            );
            rebuilt.push_str(&section.content);
            cursor = section.end;
        }
        assert_eq!(rebuilt, text, "concatenated sections must rebuild the input");
    }
}

#[test]
fn headerless_text_falls_back_to_whole_document_section() {
    let sections = segment_sections("plain prose without any heading structure");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, WHOLE_DOCUMENT_TITLE);
}

#[test]
fn empty_input_yields_no_sections_and_a_valid_analysis() {
    assert!(segment_sections("").is_empty());

    let analysis = DocumentStructurer::new().analyze("", "empty.pdf");
    assert_eq!(analysis.stats.sections_found, 0);
    assert_eq!(analysis.stats.requirements_extracted, 0);
    assert!(analysis.requirements.is_empty());
}

#[test]
fn invariant_requirement_ids_unique_and_increasing() {
    let analysis = DocumentStructurer::new().analyze(SAMPLE_RFB, "rfb-2024-017.pdf");
    assert!(!analysis.requirements.is_empty());

    for (i, requirement) in analysis.requirements.iter().enumerate() {
        assert_eq!(
            requirement.id,
            format!("REQ-{:03}", i + 1),
            "ids must be strictly increasing in discovery order"
        );
    }
}

#[test]
fn invariant_no_near_duplicates_survive_dedup() {
    let analysis = DocumentStructurer::new().analyze(SAMPLE_RFB, "rfb-2024-017.pdf");
    let requirements = &analysis.requirements;

    for (i, a) in requirements.iter().enumerate() {
        for b in &requirements[i + 1..] {
            assert_ne!(a.text, b.text, "identical texts must be collapsed");
            assert!(
                similarity(&a.text, &b.text) <= SIMILARITY_THRESHOLD,
                "kept requirements must be below the similarity threshold: {:?} vs {:?}",
                a.text,
                b.text
            );
        }
    }
}

#[test]
fn repeated_boilerplate_collapses_to_one_requirement() {
    let text = "\
1. GENERAL CONDITIONS
Contractor shall maintain current DOT operating authority throughout the contract.

2. SPECIAL CONDITIONS
Contractor shall maintain current DOT operating authority throughout the contract.
";
    let analysis = DocumentStructurer::new().analyze(text, "conditions.pdf");
    let hits: Vec<_> = analysis
        .requirements
        .iter()
        .filter(|r| r.text.contains("DOT operating authority"))
        .collect();
    assert_eq!(hits.len(), 1, "the repeated statement must survive exactly once");
}

#[test]
fn singular_plural_variants_exceed_similarity_threshold() {
    let a = "Contractor must provide current insurance certificate naming the county as additional insured before operations begin.";
    let b = "Contractor must provide current insurance certificates naming the county as additional insured before operations begin.  ";
    assert!(similarity(a, b) > SIMILARITY_THRESHOLD);
}

#[test]
fn near_duplicate_statements_across_sections_collapse() {
    let text = "\
1. GENERAL CONDITIONS
Contractor must deliver monthly safety report summaries covering driver hours and vehicle inspections.

2. SPECIAL CONDITIONS
Contractor must deliver monthly safety report summary covering driver hours and vehicle inspections.
";
    let analysis = DocumentStructurer::new().analyze(text, "conditions.pdf");
    let hits: Vec<_> = analysis
        .requirements
        .iter()
        .filter(|r| r.text.contains("safety report"))
        .collect();
    assert_eq!(hits.len(), 1, "the reworded statement must collapse into the first");
    assert!(hits[0].text.contains("summaries"), "the first occurrence survives");
}

#[test]
fn invariant_mandatory_flag_is_pure_in_text() {
    assert!(is_mandatory("Bidder shall submit three copies."));
    assert!(is_mandatory("Attendance at the site visit is MANDATORY."));
    assert!(!is_mandatory("Bidders are encouraged to attend."));

    let analysis = DocumentStructurer::new().analyze(SAMPLE_RFB, "rfb-2024-017.pdf");
    for requirement in &analysis.requirements {
        assert_eq!(
            requirement.is_mandatory,
            is_mandatory(&requirement.text),
            "stored flag must equal the pure function of the text"
        );
    }
}

#[test]
fn insurance_section_yields_mandatory_insurance_requirement() {
    let analysis = DocumentStructurer::new().analyze(SAMPLE_RFB, "rfb-2024-017.pdf");

    let insurance: Vec<_> = analysis
        .requirements
        .iter()
        .filter(|r| r.category == Category::Insurance)
        .collect();
    assert!(!insurance.is_empty(), "insurance section must produce requirements");
    assert!(
        insurance.iter().any(|r| r.text.contains("$1,000,000")),
        "the cargo insurance figure must be captured"
    );
    assert!(
        insurance.iter().any(|r| r.is_mandatory),
        "the must-maintain statement is mandatory"
    );
}

#[test]
fn document_metadata_extracted_from_sample() {
    let analysis = DocumentStructurer::new().analyze(SAMPLE_RFB, "rfb-2024-017.pdf");

    assert_eq!(analysis.document_type, DocumentType::Rfb);
    assert_eq!(analysis.solicitation_number.as_deref(), Some("RFB-2024-017"));
    assert_eq!(analysis.due_date.as_deref(), Some("March 15, 2024"));
    assert_eq!(analysis.stats.total_length, SAMPLE_RFB.len());
    assert_eq!(
        analysis.stats.mandatory_items,
        analysis.requirements.iter().filter(|r| r.is_mandatory).count()
    );
}
