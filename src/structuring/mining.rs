//! Per-section requirement mining.
//!
//! Eight independent extraction passes run over the same section text and
//! their hits are concatenated, never short-circuited. Specialized passes
//! force their own category regardless of the section's, since a
//! requirement's nature is evidence from its own text, not only its
//! container. All rules are data; orchestration never branches on a
//! specific pattern.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text::window;
use crate::types::{Category, Section};

/// A mined requirement candidate, before deduplication and id
/// assignment.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub section_title: String,
    pub category: Category,
    pub text: String,
    pub is_question: bool,
    pub context: String,
}

/// One named extraction rule: a pattern set, an optional forced category,
/// and a minimum hit length (exclusive) that rejects noise.
struct ExtractionRule {
    name: &'static str,
    category: Option<Category>,
    min_len: usize,
    patterns: Vec<Regex>,
}

fn rx(pattern: &str, name: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid {name} pattern: {e}"))
}

static EXTRACTION_RULES: Lazy<Vec<ExtractionRule>> = Lazy::new(|| {
    vec![
        ExtractionRule {
            name: "mandatory-statement",
            category: None,
            min_len: 20,
            patterns: vec![
                rx(r"(?i)(?:bidder|contractor|vendor|offeror|company|supplier|carrier|respondent)s?\s+(?:shall|must|is required to|are required to)\s+[^.]{20,300}", "mandatory-statement"),
                rx(r"(?i)(?:shall|must|is required|are required)\s+(?:provide|submit|include|demonstrate|maintain|possess|have|be|comply)\s+[^.]{20,300}", "mandatory-statement"),
            ],
        },
        ExtractionRule {
            name: "submission",
            category: Some(Category::Submission),
            min_len: 15,
            patterns: vec![
                rx(r"(?i)(?:submit|provide|include|attach|furnish)\s+(?:a|the|all|copy of|copies of)?\s*(?:form\s+[A-Z0-9-]+|[A-Z][a-z]+\s+Form|certificate|documentation|proof|evidence)(?:\s+of)?\s+[^.]{10,150}", "submission"),
                rx(r"(?i)bid\s+(?:shall|must)\s+(?:be submitted|include)\s+[^.]{20,200}", "submission"),
            ],
        },
        ExtractionRule {
            name: "specification",
            category: Some(Category::Specifications),
            min_len: 15,
            patterns: vec![
                rx(r"(?i)(?:equipment|vehicle|truck|trailer)(?:\s+type)?[:\s]+[^\n]{10,150}", "specification"),
                rx(r"(?i)(?:minimum|maximum)\s+(?:capacity|weight|size|age|year)[:\s]+[^\n]{10,100}", "specification"),
                rx(r"(?i)(?:must be|shall be|equipped with|featuring)\s+[a-z][^.\n]{15,150}", "specification"),
                rx(r"(?i)(?:capacity|volume|quantity|loads?|trips?)\s*(?:of|per)?[:\s]*\d+[^.\n]{5,100}", "specification"),
                rx(r"(?i)(?:minimum|maximum)\s+of\s+\d+[^.\n]{10,100}", "specification"),
                rx(r"(?i)(?:response time|delivery time|completion|turnaround)\s*[:\s]*[^.\n]{10,100}", "specification"),
                rx(r"(?i)(?:hours of operation|operating hours|service hours)\s*[:\s]*[^.\n]{10,100}", "specification"),
            ],
        },
        ExtractionRule {
            name: "qualification",
            category: Some(Category::Qualifications),
            min_len: 15,
            patterns: vec![
                rx(r"(?i)(?:must|shall|required to)\s+(?:possess|have|hold|maintain|be)\s+(?:a\s+)?(?:valid\s+)?(?:license|certification|DOT\s+number|MC\s+number|insurance|[A-Z]{2,6}\s+certification|CDL|authority)[^.\n]{0,150}", "qualification"),
                rx(r"(?i)(?:minimum|required)\s+(?:of\s+)?\d+\s+years?\s+(?:of\s+)?experience[^.\n]{0,100}", "qualification"),
                rx(r"(?i)(?:bidder|contractor|vendor)\s+(?:must|shall)\s+(?:demonstrate|provide evidence of|show proof of)\s+[^.\n]{20,150}", "qualification"),
            ],
        },
        ExtractionRule {
            name: "insurance",
            category: Some(Category::Insurance),
            min_len: 15,
            patterns: vec![
                rx(r"(?i)(?:insurance|liability|coverage|bond)\s+(?:of|in the amount of|minimum of|at least)?\s*\$[\d,]+[^.\n]{0,100}", "insurance"),
                rx(r"(?i)(?:general|auto|vehicle|cargo|workers['\s]?\s*compensation|professional)\s+(?:liability\s+)?insurance[^.\n]{0,150}", "insurance"),
                rx(r"(?i)certificate of insurance[^.\n]{0,150}", "insurance"),
                rx(r"(?i)(?:maintain|carry|provide)\s+\$[\d,]+\s+(?:[a-z]+\s+)?(?:insurance|liability|coverage|bond)[^.\n]{0,100}", "insurance"),
            ],
        },
        ExtractionRule {
            name: "timeline",
            category: Some(Category::Timeline),
            min_len: 10,
            patterns: vec![
                rx(r"(?i)(?:contract period|performance period|term)[:\s]+[^.\n]{10,100}", "timeline"),
                rx(r"(?i)(?:start date|commencement date|begin)[:\s]+[^.\n]{10,100}", "timeline"),
                rx(r"(?i)(?:completion date|end date|expire)[:\s]+[^.\n]{10,100}", "timeline"),
                rx(r"(?i)(?:within|no later than)\s+\d+\s+(?:days?|weeks?|months?|hours?)[^.\n]{0,100}", "timeline"),
            ],
        },
        ExtractionRule {
            name: "pricing",
            category: Some(Category::Pricing),
            min_len: 15,
            patterns: vec![
                rx(r"(?i)(?:price|pricing|cost|rate)s?\s+(?:shall|must|should)\s+(?:be|include)\s+[^.\n]{20,150}", "pricing"),
                rx(r"(?i)(?:unit price|price per|rate per)\s+[^.\n]{10,100}", "pricing"),
                rx(r"(?i)bid\s+price\s+(?:form|schedule|sheet)[^.\n]{0,150}", "pricing"),
            ],
        },
    ]
});

/// Imperative phrasings that behave like questions without carrying a
/// question mark.
static QUESTION_LIKE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        rx(r"(?i)(?:what|who|how|when|where|why|describe|provide|explain|state|identify|specify|list|submit|demonstrate)(?:\s+is|\s+are|\s+your|\s+the|\s+an?|\s+you|\s+do|\s+does|\s+can|\s+will|\s+shall|\s+must|\s+may)?\s+[^.!?]+(?:insurance|liability|coverage|certification|experience|qualifications?|company|business|operations?|past performance|references)", "question-like"),
        rx(r"(?i)(?:insurance|liability|coverage|certification)(?:\s+requirements?|\s+information|\s+details|\s+coverage)", "question-like"),
        rx(r"(?i)(?:company|business|corporate)(?:\s+information|\s+profile|\s+overview|\s+background)", "question-like"),
        rx(r"(?i)(?:past performance|references|experience)(?:\s+information|\s+details|\s+requirements?|\s+history)", "question-like"),
        rx(r"(?i)(?:provide|submit|list)(?:\s+your|\s+the)?\s+(?:past performance|references|experience)", "question-like"),
        rx(r"(?i)(?:where|who)(?:\s+the)?\s+(?:bidder|proposer|contractor)(?:\s+can)?(?:not\s+)?(?:make|certify)(?:\s+the)?\s+certification", "question-like"),
        rx(r"(?i)certification(?:\s+exceptions?|\s+cannot|\s+limitations?)", "question-like"),
    ]
});

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| rx(r"^[•\-*\d]+[.)]\s*", "list marker"));

static KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        rx(r"(?i)\b(CDL|DOT|MC|FMCSA|insurance|license|certification|certificate)\b", "keyword"),
        rx(r"(?i)\b(\d+\s*(?:yard|ton|lb|gallon|mile|hour|day|week|month|year)s?)\b", "keyword"),
        rx(r"(?i)\b(truck|vehicle|trailer|equipment|driver|dispatcher)\b", "keyword"),
    ]
});

static MODAL_KEYWORDS: [&str; 4] = ["shall", "must", "required", "mandatory"];

/// Whether a requirement is mandatory. A pure function of the text alone,
/// independent of which pass produced the candidate.
pub fn is_mandatory(text: &str) -> bool {
    let lower = text.to_lowercase();
    MODAL_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Keyword set for a requirement, case-folded and deduplicated.
pub fn extract_keywords(text: &str) -> std::collections::BTreeSet<String> {
    let mut keywords = std::collections::BTreeSet::new();
    for pattern in KEYWORD_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                keywords.insert(m.as_str().to_lowercase());
            }
        }
    }
    keywords
}

/// Ordered section-title taxonomy; first match wins, default `Other`.
///
/// Dollar-bearing categories (insurance, pricing, timeline, submission)
/// are consulted before the generic `requirement` keyword so a title like
/// "INSURANCE REQUIREMENTS" lands on INSURANCE, not QUALIFICATIONS.
static SECTION_TAXONOMY: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    vec![
        (Category::Scope, rx(r"(?i)scope|description|statement of work|sow|background|project description", "taxonomy")),
        (Category::Insurance, rx(r"(?i)insurance|liability|coverage|bond", "taxonomy")),
        (Category::Timeline, rx(r"(?i)schedule|timeline|deadline|calendar|period|duration", "taxonomy")),
        (Category::Pricing, rx(r"(?i)price|pricing|cost|payment|compensation", "taxonomy")),
        (Category::Submission, rx(r"(?i)submission|instruction|proposal|bid submittal|how to bid", "taxonomy")),
        (Category::Specifications, rx(r"(?i)specification|technical|equipment|vehicle|standard", "taxonomy")),
        (Category::Qualifications, rx(r"(?i)qualification|eligibility|experience|capability|requirement", "taxonomy")),
        (Category::Compliance, rx(r"(?i)compliance|regulation|legal|term|condition", "taxonomy")),
        (Category::Administrative, rx(r"(?i)administrative|contact|general information", "taxonomy")),
        (Category::Technical, rx(r"(?i)technical approach|methodology|procedure", "taxonomy")),
    ]
});

pub fn categorize_section(title: &str) -> Category {
    for (category, pattern) in SECTION_TAXONOMY.iter() {
        if pattern.is_match(title) {
            return *category;
        }
    }
    Category::Other
}

/// Run every extraction pass over one section and concatenate the hits.
pub(crate) fn mine_section(section: &Section) -> Vec<Candidate> {
    let section_category = categorize_section(&section.title);
    let content = &section.content;
    let mut candidates = Vec::new();

    mine_questions(section, section_category, &mut candidates);

    for rule in EXTRACTION_RULES.iter() {
        for pattern in &rule.patterns {
            for m in pattern.find_iter(content) {
                let text = m.as_str().trim();
                if text.len() <= rule.min_len || is_digits_only(text) {
                    continue;
                }
                log::trace!("{} hit in '{}': {}", rule.name, section.title, text);
                let context = window(content, m.start().saturating_sub(100), m.start() + 300)
                    .trim()
                    .to_string();
                candidates.push(Candidate {
                    section_title: section.title.clone(),
                    category: rule.category.unwrap_or(section_category),
                    text: text.to_string(),
                    is_question: false,
                    context,
                });
            }
        }
    }

    candidates
}

/// Question extraction: `?`-terminated segments re-anchored to their
/// sentence start, plus question-like imperative phrases.
fn mine_questions(section: &Section, section_category: Category, out: &mut Vec<Candidate>) {
    let content = &section.content;

    for (qpos, _) in content.match_indices('?') {
        // Collapse runs of question marks onto the first.
        if content[..qpos].ends_with('?') {
            continue;
        }
        let before = &content[..qpos];
        let sentence_start = before
            .rfind('.')
            .into_iter()
            .chain(before.rfind('\n'))
            .chain(std::iter::once(qpos.saturating_sub(300)))
            .max()
            .unwrap_or(0);

        let raw = window(content, sentence_start, qpos)
            .trim_start_matches(['.', '\n'])
            .trim();
        let text = LIST_MARKER.replace(raw, "").trim().to_string();
        if text.len() <= 10 {
            continue;
        }

        let context = window(content, qpos.saturating_sub(200), qpos + 100)
            .trim()
            .to_string();
        out.push(Candidate {
            section_title: section.title.clone(),
            category: section_category,
            text: format!("{text}?"),
            is_question: true,
            context,
        });
    }

    for pattern in QUESTION_LIKE_PATTERNS.iter() {
        for m in pattern.find_iter(content) {
            let text = m.as_str().trim();
            if text.len() <= 15 || out.iter().any(|c| c.text.contains(text)) {
                continue;
            }
            let context = window(content, m.start().saturating_sub(50), m.end() + 50)
                .trim()
                .to_string();
            out.push(Candidate {
                section_title: section.title.clone(),
                category: section_category,
                text: text.to_string(),
                is_question: true,
                context,
            });
        }
    }
}

fn is_digits_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
