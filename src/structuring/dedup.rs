//! Near-duplicate collapse and stable id assignment.

use std::collections::BTreeSet;

use super::mining::{extract_keywords, is_mandatory, Candidate};
use crate::types::Requirement;

/// Two requirement texts above this word-set Jaccard similarity are
/// duplicates. Empirically tuned; behavioral parity matters more than the
/// exact value, so keep it unless the product owner says otherwise.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Tokens at or below this length are ignored when comparing texts.
const MIN_TOKEN_LEN: usize = 3;

/// Word-set Jaccard similarity over case-folded tokens longer than three
/// characters.
pub fn similarity(a: &str, b: &str) -> f64 {
    let words_a = token_set(a);
    let words_b = token_set(b);

    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = words_a.intersection(&words_b).count();
    intersection as f64 / union as f64
}

fn token_set(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > MIN_TOKEN_LEN)
        .map(|w| w.to_string())
        .collect()
}

/// Collapse near-duplicate candidates and assign `REQ-NNN` ids.
///
/// Dedup is greedy and order-dependent by design: the first occurrence
/// survives and later ones are dropped, so section-processing order must
/// be preserved for reproducibility. Ids are assigned after the collapse,
/// strictly increasing in discovery order.
pub(crate) fn dedup_and_assign_ids(candidates: Vec<Candidate>) -> Vec<Requirement> {
    let mut kept: Vec<Candidate> = Vec::new();

    for candidate in candidates {
        let duplicate = kept.iter().any(|existing| {
            existing.text == candidate.text
                || similarity(&existing.text, &candidate.text) > SIMILARITY_THRESHOLD
        });
        if !duplicate {
            kept.push(candidate);
        }
    }

    kept.into_iter()
        .enumerate()
        .map(|(i, c)| Requirement {
            id: format!("REQ-{:03}", i + 1),
            section_title: c.section_title,
            category: c.category,
            is_mandatory: is_mandatory(&c.text),
            is_question: c.is_question,
            keywords: extract_keywords(&c.text),
            text: c.text,
            context: c.context,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn candidate(text: &str) -> Candidate {
        Candidate {
            section_title: "GENERAL CONDITIONS".to_string(),
            category: Category::Other,
            text: text.to_string(),
            is_question: false,
            context: String::new(),
        }
    }

    #[test]
    fn dedup_is_idempotent_on_its_own_output() {
        let first = dedup_and_assign_ids(vec![
            candidate("Contractor must provide current insurance certificate naming the county as additional insured."),
            candidate("Contractor must provide current insurance certificates naming the county as additional insured."),
            candidate("Bids must be submitted in a sealed envelope before the deadline."),
        ]);
        assert_eq!(first.len(), 2);

        let again = dedup_and_assign_ids(first.iter().map(|r| candidate(&r.text)).collect());
        assert_eq!(again.len(), first.len());
        assert!(first.iter().zip(&again).all(|(a, b)| a.text == b.text));
    }
}
