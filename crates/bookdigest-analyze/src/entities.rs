//! Capitalized-token entity extraction.
//!
//! Scans text for tokens shaped like proper nouns (one uppercase letter
//! followed by 1–15 lowercase letters) and counts exact occurrences,
//! dropping tokens whose lowercase form is in the exclusion set.
//!
//! Known limitation: a sentence-initial common word that is missing
//! from the exclusion list is indistinguishable from a proper noun and
//! gets counted as a candidate. That over-counting is part of the
//! heuristic's observable behavior.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::ExclusionSet;

static CAPITALIZED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]{1,15}\b").unwrap());

/// A potential character: a capitalized token and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateEntity {
    pub name: String,
    pub occurrences: usize,
}

/// Extract candidate entities from `text`, in first-encounter order.
///
/// Names are case-sensitive and counted by exact match; the returned
/// order is the order in which each name was first seen while scanning
/// left to right, which the ranker relies on for tie-breaking.
pub fn extract_entities(text: &str, lexicon: &ExclusionSet) -> Vec<CandidateEntity> {
    let mut candidates: Vec<CandidateEntity> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in CAPITALIZED_TOKEN.find_iter(text) {
        let name = m.as_str();
        if lexicon.is_common(name) {
            continue;
        }
        match index.get(name) {
            Some(&i) => candidates[i].occurrences += 1,
            None => {
                index.insert(name.to_string(), candidates.len());
                candidates.push(CandidateEntity {
                    name: name.to_string(),
                    occurrences: 1,
                });
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> ExclusionSet {
        ExclusionSet::from_words(["the", "a", "and", "met"])
    }

    #[test]
    fn test_counts_exact_occurrences() {
        let text = "Alice met Bob. Alice and Bob talked. Alice left.";
        let entities = extract_entities(text, &lexicon());
        assert_eq!(
            entities,
            vec![
                CandidateEntity { name: "Alice".into(), occurrences: 3 },
                CandidateEntity { name: "Bob".into(), occurrences: 2 },
            ]
        );
    }

    #[test]
    fn test_excluded_words_dropped_even_capitalized() {
        let text = "The cat. And The dog. Alice waved.";
        let entities = extract_entities(text, &lexicon());
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Alice");
    }

    #[test]
    fn test_first_encounter_order_preserved() {
        let text = "Zelda saw Yorick. Adam saw Zelda.";
        let entities = extract_entities(text, &lexicon());
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zelda", "Yorick", "Adam"]);
    }

    #[test]
    fn test_ignores_all_caps_and_lowercase() {
        let text = "NASA launched. alice slept. X marks the spot.";
        let entities = extract_entities(text, &lexicon());
        assert!(entities.is_empty());
    }

    #[test]
    fn test_token_length_bounds() {
        // One uppercase letter plus 1..=15 lowercase letters.
        let text = "Supercalifragilisticexpialidocious met Jo and Abcdefghijklmnop.";
        let entities = extract_entities(text, &lexicon());
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Jo", "Abcdefghijklmnop"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_entities("", &lexicon()).is_empty());
    }
}
