//! Synopsis assembly from thematically interesting passages.
//!
//! Seeds passage discovery with a fixed keyword vocabulary, keeps only
//! passages that mention a main character, and collapses near-duplicate
//! windows (overlapping hits produce almost identical excerpts) with a
//! prefix signature.

use std::collections::HashSet;

use tracing::debug;

use crate::context::windows;
use crate::entities::CandidateEntity;

/// Thematically significant words that seed passage discovery.
///
/// A slice, not a set: the scan visits keywords in this exact order,
/// and that order decides which passages are found first — it is
/// observable in the output and must stay fixed.
pub const INTERESTING_KEYWORDS: &[&str] = &[
    "bet", "wager", "gamble", "pray", "suicide", "kill", "catch", "oust",
    "coup", "death", "crash", "died", "rape", "die", "murder", "jail",
    "assault", "lost", "battle", "hit", "strike", "shoot", "fight",
    "bleed", "stab", "burn", "kiss", "celebrate", "overcome", "surrender",
    "yell", "shout", "escape", "sex", "negotiation", "deal", "court",
    "marry", "married", "divorce", "divorced", "desperate", "loser",
    "victory", "defeat", "succeed", "fail", "betray", "love", "hate",
    "discover", "reveal", "secret", "mystery", "solve",
];

/// Length of the prefix used as a passage's dedup signature.
const SIGNATURE_LEN: usize = 50;

/// Collect up to `max_passages` unique passages around interesting
/// keywords, keeping only those that mention one of `main_characters`
/// (case-sensitive). Passages appear in discovery order; the scan
/// short-circuits once the cap is reached.
pub fn generate_synopsis(
    text: &str,
    main_characters: &[CandidateEntity],
    max_passages: usize,
    radius: usize,
) -> Vec<String> {
    // No characters means no passage can pass the gate.
    if main_characters.is_empty() || max_passages == 0 {
        return Vec::new();
    }

    let names: Vec<&str> = main_characters.iter().map(|c| c.name.as_str()).collect();
    let mut passages: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    'keywords: for keyword in INTERESTING_KEYWORDS {
        for passage in windows(text, keyword, radius) {
            if !names.iter().any(|name| passage.contains(name)) {
                continue;
            }
            if seen.insert(signature(&passage)) {
                passages.push(passage);
                if passages.len() >= max_passages {
                    break 'keywords;
                }
            }
        }
    }

    debug!("Collected {} synopsis passages", passages.len());
    passages
}

/// First 50 characters of a passage; near-identical overlapping windows
/// share a signature even when their tails differ.
fn signature(passage: &str) -> String {
    passage.chars().take(SIGNATURE_LEN).collect()
}
