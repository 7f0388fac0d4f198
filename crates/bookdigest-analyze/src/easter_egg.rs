//! Easter-egg passage selection.
//!
//! Spotlights one passage around the word "first" that mentions a main
//! character. Selection among valid candidates is uniformly random; the
//! RNG is injected so tests can pin the choice.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::context::windows;
use crate::entities::CandidateEntity;

/// Keyword whose surroundings are searched for the easter egg.
pub const EASTER_EGG_KEYWORD: &str = "first";

/// Returned when no candidate passage qualifies.
pub const NO_EASTER_EGG: &str = "No interesting first passage found.";

/// Pick one passage around [`EASTER_EGG_KEYWORD`] that mentions a main
/// character (case-sensitive), chosen uniformly at random, or the
/// sentinel when none qualifies.
pub fn find_easter_egg<R: Rng + ?Sized>(
    text: &str,
    main_characters: &[CandidateEntity],
    radius: usize,
    rng: &mut R,
) -> String {
    let names: Vec<&str> = main_characters.iter().map(|c| c.name.as_str()).collect();

    let candidates: Vec<String> = windows(text, EASTER_EGG_KEYWORD, radius)
        .filter(|passage| names.iter().any(|name| passage.contains(name)))
        .collect();

    debug!("Easter-egg candidates: {}", candidates.len());
    match candidates.choose(rng) {
        Some(passage) => passage.clone(),
        None => NO_EASTER_EGG.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn character(name: &str) -> CandidateEntity {
        CandidateEntity { name: name.into(), occurrences: 1 }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_returns_a_valid_candidate() {
        let text = "Alice won the first prize. Later Bob came first in the race.";
        let egg = find_easter_egg(text, &[character("Alice")], 150, &mut rng());
        assert!(egg.contains("first"));
        assert!(egg.contains("Alice"));
    }

    #[test]
    fn test_sentinel_when_no_character_nearby() {
        let text = "The first snow fell quietly over the empty village.";
        let egg = find_easter_egg(text, &[character("Alice")], 150, &mut rng());
        assert_eq!(egg, NO_EASTER_EGG);
    }

    #[test]
    fn test_sentinel_when_keyword_absent() {
        let text = "Alice and Bob shared a quiet afternoon.";
        let egg = find_easter_egg(text, &[character("Alice")], 150, &mut rng());
        assert_eq!(egg, NO_EASTER_EGG);
    }

    #[test]
    fn test_sentinel_on_empty_text() {
        let egg = find_easter_egg("", &[character("Alice")], 150, &mut rng());
        assert_eq!(egg, NO_EASTER_EGG);
    }

    #[test]
    fn test_choice_is_always_from_the_candidate_set() {
        let text = "Alice was first. Bob was first. Alice and Bob tied for first.";
        let characters = [character("Alice"), character("Bob")];
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let egg = find_easter_egg(text, &characters, 10, &mut rng);
            assert!(egg.contains("first"));
            assert!(egg.contains("Alice") || egg.contains("Bob"));
        }
    }
}
