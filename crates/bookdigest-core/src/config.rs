//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tunables for a single analysis run.
///
/// Defaults reproduce the canonical pipeline: top 10 characters for
/// display, top 5 as the relevance gate, at most 5 synopsis passages,
/// and a 150-character context radius around keyword hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Number of ranked characters reported in the result.
    pub top_characters: usize,
    /// Number of top characters used to gate synopsis / easter-egg
    /// passages ("main characters").
    pub main_characters: usize,
    /// Maximum number of synopsis passages.
    pub max_passages: usize,
    /// Characters of context kept on each side of a keyword match.
    pub context_radius: usize,
    /// Path to the common-words exclusion list. `None` uses the
    /// bundled default location.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            top_characters: 10,
            main_characters: 5,
            max_passages: 5,
            context_radius: 150,
            lexicon_path: None,
        }
    }
}

impl AnalyzeConfig {
    /// Create configuration from environment variables and defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let top_characters = std::env::var("BOOKDIGEST_TOP_CHARACTERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.top_characters);

        let max_passages = std::env::var("BOOKDIGEST_MAX_PASSAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_passages);

        let context_radius = std::env::var("BOOKDIGEST_CONTEXT_RADIUS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.context_radius);

        let lexicon_path = std::env::var("BOOKDIGEST_LEXICON").ok().map(PathBuf::from);

        Self {
            top_characters,
            // The relevance gate is always a subset of the reported list.
            main_characters: defaults.main_characters.min(top_characters),
            max_passages,
            context_radius,
            lexicon_path,
        }
    }
}
