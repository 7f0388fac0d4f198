//! Analysis orchestration: extract → rank → synopsis → easter egg.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use bookdigest_core::AnalyzeConfig;

use crate::easter_egg::find_easter_egg;
use crate::entities::{extract_entities, CandidateEntity};
use crate::lexicon;
use crate::rank::rank_characters;
use crate::synopsis::generate_synopsis;

/// Structured digest of one manuscript.
///
/// Serializes to the shape the retrieval API exposes:
/// `characters`, `charactersDetails`, `synopsis`, `synopsisList`,
/// `easterEgg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Top-ranked character names, rank order.
    pub characters: Vec<String>,
    /// The same characters with occurrence counts.
    pub characters_details: Vec<CandidateEntity>,
    /// Synopsis passages joined by a blank line, for direct display.
    pub synopsis: String,
    /// Individual synopsis passages, discovery order.
    pub synopsis_list: Vec<String>,
    /// One spotlighted passage, or a sentinel when none qualifies.
    pub easter_egg: String,
}

/// Runs the digest pipeline over already-decoded manuscript text.
///
/// Stateless apart from the process-wide exclusion-word set; a single
/// `Analyzer` may be shared across threads.
pub struct Analyzer {
    config: AnalyzeConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    /// Analyzer configured from `BOOKDIGEST_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(AnalyzeConfig::from_env())
    }

    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }

    /// Analyze `text` and assemble the digest.
    ///
    /// Never fails: empty or entity-free text degrades to empty
    /// character and synopsis lists and the sentinel easter egg.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_with_rng(text, &mut rand::thread_rng())
    }

    /// Like [`analyze`](Self::analyze) with an injected RNG, so the
    /// easter-egg choice can be pinned in tests.
    pub fn analyze_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> AnalysisResult {
        let exclusions = lexicon::global(self.config.lexicon_path.as_deref());

        let candidates = extract_entities(text, exclusions);
        debug!("Found {} candidate entities", candidates.len());

        let ranked = rank_characters(candidates, self.config.top_characters);
        let gate = self.config.main_characters.min(ranked.len());
        let main_characters = &ranked[..gate];

        let synopsis_list = generate_synopsis(
            text,
            main_characters,
            self.config.max_passages,
            self.config.context_radius,
        );
        let easter_egg =
            find_easter_egg(text, main_characters, self.config.context_radius, rng);

        info!(
            "Analyzed {} chars of text: {} ranked characters, {} synopsis passages",
            text.len(),
            ranked.len(),
            synopsis_list.len()
        );

        AnalysisResult {
            characters: ranked.iter().map(|c| c.name.clone()).collect(),
            synopsis: synopsis_list.join("\n\n"),
            characters_details: ranked,
            synopsis_list,
            easter_egg,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzeConfig::default())
    }
}
