//! Common-words exclusion list.
//!
//! Capitalized tokens whose lowercase form appears in this list are
//! dropped during entity extraction so that sentence-initial function
//! words don't surface as characters. The list is loaded once per
//! process from a word file; a missing or unreadable file degrades to a
//! small built-in fallback and is logged, never raised.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use bookdigest_core::{Error, Result};

/// Bundled word list, one word per line.
const DEFAULT_WORDS_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/common_words.txt");

/// Minimal fallback when no word file can be read.
const FALLBACK_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "so", "as", "at",
    "by", "for", "from", "in", "into", "of", "on", "to", "with",
];

static EXCLUSIONS: OnceCell<ExclusionSet> = OnceCell::new();

/// Immutable set of lowercase words excluded from entity detection.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    /// Build a set from arbitrary words; each is trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Whether `token` is a common word (lookup is case-insensitive).
    pub fn is_common(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Read a word file: one word per line, blank lines skipped.
fn read_word_file(path: &Path) -> Result<ExclusionSet> {
    let contents = std::fs::read_to_string(path)?;
    let set = ExclusionSet::from_words(contents.lines());
    if set.is_empty() {
        return Err(Error::Lexicon(format!(
            "word file {} contains no words",
            path.display()
        )));
    }
    Ok(set)
}

/// Resolve the word-file path: explicit > `BOOKDIGEST_LEXICON` env >
/// bundled default.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    if let Some(p) = path {
        return p.to_path_buf();
    }
    if let Ok(p) = std::env::var("BOOKDIGEST_LEXICON") {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_WORDS_PATH)
}

/// Load an exclusion set from `path` (or the default location).
///
/// Load failure is a non-fatal degradation: the built-in fallback set
/// is returned and a warning logged.
pub fn load(path: Option<&Path>) -> ExclusionSet {
    let path = resolve_path(path);
    match read_word_file(&path) {
        Ok(set) => {
            debug!("Loaded {} exclusion words from {}", set.len(), path.display());
            set
        }
        Err(e) => {
            warn!(
                "Could not load common words from {}: {e}; using built-in fallback",
                path.display()
            );
            ExclusionSet::from_words(FALLBACK_WORDS.iter().copied())
        }
    }
}

/// Process-wide exclusion set, loaded on first use.
///
/// The first caller's `path` decides what gets loaded; later calls
/// return the cached set regardless of their argument. Reads after
/// initialization are lock-free.
pub fn global(path: Option<&Path>) -> &'static ExclusionSet {
    EXCLUSIONS.get_or_init(|| load(path))
}
