//! BookDigest Analyze — manuscript digest pipeline.
//!
//! Takes already-decoded manuscript text and produces a structured
//! digest: ranked recurring characters, a short synopsis assembled from
//! thematically interesting passages, and one spotlighted "easter egg"
//! passage. Pure in-memory computation; the only I/O is the one-time
//! load of the common-words exclusion list.

pub mod analyze;
pub mod context;
pub mod easter_egg;
pub mod entities;
pub mod lexicon;
pub mod rank;
pub mod synopsis;

pub use analyze::{AnalysisResult, Analyzer};
pub use context::windows;
pub use easter_egg::{find_easter_egg, NO_EASTER_EGG};
pub use entities::{extract_entities, CandidateEntity};
pub use lexicon::ExclusionSet;
pub use rank::rank_characters;
pub use synopsis::{generate_synopsis, INTERESTING_KEYWORDS};
