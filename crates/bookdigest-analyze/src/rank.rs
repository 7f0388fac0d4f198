//! Frequency ranking of candidate entities.

use crate::entities::CandidateEntity;

/// Rank candidates by descending occurrence count, keeping the top `n`.
///
/// Ties keep the relative order in which the names were first
/// encountered in the source text (`sort_by` is a stable sort); that
/// order is observable output and must not change.
pub fn rank_characters(mut candidates: Vec<CandidateEntity>, top_n: usize) -> Vec<CandidateEntity> {
    candidates.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    candidates.truncate(top_n);
    candidates
}
