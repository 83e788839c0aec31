//! Candidate selection.
//!
//! Computes the set of kata still open to the user (index minus completed
//! ids) and picks one uniformly at random. The random source is a caller
//! supplied [`Rng`] so tests can seed it deterministically.

use std::collections::HashSet;

use rand::Rng;

use crate::store::ExerciseSummary;

/// Outcome of a selection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// One uncompleted kata, picked uniformly at random.
    Chosen(ExerciseSummary),
    /// Every indexed kata has been completed.
    Exhausted,
}

impl Selection {
    /// Returns the chosen summary, if any.
    #[must_use]
    pub const fn chosen(&self) -> Option<&ExerciseSummary> {
        match self {
            Self::Chosen(summary) => Some(summary),
            Self::Exhausted => None,
        }
    }
}

/// Pick one uncompleted kata from the index.
///
/// Candidates are the index entries whose id is not in `completed_ids`;
/// each remaining candidate is equally likely. An empty candidate set is
/// the [`Selection::Exhausted`] outcome, not an error. Only the summary is
/// returned — fetching full details for the pick is the caller's one
/// on-demand request.
pub fn select_candidate<R: Rng + ?Sized>(
    index: &[ExerciseSummary],
    completed_ids: &HashSet<String>,
    rng: &mut R,
) -> Selection {
    let candidates: Vec<&ExerciseSummary> = index
        .iter()
        .filter(|summary| !completed_ids.contains(&summary.id))
        .collect();

    if candidates.is_empty() {
        return Selection::Exhausted;
    }

    let pick = rng.gen_range(0..candidates.len());
    Selection::Chosen(candidates[pick].clone())
}
