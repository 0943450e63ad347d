//! Swap candidates: pair detection, tiered generation, evaluation and
//! application.
//!
//! A swap exchanges equal-size units between the team holding the most
//! choice-3 students and the team holding the fewest: one solo for one
//! solo, or one detected pair for another. Locked students never move.

mod evaluator;
mod generator;
mod pairing;
mod types;

pub use evaluator::{evaluate_swap, Evaluator};
pub use generator::generate_candidates;
pub use pairing::{partition_team, Pair, TeamPartition};
pub use types::{Improvement, MatchRule, SwapCandidate, SwapShape, Tier};

use crate::error::BalanceError;
use crate::model::Cohort;

/// Applies a candidate to the cohort's roster.
pub fn apply_swap(cohort: &mut Cohort, candidate: &SwapCandidate) -> Result<(), BalanceError> {
    cohort.roster_mut().transfer(
        &candidate.from_team,
        &candidate.students_out,
        &candidate.to_team,
        &candidate.students_in,
    )
}
