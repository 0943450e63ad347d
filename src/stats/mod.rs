//! Team statistics and spreads.
//!
//! Statistics are a pure function of the current roster. They are
//! recomputed from scratch whenever needed and never cached across
//! swaps.

mod spread;
mod table;

pub use spread::{Metric, Spread};
pub use table::{StatsTable, TeamStats};

use crate::model::Cohort;

/// Computes per-team counts for the cohort's current roster.
pub fn compute_team_stats(cohort: &Cohort) -> StatsTable {
    StatsTable::from_cohort(cohort)
}

/// Computes the spread of every tracked metric. Zero teams yield a
/// zero spread.
pub fn compute_spreads(stats: &StatsTable) -> Spread {
    stats.spread()
}
