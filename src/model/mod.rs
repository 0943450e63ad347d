//! Student registry, team roster and the cohort that binds them.
//!
//! The registry is populated once by whatever ingests the source data;
//! the roster is the state that applied swaps rewrite.

mod cohort;
mod registry;
mod roster;
mod types;

pub use cohort::{Cohort, DanglingReference};
pub use registry::StudentRegistry;
pub use roster::{Team, TeamRoster};
pub use types::{Choice, Gender, Proficiency, Student};
