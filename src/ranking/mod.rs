//! Candidate ranking and selection.
//!
//! Candidates are ordered lexicographically by a sequence of integer
//! rules, each only consulted when the previous ones tie. The standard
//! sequence prefers, in order: the larger choice-3 spread reduction,
//! the larger combined gender reduction, the larger proficiency
//! reduction, and finally the lower tier.

mod engine;
mod rules;
mod types;

pub use engine::{select_best, SwapRanker};
pub use rules::{Choice3Reduction, GenderReduction, ProficiencyReduction, TierOrder};
pub use types::RankingRule;
