//! Built-in ranking rules. Each returns a score where lower ranks first.

use super::types::RankingRule;
use crate::swap::SwapCandidate;

/// Larger reduction of the choice-3 spread first.
pub struct Choice3Reduction;

impl RankingRule for Choice3Reduction {
    fn name(&self) -> &str {
        "Choice3Reduction"
    }

    fn score(&self, candidate: &SwapCandidate) -> i64 {
        -candidate.improvement.delta_choice3
    }
}

/// Larger combined reduction of both gender spreads first.
pub struct GenderReduction;

impl RankingRule for GenderReduction {
    fn name(&self) -> &str {
        "GenderReduction"
    }

    fn score(&self, candidate: &SwapCandidate) -> i64 {
        -candidate.improvement.delta_gender()
    }
}

/// Larger reduction of the proficiency spread first.
pub struct ProficiencyReduction;

impl RankingRule for ProficiencyReduction {
    fn name(&self) -> &str {
        "ProficiencyReduction"
    }

    fn score(&self, candidate: &SwapCandidate) -> i64 {
        -candidate.improvement.delta_proficiency
    }
}

/// Lower (more constrained) tier first.
pub struct TierOrder;

impl RankingRule for TierOrder {
    fn name(&self) -> &str {
        "TierOrder"
    }

    fn score(&self, candidate: &SwapCandidate) -> i64 {
        i64::from(candidate.tier.number())
    }
}
