//! Sequential rule composition.

use super::rules::{Choice3Reduction, GenderReduction, ProficiencyReduction, TierOrder};
use super::types::RankingRule;
use crate::swap::SwapCandidate;

/// Ranks swap candidates by a sequence of rules.
///
/// Rules are applied in order; a later rule is only consulted when every
/// earlier rule ties. Candidates tied on all rules keep their pool order.
///
/// # Examples
///
/// ```
/// use team_balancer::ranking::{Choice3Reduction, SwapRanker, TierOrder};
///
/// // Tier first, then choice-3 reduction
/// let ranker = SwapRanker::new().with_rule(TierOrder).with_rule(Choice3Reduction);
/// assert_eq!(ranker.rule_names(), vec!["TierOrder", "Choice3Reduction"]);
///
/// let standard = SwapRanker::standard();
/// assert_eq!(standard.rule_count(), 4);
/// ```
pub struct SwapRanker {
    rules: Vec<Box<dyn RankingRule>>,
}

impl SwapRanker {
    /// Creates a ranker with no rules (pool order is kept).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The ranking used by the balancing loop: choice-3 reduction, then
    /// combined gender reduction, then proficiency reduction, then tier.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(Choice3Reduction)
            .with_rule(GenderReduction)
            .with_rule(ProficiencyReduction)
            .with_rule(TierOrder)
    }

    /// Appends a rule.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Rule names, most significant first.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn scores(&self, candidate: &SwapCandidate) -> Vec<i64> {
        self.rules.iter().map(|r| r.score(candidate)).collect()
    }

    /// Candidate indices, best first.
    pub fn sort_indices(&self, candidates: &[SwapCandidate]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let scores: Vec<Vec<i64>> = candidates.iter().map(|c| self.scores(c)).collect();
        // Stable: full ties keep pool order
        indices.sort_by(|&a, &b| scores[a].cmp(&scores[b]));
        indices
    }

    /// Candidates in ranked order.
    pub fn sort<'a>(&self, candidates: &'a [SwapCandidate]) -> Vec<&'a SwapCandidate> {
        self.sort_indices(candidates)
            .into_iter()
            .map(|i| &candidates[i])
            .collect()
    }

    /// Index of the best improving candidate, or `None` when no
    /// candidate improves.
    pub fn select_best(&self, candidates: &[SwapCandidate]) -> Option<usize> {
        self.sort_indices(candidates)
            .into_iter()
            .find(|&i| candidates[i].improvement.improves())
    }
}

impl Default for SwapRanker {
    fn default() -> Self {
        Self::standard()
    }
}

/// Picks the best candidate under the standard ranking.
pub fn select_best(candidates: &[SwapCandidate]) -> Option<&SwapCandidate> {
    SwapRanker::standard()
        .select_best(candidates)
        .map(|i| &candidates[i])
}
