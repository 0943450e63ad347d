//! Core trait for candidate ranking rules.

use crate::swap::SwapCandidate;

/// A scoring rule over swap candidates.
///
/// Scores are integers where **lower is higher priority**. Rules that
/// prefer larger improvements return the negated delta.
///
/// # Examples
///
/// ```
/// use team_balancer::ranking::RankingRule;
/// use team_balancer::swap::SwapCandidate;
///
/// // Prefer candidates whose source team has a shorter id
/// struct FromTeamName;
///
/// impl RankingRule for FromTeamName {
///     fn name(&self) -> &str { "FromTeamName" }
///     fn score(&self, c: &SwapCandidate) -> i64 {
///         c.from_team.len() as i64
///     }
/// }
/// ```
pub trait RankingRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the candidate.
    fn score(&self, candidate: &SwapCandidate) -> i64;
}
