//! Greedy swap loop.
//!
//! # Algorithm
//!
//! 1. Compute spreads; stop as `Converged` if all are within target
//! 2. Find the teams with the most and the fewest choice-3 students;
//!    stop as `Plateaued` if their gap is within target
//! 3. Generate improving candidates between them; stop as `Stalled` if
//!    there are none
//! 4. Apply the best-ranked candidate and log it
//! 5. Stop as `Exhausted` once `max_iterations` swaps are applied,
//!    otherwise repeat
//!
//! Statistics are recomputed from the roster at the start of every
//! round.

use super::config::BalanceConfig;
use super::types::LoopState;
use crate::error::BalanceError;
use crate::model::Cohort;
use crate::ranking::SwapRanker;
use crate::stats::{compute_spreads, compute_team_stats, Metric, Spread};
use crate::swap::{apply_swap, generate_candidates, SwapCandidate};

/// Result of a balancing run.
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    /// Every applied swap, in application order.
    pub applied_swaps: Vec<SwapCandidate>,
    /// Spread before the first round.
    pub initial_spread: Spread,
    /// Spread when the loop stopped.
    pub final_spread: Spread,
    /// Terminal state reached.
    pub state: LoopState,
    /// Number of swaps applied.
    pub iterations: usize,
    /// Spread after each applied swap.
    pub spread_history: Vec<Spread>,
}

/// Balancing loop runner.
pub struct BalanceRunner;

impl BalanceRunner {
    /// Balances the cohort in place using the standard ranking.
    ///
    /// # Examples
    ///
    /// ```
    /// use team_balancer::balance::{BalanceConfig, BalanceRunner, LoopState};
    /// use team_balancer::model::{
    ///     Choice, Cohort, Gender, Proficiency, Student, StudentRegistry, TeamRoster,
    /// };
    ///
    /// let mut students = Vec::new();
    /// for i in 0..6 {
    ///     students.push(Student::new(format!("h{i}"), Choice::Three, Gender::A, Proficiency::Proficient));
    ///     students.push(Student::new(format!("l{i}"), Choice::One, Gender::A, Proficiency::Proficient));
    /// }
    /// let registry = StudentRegistry::from_students(students).unwrap();
    /// let mut roster = TeamRoster::new();
    /// roster.add_team("T1", (0..6).map(|i| format!("h{i}"))).unwrap();
    /// roster.add_team("T2", (0..6).map(|i| format!("l{i}"))).unwrap();
    /// let mut cohort = Cohort::new(registry, roster);
    ///
    /// let outcome = BalanceRunner::run(&mut cohort, &BalanceConfig::default()).unwrap();
    /// assert_eq!(outcome.state, LoopState::Converged);
    /// assert!(outcome.final_spread.choice_3 <= 3);
    /// ```
    pub fn run(cohort: &mut Cohort, config: &BalanceConfig) -> Result<BalanceOutcome, BalanceError> {
        Self::run_with_ranker(cohort, config, &SwapRanker::standard())
    }

    /// Balances the cohort in place, ranking candidates with `ranker`.
    ///
    /// Fails only on an invalid configuration; every other way the loop
    /// can stop is reported through [`BalanceOutcome::state`].
    pub fn run_with_ranker(
        cohort: &mut Cohort,
        config: &BalanceConfig,
        ranker: &SwapRanker,
    ) -> Result<BalanceOutcome, BalanceError> {
        config.validate()?;

        let initial_spread = compute_spreads(&compute_team_stats(cohort));
        let mut applied_swaps = Vec::new();
        let mut spread_history = Vec::new();
        let mut state = LoopState::Running;

        while !state.is_terminal() {
            state = Self::step(cohort, config, ranker, &mut applied_swaps)?;
            if let Some(last) = applied_swaps.last() {
                if spread_history.len() < applied_swaps.len() {
                    spread_history.push(last.improvement.after);
                }
            }
        }

        let final_spread = compute_spreads(&compute_team_stats(cohort));
        tracing::info!(
            %state,
            swaps = applied_swaps.len(),
            choice_3 = final_spread.choice_3,
            gender_a = final_spread.gender_a,
            gender_b = final_spread.gender_b,
            proficiency = final_spread.proficiency,
            "balancing finished"
        );

        Ok(BalanceOutcome {
            iterations: applied_swaps.len(),
            applied_swaps,
            initial_spread,
            final_spread,
            state,
            spread_history,
        })
    }

    /// Runs one round and returns the state to continue in.
    fn step(
        cohort: &mut Cohort,
        config: &BalanceConfig,
        ranker: &SwapRanker,
        log: &mut Vec<SwapCandidate>,
    ) -> Result<LoopState, BalanceError> {
        let stats = compute_team_stats(cohort);
        let spread = compute_spreads(&stats);
        if spread.within(config) {
            return Ok(LoopState::Converged);
        }

        let Some((team_high, team_low)) = stats.extremes(Metric::Choice3) else {
            return Ok(LoopState::Converged);
        };
        let count = |team: &str| stats.get(team).map_or(0, |s| s.choice_3);
        let gap = count(team_high) - count(team_low);
        if gap <= config.target_choice3_spread {
            return Ok(LoopState::Plateaued);
        }

        let mut candidates = generate_candidates(cohort, team_high, team_low);
        let Some(best) = ranker.select_best(&candidates) else {
            tracing::debug!(team_high, team_low, "no improving swap");
            return Ok(LoopState::Stalled);
        };
        let chosen = candidates.swap_remove(best);

        apply_swap(cohort, &chosen)?;
        tracing::debug!(
            round = log.len() + 1,
            pool = candidates.len() + 1,
            swap = %chosen,
            delta_choice3 = chosen.improvement.delta_choice3,
            "applied swap"
        );
        log.push(chosen);

        if log.len() >= config.max_iterations {
            Ok(LoopState::Exhausted)
        } else {
            Ok(LoopState::Running)
        }
    }
}
