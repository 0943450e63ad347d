//! Tiered candidate generation.
//!
//! # Tiers
//!
//! | Tier | Shape | Match required |
//! |------|-------|----------------|
//! | 1 | Solo ↔ Solo | gender and proficiency |
//! | 2 | Pair ↔ Pair | uniform gender and proficiency |
//! | 3 | Solo ↔ Solo | gender |
//! | 4 | Pair ↔ Pair | uniform gender |
//! | 5 | Solo ↔ Solo | proficiency |
//! | 6 | Pair ↔ Pair | uniform proficiency |
//! | 7 | Solo ↔ Solo | none |
//! | 8 | Pair ↔ Pair | none |
//!
//! All tiers go into one flat pool. A swap that satisfies a strict tier
//! also shows up again in every looser tier of the same shape; the
//! selector's tier tie-break then prefers the strictest copy.

use super::evaluator::Evaluator;
use super::pairing::partition_team;
use super::types::{SwapCandidate, SwapShape, Tier};
use crate::model::{Cohort, Student};

/// The movable units of one side of a swap.
struct Units<'a> {
    solos: Vec<[&'a Student; 1]>,
    pairs: Vec<[&'a Student; 2]>,
}

impl<'a> Units<'a> {
    /// Solos are kept when `keep_solo` accepts them; every resolvable
    /// pair is kept.
    fn collect<F>(cohort: &'a Cohort, team: &str, keep_solo: F) -> Self
    where
        F: Fn(&Student) -> bool,
    {
        let partition = partition_team(cohort, team);
        let solos = partition
            .solos
            .iter()
            .filter_map(|name| cohort.student(name))
            .filter(|s| keep_solo(*s))
            .map(|s| [s])
            .collect();
        let pairs = partition
            .pairs
            .iter()
            .filter_map(|p| Some([cohort.student(&p.first)?, cohort.student(&p.second)?]))
            .collect();
        Self { solos, pairs }
    }
}

fn top_choice_count(unit: &[&Student]) -> usize {
    unit.iter().filter(|s| s.choice.is_top()).count()
}

/// Enumerates every improving swap between `team_high` (most choice-3
/// students) and `team_low` (fewest), across all eight tiers.
///
/// Solo swaps send a choice-3 solo out of `team_high` for a non-choice-3
/// solo of `team_low`. Pair swaps require the outgoing pair to hold
/// strictly more choice-3 students than the incoming one. Only
/// candidates whose [`Improvement::improves`](super::Improvement::improves)
/// holds are returned, in tier order. The cohort is not modified.
pub fn generate_candidates(cohort: &Cohort, team_high: &str, team_low: &str) -> Vec<SwapCandidate> {
    let evaluator = Evaluator::new(cohort);
    let high = Units::collect(cohort, team_high, |s| s.choice.is_top());
    let low = Units::collect(cohort, team_low, |s| !s.choice.is_top());

    let mut candidates = Vec::new();
    let mut considered = 0usize;

    for tier in Tier::ALL {
        let rule = tier.rule();
        let (outgoing, incoming): (Vec<&[&Student]>, Vec<&[&Student]>) = match tier.shape() {
            SwapShape::Solo => (
                high.solos.iter().map(|u| u.as_slice()).collect(),
                low.solos.iter().map(|u| u.as_slice()).collect(),
            ),
            SwapShape::Pair => (
                high.pairs.iter().map(|u| u.as_slice()).collect(),
                low.pairs.iter().map(|u| u.as_slice()).collect(),
            ),
        };

        for out in &outgoing {
            for inc in &incoming {
                if tier.shape() == SwapShape::Pair && top_choice_count(out) <= top_choice_count(inc) {
                    continue;
                }
                if !rule.accepts(out, inc) {
                    continue;
                }
                considered += 1;

                let students_out: Vec<String> = out.iter().map(|s| s.name.clone()).collect();
                let students_in: Vec<String> = inc.iter().map(|s| s.name.clone()).collect();
                let improvement = evaluator.evaluate(team_high, &students_out, team_low, &students_in);
                if !improvement.improves() {
                    continue;
                }

                candidates.push(SwapCandidate {
                    from_team: team_high.to_string(),
                    to_team: team_low.to_string(),
                    choices_out: out.iter().map(|s| s.choice).collect(),
                    choices_in: inc.iter().map(|s| s.choice).collect(),
                    students_out,
                    students_in,
                    tier,
                    improvement,
                });
            }
        }
    }

    tracing::trace!(
        team_high,
        team_low,
        considered,
        improving = candidates.len(),
        "generated swap candidates"
    );
    candidates
}
