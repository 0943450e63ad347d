//! Hypothetical evaluation of a swap.

use super::types::Improvement;
use crate::model::Cohort;
use crate::stats::{compute_spreads, compute_team_stats, Spread, StatsTable};

/// Scores swaps against a snapshot of the current statistics.
///
/// The snapshot is taken once; every [`evaluate`](Evaluator::evaluate)
/// call works on a private copy of it, so the cohort is never touched.
pub struct Evaluator<'a> {
    cohort: &'a Cohort,
    before: StatsTable,
    spread_before: Spread,
}

impl<'a> Evaluator<'a> {
    pub fn new(cohort: &'a Cohort) -> Self {
        let before = compute_team_stats(cohort);
        let spread_before = compute_spreads(&before);
        Self {
            cohort,
            before,
            spread_before,
        }
    }

    pub fn spread_before(&self) -> Spread {
        self.spread_before
    }

    /// Spread deltas if `names_out` left `team_high` for `team_low` and
    /// `names_in` went the other way. Unregistered names contribute
    /// nothing.
    pub fn evaluate(
        &self,
        team_high: &str,
        names_out: &[String],
        team_low: &str,
        names_in: &[String],
    ) -> Improvement {
        let mut after = self.before.clone();
        for student in names_out.iter().filter_map(|n| self.cohort.student(n)) {
            after.transfer(student, team_high, team_low);
        }
        for student in names_in.iter().filter_map(|n| self.cohort.student(n)) {
            after.transfer(student, team_low, team_high);
        }
        Improvement::between(self.spread_before, compute_spreads(&after))
    }
}

/// One-off evaluation; takes a fresh statistics snapshot.
pub fn evaluate_swap(
    cohort: &Cohort,
    team_high: &str,
    names_out: &[String],
    team_low: &str,
    names_in: &[String],
) -> Improvement {
    Evaluator::new(cohort).evaluate(team_high, names_out, team_low, names_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, Gender, Proficiency, Student, StudentRegistry, TeamRoster};

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn cohort() -> Cohort {
        use Choice::*;
        use Gender::*;
        use Proficiency::*;
        let registry = StudentRegistry::from_students([
            Student::new("h1", Three, A, Proficient),
            Student::new("h2", Three, A, Proficient),
            Student::new("h3", Three, B, NotProficient),
            Student::new("l1", One, A, Proficient),
            Student::new("l2", Two, B, Proficient),
            Student::new("l3", One, B, Proficient),
            Student::new("m1", Three, A, Proficient),
            Student::new("m2", One, B, NotProficient),
        ])
        .unwrap();
        let mut roster = TeamRoster::new();
        roster.add_team("H", ["h1", "h2", "h3"]).unwrap();
        roster.add_team("L", ["l1", "l2", "l3"]).unwrap();
        roster.add_team("M", ["m1", "m2"]).unwrap();
        Cohort::new(registry, roster)
    }

    #[test]
    fn test_solo_swap_reduces_choice3_spread() {
        let c = cohort();
        let imp = evaluate_swap(&c, "H", &names(&["h1"]), "L", &names(&["l1"]));
        // choice-3: H=3, L=0, M=1 -> H=2, L=1, M=1
        assert_eq!(imp.before.choice_3, 3);
        assert_eq!(imp.after.choice_3, 1);
        assert_eq!(imp.delta_choice3, 2);
        // Same gender and proficiency: secondary spreads unchanged
        assert_eq!(imp.delta_gender_a, 0);
        assert_eq!(imp.delta_gender_b, 0);
        assert_eq!(imp.delta_proficiency, 0);
        assert!(imp.improves());
    }

    #[test]
    fn test_secondary_deltas_tracked() {
        let c = cohort();
        // h3 (B, not proficient) for l1 (A, proficient)
        let imp = evaluate_swap(&c, "H", &names(&["h3"]), "L", &names(&["l1"]));
        // gender A: H 2->3, L 1->0, M 1 => spread 1 -> 3
        assert_eq!(imp.delta_gender_a, -2);
        // proficient: H 2->3, L 3->2, M 1 => spread 2 -> 2
        assert_eq!(imp.delta_proficiency, 0);
        assert_eq!(imp.delta_choice3, 2);
        assert!(imp.improves());
    }

    #[test]
    fn test_evaluation_does_not_mutate() {
        let c = cohort();
        let before = compute_team_stats(&c);
        let evaluator = Evaluator::new(&c);
        let _ = evaluator.evaluate("H", &names(&["h1", "h2"]), "L", &names(&["l1", "l2"]));
        assert_eq!(compute_team_stats(&c), before);
        assert_eq!(c.roster().members("H").unwrap(), names(&["h1", "h2", "h3"]).as_slice());
    }

    #[test]
    fn test_unregistered_names_ignored() {
        let c = cohort();
        let imp = evaluate_swap(&c, "H", &names(&["ghost"]), "L", &names(&["phantom"]));
        assert_eq!(imp.before, imp.after);
        assert!(!imp.improves());
    }
}
