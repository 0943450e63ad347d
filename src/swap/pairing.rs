//! Pair detection within a team.
//!
//! Pairs are found with a single greedy left-to-right scan: each
//! unclaimed student takes the first later unclaimed teammate where
//! either one lists the other as a friend. This is not a maximum
//! matching, and the scan order decides the result.

use crate::model::{Cohort, Student};

/// Two unlocked teammates bound by a declared friendship (in at least
/// one direction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub first: String,
    pub second: String,
}

/// A team's movable students split into pairs and solos.
///
/// Locked and unregistered members appear in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPartition {
    pub pairs: Vec<Pair>,
    pub solos: Vec<String>,
}

/// Whether `a` and `b` may form a pair.
fn bonded(a: &Student, b: &Student) -> bool {
    a.lists_friend(&b.name) || b.lists_friend(&a.name)
}

/// Splits the movable members of `team` into pairs and solos, both in
/// roster order. An unknown team yields an empty partition.
pub fn partition_team(cohort: &Cohort, team: &str) -> TeamPartition {
    let movable: Vec<&Student> = cohort.team_students(team).filter(|s| !s.locked).collect();
    let mut claimed = vec![false; movable.len()];
    let mut pairs = Vec::new();

    for i in 0..movable.len() {
        if claimed[i] {
            continue;
        }
        let partner = (i + 1..movable.len()).find(|&j| !claimed[j] && bonded(movable[i], movable[j]));
        if let Some(j) = partner {
            claimed[i] = true;
            claimed[j] = true;
            pairs.push(Pair {
                first: movable[i].name.clone(),
                second: movable[j].name.clone(),
            });
        }
    }

    let solos = movable
        .iter()
        .zip(&claimed)
        .filter(|&(_, &taken)| !taken)
        .map(|(s, _)| s.name.clone())
        .collect();

    TeamPartition { pairs, solos }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, Gender, Proficiency, StudentRegistry, TeamRoster};

    fn st(name: &str) -> Student {
        Student::new(name, Choice::One, Gender::A, Proficiency::Proficient)
    }

    fn cohort(students: Vec<Student>, members: &[&str]) -> Cohort {
        let registry = StudentRegistry::from_students(students).unwrap();
        let mut roster = TeamRoster::new();
        roster.add_team("T", members.iter().copied()).unwrap();
        Cohort::new(registry, roster)
    }

    fn pair(a: &str, b: &str) -> Pair {
        Pair {
            first: a.into(),
            second: b.into(),
        }
    }

    #[test]
    fn test_one_sided_friendship_forms_pair() {
        let c = cohort(vec![st("x"), st("y").with_friend("x")], &["x", "y"]);
        let p = partition_team(&c, "T");
        assert_eq!(p.pairs, vec![pair("x", "y")]);
        assert!(p.solos.is_empty());
    }

    #[test]
    fn test_first_eligible_partner_wins() {
        // a claims b; c stays solo even though b-c are also bonded.
        let c = cohort(
            vec![
                st("a").with_friends(["b", "c"]),
                st("b").with_friend("c"),
                st("c"),
                st("d"),
            ],
            &["a", "b", "c", "d"],
        );
        let p = partition_team(&c, "T");
        assert_eq!(p.pairs, vec![pair("a", "b")]);
        assert_eq!(p.solos, vec!["c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_greedy_is_not_maximum_matching() {
        // Bonds a-b, a-c, b-d. A maximum matching is {a-c, b-d}; the scan
        // takes a-b and strands c and d.
        let c = cohort(
            vec![
                st("a").with_friends(["b", "c"]),
                st("b").with_friend("d"),
                st("c"),
                st("d"),
            ],
            &["a", "b", "c", "d"],
        );
        let p = partition_team(&c, "T");
        assert_eq!(p.pairs, vec![pair("a", "b")]);
        assert_eq!(p.solos, vec!["c".to_string(), "d".to_string()]);
    }

    #[test]
    fn test_scan_follows_roster_order() {
        let c = cohort(
            vec![st("a"), st("b").with_friends(["c", "a"]), st("c")],
            &["b", "a", "c"],
        );
        let p = partition_team(&c, "T");
        assert_eq!(p.pairs, vec![pair("b", "a")]);
        assert_eq!(p.solos, vec!["c".to_string()]);
    }

    #[test]
    fn test_locked_students_excluded() {
        let c = cohort(
            vec![st("a").with_friend("b"), st("b").locked(), st("c").locked()],
            &["a", "b", "c"],
        );
        let p = partition_team(&c, "T");
        assert!(p.pairs.is_empty());
        assert_eq!(p.solos, vec!["a".to_string()]);
    }

    #[test]
    fn test_friend_in_other_team_leaves_solo() {
        let registry = StudentRegistry::from_students([st("a").with_friend("b"), st("b")]).unwrap();
        let mut roster = TeamRoster::new();
        roster.add_team("T1", ["a"]).unwrap();
        roster.add_team("T2", ["b"]).unwrap();
        let c = Cohort::new(registry, roster);
        assert_eq!(partition_team(&c, "T1").solos, vec!["a".to_string()]);
        assert_eq!(partition_team(&c, "nope"), TeamPartition::default());
    }
}
