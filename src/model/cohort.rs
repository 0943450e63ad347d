//! The optimization context: registry plus roster.

use super::registry::StudentRegistry;
use super::roster::TeamRoster;
use super::types::Student;

/// A name referenced somewhere that has no registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// A roster entry with no student record.
    Member { team: String, name: String },
    /// A friend-list entry with no student record.
    Friend { student: String, friend: String },
}

/// Everything one optimization run works on.
///
/// The registry is fixed once loaded; the roster is rewritten in place
/// by applied swaps. Each run owns its own cohort, so independent runs
/// never share state.
#[derive(Debug, Clone, Default)]
pub struct Cohort {
    registry: StudentRegistry,
    roster: TeamRoster,
}

impl Cohort {
    pub fn new(registry: StudentRegistry, roster: TeamRoster) -> Self {
        let cohort = Self { registry, roster };
        let dangling = cohort.dangling_references().len();
        if dangling > 0 {
            tracing::debug!(dangling, "cohort has references without student records");
        }
        cohort
    }

    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    pub(crate) fn roster_mut(&mut self) -> &mut TeamRoster {
        &mut self.roster
    }

    /// Looks up a student record.
    pub fn student(&self, name: &str) -> Option<&Student> {
        self.registry.get(name)
    }

    /// Registered members of a team, in roster order. Unregistered names
    /// are skipped.
    pub fn team_students<'a>(&'a self, team: &str) -> impl Iterator<Item = &'a Student> + 'a {
        self.roster
            .members(team)
            .unwrap_or(&[])
            .iter()
            .filter_map(move |name| self.registry.get(name))
    }

    /// Names referenced by the roster or by friend lists that have no
    /// registry entry. They are tolerated and ignored by every
    /// computation.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        for team in self.roster.teams() {
            for name in &team.members {
                if !self.registry.contains(name) {
                    dangling.push(DanglingReference::Member {
                        team: team.id.clone(),
                        name: name.clone(),
                    });
                }
            }
        }

        let mut students: Vec<&Student> = self.registry.iter().collect();
        students.sort_by(|a, b| a.name.cmp(&b.name));
        for student in students {
            for friend in &student.friends {
                if !self.registry.contains(friend) {
                    dangling.push(DanglingReference::Friend {
                        student: student.name.clone(),
                        friend: friend.clone(),
                    });
                }
            }
        }
        dangling
    }

    /// Consumes the cohort, returning its parts.
    pub fn into_parts(self) -> (StudentRegistry, TeamRoster) {
        (self.registry, self.roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, Gender, Proficiency};

    #[test]
    fn test_dangling_references_reported() {
        let registry = StudentRegistry::from_students([
            Student::new("a", Choice::One, Gender::A, Proficiency::Proficient).with_friend("ghost"),
            Student::new("b", Choice::Two, Gender::B, Proficiency::Proficient),
        ])
        .unwrap();
        let mut roster = TeamRoster::new();
        roster.add_team("T1", ["a", "missing"]).unwrap();
        roster.add_team("T2", ["b"]).unwrap();

        let cohort = Cohort::new(registry, roster);
        let dangling = cohort.dangling_references();

        assert_eq!(
            dangling,
            vec![
                DanglingReference::Member {
                    team: "T1".into(),
                    name: "missing".into()
                },
                DanglingReference::Friend {
                    student: "a".into(),
                    friend: "ghost".into()
                },
            ]
        );
        let names: Vec<&str> = cohort.team_students("T1").map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
        assert_eq!(cohort.team_students("nope").count(), 0);
    }
}
