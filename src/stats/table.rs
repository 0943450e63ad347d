//! Per-team counts.

use super::spread::{Metric, Spread};
use crate::model::{Choice, Cohort, Gender, Proficiency, Student};

/// Aggregate counts for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStats {
    pub gender_a: usize,
    pub gender_b: usize,
    pub proficient: usize,
    pub not_proficient: usize,
    pub choice_1: usize,
    pub choice_2: usize,
    pub choice_3: usize,
}

impl TeamStats {
    /// Value of a tracked metric for this team.
    pub fn count(&self, metric: Metric) -> usize {
        match metric {
            Metric::Choice3 => self.choice_3,
            Metric::GenderA => self.gender_a,
            Metric::GenderB => self.gender_b,
            Metric::Proficiency => self.proficient,
        }
    }

    /// Total students counted.
    pub fn size(&self) -> usize {
        self.gender_a + self.gender_b
    }

    fn add(&mut self, student: &Student) {
        for slot in self.slots(student) {
            *slot += 1;
        }
    }

    fn remove(&mut self, student: &Student) {
        for slot in self.slots(student) {
            *slot = slot.saturating_sub(1);
        }
    }

    fn slots(&mut self, student: &Student) -> [&mut usize; 3] {
        let Self {
            gender_a,
            gender_b,
            proficient,
            not_proficient,
            choice_1,
            choice_2,
            choice_3,
        } = self;
        let gender = match student.gender {
            Gender::A => gender_a,
            Gender::B => gender_b,
        };
        let proficiency = match student.proficiency {
            Proficiency::Proficient => proficient,
            Proficiency::NotProficient => not_proficient,
        };
        let choice = match student.choice {
            Choice::One => choice_1,
            Choice::Two => choice_2,
            Choice::Three => choice_3,
        };
        [gender, proficiency, choice]
    }
}

/// Statistics for every team, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    rows: Vec<(String, TeamStats)>,
}

impl StatsTable {
    /// Counts every registered member of every team. Unregistered names
    /// are skipped.
    pub fn from_cohort(cohort: &Cohort) -> Self {
        let rows = cohort
            .roster()
            .teams()
            .iter()
            .map(|team| {
                let mut stats = TeamStats::default();
                for student in cohort.team_students(&team.id) {
                    stats.add(student);
                }
                (team.id.clone(), stats)
            })
            .collect();
        Self { rows }
    }

    pub fn get(&self, team: &str) -> Option<&TeamStats> {
        self.rows.iter().find(|(id, _)| id == team).map(|(_, s)| s)
    }

    fn get_mut(&mut self, team: &str) -> Option<&mut TeamStats> {
        self.rows
            .iter_mut()
            .find(|(id, _)| id == team)
            .map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamStats)> {
        self.rows.iter().map(|(id, s)| (id.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `max - min` of a metric across teams; zero for an empty table.
    pub fn spread_of(&self, metric: Metric) -> usize {
        let values = self.rows.iter().map(|(_, s)| s.count(metric));
        match (values.clone().max(), values.min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    /// Spreads of all tracked metrics.
    pub fn spread(&self) -> Spread {
        Spread {
            choice_3: self.spread_of(Metric::Choice3),
            gender_a: self.spread_of(Metric::GenderA),
            gender_b: self.spread_of(Metric::GenderB),
            proficiency: self.spread_of(Metric::Proficiency),
        }
    }

    /// The teams holding the highest and the lowest value of `metric`.
    /// The first team in roster order wins ties on either side.
    pub fn extremes(&self, metric: Metric) -> Option<(&str, &str)> {
        let mut rows = self.rows.iter();
        let (first_id, first) = rows.next()?;
        let (mut high, mut high_val) = (first_id.as_str(), first.count(metric));
        let (mut low, mut low_val) = (high, high_val);
        for (id, stats) in rows {
            let value = stats.count(metric);
            if value > high_val {
                high = id.as_str();
                high_val = value;
            }
            if value < low_val {
                low = id.as_str();
                low_val = value;
            }
        }
        Some((high, low))
    }

    /// Moves one student's contribution from `from` to `to`. Unknown
    /// teams are ignored.
    pub fn transfer(&mut self, student: &Student, from: &str, to: &str) {
        if let Some(stats) = self.get_mut(from) {
            stats.remove(student);
        }
        if let Some(stats) = self.get_mut(to) {
            stats.add(student);
        }
    }
}
