//! Spreads of the tracked metrics.

use std::fmt;

use crate::balance::BalanceConfig;

/// A metric whose spread across teams is balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Number of choice-3 students.
    Choice3,
    /// Number of gender-A students.
    GenderA,
    /// Number of gender-B students.
    GenderB,
    /// Number of proficient students.
    Proficiency,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Choice3,
        Metric::GenderA,
        Metric::GenderB,
        Metric::Proficiency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Choice3 => "choice_3",
            Metric::GenderA => "gender_a",
            Metric::GenderB => "gender_b",
            Metric::Proficiency => "proficiency",
        }
    }

    /// Configured target for this metric.
    pub fn target(self, config: &BalanceConfig) -> usize {
        match self {
            Metric::Choice3 => config.target_choice3_spread,
            Metric::GenderA | Metric::GenderB => config.target_gender_spread,
            Metric::Proficiency => config.target_proficiency_spread,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `max - min` across teams for each tracked metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spread {
    pub choice_3: usize,
    pub gender_a: usize,
    pub gender_b: usize,
    pub proficiency: usize,
}

impl Spread {
    pub fn get(&self, metric: Metric) -> usize {
        match metric {
            Metric::Choice3 => self.choice_3,
            Metric::GenderA => self.gender_a,
            Metric::GenderB => self.gender_b,
            Metric::Proficiency => self.proficiency,
        }
    }

    /// Whether every spread is at or below its target.
    pub fn within(&self, config: &BalanceConfig) -> bool {
        Metric::ALL
            .iter()
            .all(|&m| self.get(m) <= m.target(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_defaults() {
        let config = BalanceConfig::default();
        let ok = Spread {
            choice_3: 3,
            gender_a: 4,
            gender_b: 4,
            proficiency: 4,
        };
        assert!(ok.within(&config));
        assert!(!Spread { choice_3: 4, ..ok }.within(&config));
        assert!(!Spread { gender_b: 5, ..ok }.within(&config));
        assert!(!Spread { proficiency: 5, ..ok }.within(&config));
        assert!(Spread::default().within(&config));
    }

    #[test]
    fn test_metric_targets() {
        let config = BalanceConfig::default()
            .with_target_choice3_spread(1)
            .with_target_gender_spread(2)
            .with_target_proficiency_spread(5);
        assert_eq!(Metric::Choice3.target(&config), 1);
        assert_eq!(Metric::GenderA.target(&config), 2);
        assert_eq!(Metric::GenderB.target(&config), 2);
        assert_eq!(Metric::Proficiency.target(&config), 5);
    }
}
