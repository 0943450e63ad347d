//! Swap candidates, tiers and improvement records.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Choice, Student};
use crate::stats::Spread;

/// How many students move in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapShape {
    /// One solo student each way.
    Solo,
    /// One detected pair each way.
    Pair,
}

impl SwapShape {
    fn label(self) -> &'static str {
        match self {
            SwapShape::Solo => "Solo",
            SwapShape::Pair => "Pair",
        }
    }
}

/// Attribute agreement required between the outgoing and incoming unit.
///
/// A pair matches on an attribute only when both of its members share
/// it, so a mixed pair never satisfies a gender or proficiency rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchRule {
    GenderAndProficiency,
    Gender,
    Proficiency,
    Unconstrained,
}

impl MatchRule {
    pub fn accepts(self, outgoing: &[&Student], incoming: &[&Student]) -> bool {
        let genders = || uniform_match(outgoing, incoming, |s| s.gender);
        let proficiency = || uniform_match(outgoing, incoming, |s| s.proficiency);
        match self {
            MatchRule::GenderAndProficiency => genders() && proficiency(),
            MatchRule::Gender => genders(),
            MatchRule::Proficiency => proficiency(),
            MatchRule::Unconstrained => true,
        }
    }
}

/// Both units hold a single value for `key`, and it is the same one.
fn uniform_match<T, F>(a: &[&Student], b: &[&Student], key: F) -> bool
where
    T: Ord,
    F: Fn(&Student) -> T,
{
    let left: BTreeSet<T> = a.iter().map(|&s| key(s)).collect();
    let right: BTreeSet<T> = b.iter().map(|&s| key(s)).collect();
    left.len() == 1 && left == right
}

/// Candidate-generation tier. Lower tiers are more constrained and win
/// ties between otherwise equal candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    SoloGenderAndProficiency,
    PairGenderAndProficiency,
    SoloGender,
    PairGender,
    SoloProficiency,
    PairProficiency,
    SoloUnconstrained,
    PairUnconstrained,
}

impl Tier {
    /// All tiers in priority order.
    pub const ALL: [Tier; 8] = [
        Tier::SoloGenderAndProficiency,
        Tier::PairGenderAndProficiency,
        Tier::SoloGender,
        Tier::PairGender,
        Tier::SoloProficiency,
        Tier::PairProficiency,
        Tier::SoloUnconstrained,
        Tier::PairUnconstrained,
    ];

    /// Tier number, 1 (most constrained) to 8.
    pub fn number(self) -> u8 {
        match self {
            Tier::SoloGenderAndProficiency => 1,
            Tier::PairGenderAndProficiency => 2,
            Tier::SoloGender => 3,
            Tier::PairGender => 4,
            Tier::SoloProficiency => 5,
            Tier::PairProficiency => 6,
            Tier::SoloUnconstrained => 7,
            Tier::PairUnconstrained => 8,
        }
    }

    pub fn shape(self) -> SwapShape {
        if self.number() % 2 == 1 {
            SwapShape::Solo
        } else {
            SwapShape::Pair
        }
    }

    pub fn rule(self) -> MatchRule {
        match self {
            Tier::SoloGenderAndProficiency | Tier::PairGenderAndProficiency => {
                MatchRule::GenderAndProficiency
            }
            Tier::SoloGender | Tier::PairGender => MatchRule::Gender,
            Tier::SoloProficiency | Tier::PairProficiency => MatchRule::Proficiency,
            Tier::SoloUnconstrained | Tier::PairUnconstrained => MatchRule::Unconstrained,
        }
    }
}

/// Spread changes a swap would cause. Each delta is
/// `spread_before - spread_after`, so positive means better balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    pub delta_choice3: i64,
    pub delta_gender_a: i64,
    pub delta_gender_b: i64,
    pub delta_proficiency: i64,
    pub before: Spread,
    pub after: Spread,
}

impl Improvement {
    pub fn between(before: Spread, after: Spread) -> Self {
        let delta = |b: usize, a: usize| b as i64 - a as i64;
        Self {
            delta_choice3: delta(before.choice_3, after.choice_3),
            delta_gender_a: delta(before.gender_a, after.gender_a),
            delta_gender_b: delta(before.gender_b, after.gender_b),
            delta_proficiency: delta(before.proficiency, after.proficiency),
            before,
            after,
        }
    }

    /// Combined reduction of both gender spreads.
    pub fn delta_gender(&self) -> i64 {
        self.delta_gender_a + self.delta_gender_b
    }

    /// Choice-3 balance must improve, or stay level while some secondary
    /// spread improves.
    pub fn improves(&self) -> bool {
        self.delta_choice3 > 0
            || (self.delta_choice3 == 0
                && (self.delta_gender_a > 0
                    || self.delta_gender_b > 0
                    || self.delta_proficiency > 0))
    }
}

/// A feasible exchange between the high and the low choice-3 team.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapCandidate {
    /// Team giving away choice-3 students.
    pub from_team: String,
    /// Team receiving them.
    pub to_team: String,
    pub students_out: Vec<String>,
    pub students_in: Vec<String>,
    /// Choice levels of `students_out`, same order.
    pub choices_out: Vec<Choice>,
    /// Choice levels of `students_in`, same order.
    pub choices_in: Vec<Choice>,
    pub tier: Tier,
    pub improvement: Improvement,
}

impl SwapCandidate {
    /// Human-readable type, e.g. `Solo(3)↔Solo(1)-P1` or
    /// `Pair(3,1)↔Pair(2,2)-P2`.
    pub fn label(&self) -> String {
        let shape = self.tier.shape().label();
        format!(
            "{shape}({})↔{shape}({})-P{}",
            join_levels(&self.choices_out),
            join_levels(&self.choices_in),
            self.tier.number()
        )
    }

    /// Total students moved (both directions).
    pub fn moved(&self) -> usize {
        self.students_out.len() + self.students_in.len()
    }
}

impl fmt::Display for SwapCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] -> {}, {} [{}] -> {}",
            self.label(),
            self.from_team,
            self.students_out.join(", "),
            self.to_team,
            self.to_team,
            self.students_in.join(", "),
            self.from_team
        )
    }
}

fn join_levels(choices: &[Choice]) -> String {
    choices
        .iter()
        .map(|c| c.level().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
