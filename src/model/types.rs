//! Student records and their categorical attributes.

use std::fmt;

use crate::error::BalanceError;

/// Preference level of a student. `Three` is the scarce, high-demand
/// level whose distribution across teams is balanced first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    One,
    Two,
    Three,
}

impl Choice {
    /// Numeric level (1, 2 or 3).
    pub fn level(self) -> u8 {
        match self {
            Choice::One => 1,
            Choice::Two => 2,
            Choice::Three => 3,
        }
    }

    pub fn is_top(self) -> bool {
        self == Choice::Three
    }
}

impl TryFrom<u8> for Choice {
    type Error = BalanceError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Choice::One),
            2 => Ok(Choice::Two),
            3 => Ok(Choice::Three),
            other => Err(BalanceError::InvalidChoice(other)),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Two-valued gender category. Each category's spread is balanced
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    A,
    B,
}

/// Language proficiency. The spread of `Proficient` counts is balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Proficiency {
    Proficient,
    NotProficient,
}

/// An immutable student record. Team membership lives in the
/// [`TeamRoster`](super::TeamRoster), not here.
///
/// # Examples
///
/// ```
/// use team_balancer::model::{Choice, Gender, Proficiency, Student};
///
/// let s = Student::new("ada", Choice::Three, Gender::B, Proficiency::Proficient)
///     .with_friend("grace")
///     .locked();
/// assert!(s.locked);
/// assert!(s.lists_friend("grace"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    /// Unique name, the registry key.
    pub name: String,
    pub choice: Choice,
    pub gender: Gender,
    pub proficiency: Proficiency,
    /// Declared affinities, in declaration order. Not necessarily
    /// reciprocated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub friends: Vec<String>,
    /// A locked student is never moved.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: bool,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        choice: Choice,
        gender: Gender,
        proficiency: Proficiency,
    ) -> Self {
        Self {
            name: name.into(),
            choice,
            gender,
            proficiency,
            friends: Vec::new(),
            locked: false,
        }
    }

    pub fn with_friend(mut self, friend: impl Into<String>) -> Self {
        self.friends.push(friend.into());
        self
    }

    pub fn with_friends<I, S>(mut self, friends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.friends.extend(friends.into_iter().map(Into::into));
        self
    }

    /// Marks the student as locked in place.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Whether this student names `other` as a friend.
    pub fn lists_friend(&self, other: &str) -> bool {
        self.friends.iter().any(|f| f == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_from_level() {
        assert_eq!(Choice::try_from(1), Ok(Choice::One));
        assert_eq!(Choice::try_from(3), Ok(Choice::Three));
        assert_eq!(Choice::try_from(0), Err(BalanceError::InvalidChoice(0)));
        assert_eq!(Choice::try_from(4), Err(BalanceError::InvalidChoice(4)));
    }

    #[test]
    fn test_choice_is_top() {
        assert!(Choice::Three.is_top());
        assert!(!Choice::Two.is_top());
        assert_eq!(Choice::Two.to_string(), "2");
    }

    #[test]
    fn test_student_builder() {
        let s = Student::new("x", Choice::One, Gender::A, Proficiency::NotProficient)
            .with_friends(["y", "z"]);
        assert_eq!(s.friends, vec!["y".to_string(), "z".to_string()]);
        assert!(!s.locked);
        assert!(s.lists_friend("z"));
        assert!(!s.lists_friend("x"));
    }
}
