//! Error types.
//!
//! Only malformed configuration and corrupt input structures are errors.
//! Ordinary run outcomes (no candidates, plateau, iteration cap) are
//! reported as [`LoopState`](crate::balance::LoopState) values instead.

use thiserror::Error;

/// Errors raised while building a cohort or configuring a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("invalid choice level {0}, expected 1, 2 or 3")]
    InvalidChoice(u8),

    #[error("student {0:?} is already registered")]
    DuplicateStudent(String),

    #[error("team {0:?} is already present in the roster")]
    DuplicateTeam(String),

    #[error("student {name:?} is already assigned to team {team:?}")]
    AlreadyAssigned { name: String, team: String },

    #[error("unknown team {0:?}")]
    UnknownTeam(String),
}
