//! Loop states.

use std::fmt;

/// State of the balancing loop. Every state except `Running` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopState {
    /// Still applying swaps.
    Running,
    /// All four spreads are within their targets.
    Converged,
    /// The choice-3 gap between the extreme teams is within target, yet
    /// some secondary spread is not.
    Plateaued,
    /// No improving candidate exists between the extreme teams.
    Stalled,
    /// The iteration cap was reached.
    Exhausted,
}

impl LoopState {
    pub fn is_terminal(self) -> bool {
        self != LoopState::Running
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoopState::Running => "running",
            LoopState::Converged => "converged",
            LoopState::Plateaued => "plateaued",
            LoopState::Stalled => "stalled",
            LoopState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}
