//! Greedy local-search balancing loop.
//!
//! Each round looks at the two teams with the most and the fewest
//! choice-3 students, applies the best improving swap between them and
//! starts over, until the spreads meet their targets or no further
//! progress is possible. This is bounded greedy search: the loop accepts
//! whatever local optimum it reaches.

mod config;
mod runner;
mod types;

pub use config::BalanceConfig;
pub use runner::{BalanceOutcome, BalanceRunner};
pub use types::LoopState;
