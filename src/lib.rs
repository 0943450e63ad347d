//! Greedy swap-based balancing of students across teams.
//!
//! Students carry a preference rank for their assigned project, a gender,
//! a language-proficiency flag, an optional friend list and a lock flag.
//! Starting from an existing assignment, the balancer repeatedly exchanges
//! students between the team with the most top-choice (choice-3) students
//! and the team with the fewest, until the spreads of four counts across
//! teams meet their targets:
//!
//! - choice-3 students (primary objective)
//! - gender A and gender B, each tracked independently
//! - proficient students
//!
//! Modules:
//!
//! - **model**: students, the registry, the team roster and the [`model::Cohort`]
//!   that ties them together.
//! - **stats**: per-team counts and spreads, recomputed from the roster.
//! - **swap**: pair detection, the eight-tier candidate generator, the
//!   improvement evaluator and swap application.
//! - **ranking**: sequential rule composition that picks the best
//!   candidate.
//! - **balance**: configuration and the optimization loop.
//! - **report**: plain export records for spreads, the swap log and team
//!   listings.
//!
//! Two teammates are paired when either lists the other as a friend; a
//! pair moves as a unit and is never split. Locked students never move. The search is bounded greedy
//! local search and stops at the first local optimum it reaches.

pub mod balance;
pub mod error;
pub mod model;
pub mod ranking;
pub mod report;
pub mod stats;
pub mod swap;

pub use error::BalanceError;
