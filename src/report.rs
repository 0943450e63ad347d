//! Read-only export records.
//!
//! These are plain data for whatever renders or persists results (a
//! table, a workbook, JSON). Nothing here formats text; with the `serde`
//! feature every record can be serialized directly.

use crate::balance::BalanceConfig;
use crate::model::{Choice, Cohort, Gender, Proficiency};
use crate::stats::{compute_team_stats, Metric, Spread, TeamStats};
use crate::swap::SwapCandidate;

/// One metric's spread compared with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricStatus {
    pub metric: Metric,
    pub value: usize,
    pub target: usize,
    pub within_target: bool,
}

/// Spread summary, one row per tracked metric.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadReport {
    pub rows: Vec<MetricStatus>,
}

impl SpreadReport {
    pub fn new(spread: &Spread, config: &BalanceConfig) -> Self {
        let rows = Metric::ALL
            .iter()
            .map(|&metric| {
                let value = spread.get(metric);
                let target = metric.target(config);
                MetricStatus {
                    metric,
                    value,
                    target,
                    within_target: value <= target,
                }
            })
            .collect();
        Self { rows }
    }

    pub fn all_within(&self) -> bool {
        self.rows.iter().all(|r| r.within_target)
    }
}

/// A row of the applied-swap log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapLogEntry {
    /// 1-based position in the log.
    pub index: usize,
    pub label: String,
    pub from_team: String,
    pub students_out: Vec<String>,
    pub to_team: String,
    pub students_in: Vec<String>,
    pub delta_choice3: i64,
    /// Combined change of both gender spreads.
    pub delta_gender: i64,
    pub delta_proficiency: i64,
    pub tier: u8,
}

impl SwapLogEntry {
    pub fn from_log(swaps: &[SwapCandidate]) -> Vec<Self> {
        swaps
            .iter()
            .enumerate()
            .map(|(i, swap)| Self {
                index: i + 1,
                label: swap.label(),
                from_team: swap.from_team.clone(),
                students_out: swap.students_out.clone(),
                to_team: swap.to_team.clone(),
                students_in: swap.students_in.clone(),
                delta_choice3: swap.improvement.delta_choice3,
                delta_gender: swap.improvement.delta_gender(),
                delta_proficiency: swap.improvement.delta_proficiency,
                tier: swap.tier.number(),
            })
            .collect()
    }
}

/// A registered team member as exported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberRow {
    pub name: String,
    pub gender: Gender,
    pub proficiency: Proficiency,
    pub choice: Choice,
    pub friends: Vec<String>,
    pub locked: bool,
}

/// A team's current members (sorted by name) and counts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamListing {
    pub team: String,
    pub members: Vec<MemberRow>,
    pub stats: TeamStats,
    /// Roster size, unregistered names included. `stats` counts
    /// registered students only.
    pub total: usize,
}

impl TeamListing {
    /// Lists every team in roster order. Unregistered names are left out.
    pub fn from_cohort(cohort: &Cohort) -> Vec<Self> {
        let table = compute_team_stats(cohort);
        cohort
            .roster()
            .teams()
            .iter()
            .map(|team| {
                let mut members: Vec<MemberRow> = cohort
                    .team_students(&team.id)
                    .map(|s| MemberRow {
                        name: s.name.clone(),
                        gender: s.gender,
                        proficiency: s.proficiency,
                        choice: s.choice,
                        friends: s.friends.clone(),
                        locked: s.locked,
                    })
                    .collect();
                members.sort_by(|a, b| a.name.cmp(&b.name));
                Self {
                    team: team.id.clone(),
                    members,
                    stats: table.get(&team.id).copied().unwrap_or_default(),
                    total: team.len(),
                }
            })
            .collect()
    }
}
