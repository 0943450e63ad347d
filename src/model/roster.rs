//! Team roster: the mutable assignment of students to teams.

use crate::error::BalanceError;

/// A team and its members, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id: String,
    pub members: Vec<String>,
}

impl Team {
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered mapping from team id to member names.
///
/// Teams keep their insertion order; that order decides ties whenever
/// the optimizer picks an extreme team. A name is placed in at most one
/// team.
///
/// # Examples
///
/// ```
/// use team_balancer::model::TeamRoster;
///
/// let mut roster = TeamRoster::new();
/// roster.add_team("T1", ["a", "b"]).unwrap();
/// roster.add_team("T2", ["c"]).unwrap();
/// assert!(roster.add_team("T3", ["a"]).is_err());
/// assert_eq!(roster.total_students(), 3);
/// assert_eq!(roster.team_of("c"), Some("T2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    teams: Vec<Team>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a team. Fails on a duplicate team id or on a name that is
    /// already placed (in this or another team).
    pub fn add_team<I, S>(&mut self, id: impl Into<String>, members: I) -> Result<(), BalanceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(BalanceError::DuplicateTeam(id));
        }

        let mut placed: Vec<String> = Vec::new();
        for name in members {
            let name = name.into();
            if let Some(team) = self.team_of(&name) {
                return Err(BalanceError::AlreadyAssigned {
                    name,
                    team: team.to_string(),
                });
            }
            if placed.contains(&name) {
                return Err(BalanceError::AlreadyAssigned { name, team: id });
            }
            placed.push(name);
        }

        self.teams.push(Team {
            id,
            members: placed,
        });
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Members of a team, or `None` for an unknown team.
    pub fn members(&self, id: &str) -> Option<&[String]> {
        self.get(id).map(|t| t.members.as_slice())
    }

    /// Teams in insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_ids(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Number of placed names across all teams.
    pub fn total_students(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Team currently holding `name`.
    pub fn team_of(&self, name: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.contains(name))
            .map(|t| t.id.as_str())
    }

    /// Exchanges `outgoing` (leaving `from`) with `incoming` (leaving
    /// `to`).
    ///
    /// Steps, in order: remove `outgoing` from `from`, remove `incoming`
    /// from `to`, append `outgoing` to `to`, append `incoming` to `from`.
    /// Names not found in their source team are not appended anywhere,
    /// so the total number of placed names never changes.
    pub fn transfer(
        &mut self,
        from: &str,
        outgoing: &[String],
        to: &str,
        incoming: &[String],
    ) -> Result<(), BalanceError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        let moved_out = remove_members(&mut self.teams[from_idx].members, outgoing);
        let moved_in = remove_members(&mut self.teams[to_idx].members, incoming);
        self.teams[to_idx].members.extend(moved_out);
        self.teams[from_idx].members.extend(moved_in);
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<usize, BalanceError> {
        self.teams
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BalanceError::UnknownTeam(id.to_string()))
    }
}

/// Removes each of `names` from `members`, returning the ones that were
/// actually present.
fn remove_members(members: &mut Vec<String>, names: &[String]) -> Vec<String> {
    let mut removed = Vec::with_capacity(names.len());
    for name in names {
        if let Some(pos) = members.iter().position(|m| m == name) {
            removed.push(members.remove(pos));
        }
    }
    removed
}
