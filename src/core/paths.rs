//! Mapping from (conference, team) identifiers to storage locations.

use crate::{
    core::config::{LedgerConfig, RosterConfig, RosterPolicy},
    error::{LedgerError, Result},
    Conference, TeamSlug,
};
use serde::Serialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// File name of every team's player table.
pub const TABLE_FILE_NAME: &str = "players.csv";

/// Handle addressing one team's storage, produced by [`PathResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamLocation {
    conference: Conference,
    team: TeamSlug,
    #[serde(skip)]
    dir: PathBuf,
}

impl TeamLocation {
    pub fn conference(&self) -> Conference {
        self.conference
    }

    pub fn team(&self) -> &TeamSlug {
        &self.team
    }

    /// The team's directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The team's `players.csv`.
    pub fn table_path(&self) -> PathBuf {
        self.dir.join(TABLE_FILE_NAME)
    }

    /// Whether the team's table file currently exists.
    pub fn has_table(&self) -> bool {
        self.table_path().is_file()
    }
}

impl fmt::Display for TeamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.conference.dir_name(), self.team)
    }
}

/// Resolves team identifiers against a storage root and roster policy.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    policy: RosterPolicy,
    roster: RosterConfig,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>, policy: RosterPolicy, roster: RosterConfig) -> Self {
        Self {
            root: root.into(),
            policy,
            roster,
        }
    }

    pub fn from_config(root: impl Into<PathBuf>, config: &LedgerConfig) -> Self {
        Self::new(root, config.roster_policy, config.roster.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> RosterPolicy {
        self.policy
    }

    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    pub fn conference_dir(&self, conference: Conference) -> PathBuf {
        self.root.join(conference.dir_name())
    }

    /// Resolve a team to its location.
    ///
    /// Under [`RosterPolicy::Configured`] the team must be on the conference's
    /// roster; under [`RosterPolicy::Discovered`] its table must exist.
    pub fn resolve(&self, conference: Conference, team: &TeamSlug) -> Result<TeamLocation> {
        let location = self.locate(conference, team);
        match self.policy {
            RosterPolicy::Configured if !self.roster.contains(conference, team) => {
                Err(LedgerError::InvalidTeam {
                    team: team.to_string(),
                    reason: format!("not on the {} roster", conference),
                })
            }
            RosterPolicy::Discovered if !location.has_table() => Err(LedgerError::InvalidTeam {
                team: team.to_string(),
                reason: format!(
                    "no {} under {}/",
                    TABLE_FILE_NAME,
                    conference.dir_name()
                ),
            }),
            _ => Ok(location),
        }
    }

    /// Parse raw identifiers, then [`resolve`](Self::resolve) them.
    pub fn resolve_str(&self, conference: &str, team: &str) -> Result<TeamLocation> {
        let conference: Conference = conference.parse()?;
        let team = TeamSlug::parse(team)?;
        self.resolve(conference, &team)
    }

    /// Build a location without any roster check.
    pub(crate) fn locate(&self, conference: Conference, team: &TeamSlug) -> TeamLocation {
        TeamLocation {
            conference,
            team: team.clone(),
            dir: self.conference_dir(conference).join(team.as_str()),
        }
    }

    /// Whether a team found on disk counts as part of the league.
    pub(crate) fn admits(&self, conference: Conference, team: &TeamSlug) -> bool {
        match self.policy {
            RosterPolicy::Configured => self.roster.contains(conference, team),
            RosterPolicy::Discovered => true,
        }
    }
}
