//! Call surface for collaborators (CLI, menus, scripts).
//!
//! [`League`] owns the path resolver and record store for one storage root
//! and exposes single-team CRUD plus cross-team queries. It never formats
//! anything for display.

use crate::{
    core::{
        config::LedgerConfig,
        paths::{PathResolver, TeamLocation},
    },
    error::{LedgerError, Result},
    storage::{
        HierarchyWalker, PlayerChanges, PlayerListing, PlayerRecord, PlayerStore, StatsAggregator,
        StatsSummary, TeamEntry, WalkWarning,
    },
    Conference, PlayerId, TeamSlug,
};
use serde::Serialize;
use std::path::PathBuf;

/// Teams found by a walk, with the warnings it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamListing {
    pub teams: Vec<TeamEntry>,
    pub warnings: Vec<WalkWarning>,
}

/// A league rooted at one storage directory.
#[derive(Debug, Clone)]
pub struct League {
    resolver: PathResolver,
    store: PlayerStore,
}

impl League {
    pub fn new(resolver: PathResolver, store: PlayerStore) -> Self {
        Self { resolver, store }
    }

    /// Build a league for `root` using the roster and schema of `config`.
    pub fn open(root: impl Into<PathBuf>, config: &LedgerConfig) -> Result<Self> {
        let schema = config.schema()?;
        Ok(Self::new(
            PathResolver::from_config(root, config),
            PlayerStore::new(schema),
        ))
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    pub fn walker(&self) -> HierarchyWalker<'_> {
        HierarchyWalker::new(&self.resolver)
    }

    pub fn aggregator(&self) -> StatsAggregator<'_> {
        StatsAggregator::new(&self.resolver, &self.store)
    }

    pub fn locate(&self, conference: Conference, team: &TeamSlug) -> Result<TeamLocation> {
        self.resolver.resolve(conference, team)
    }

    pub fn create_player(
        &self,
        conference: Conference,
        team: &TeamSlug,
        record: PlayerRecord,
    ) -> Result<PlayerRecord> {
        let location = self.locate(conference, team)?;
        self.store.create(&location, record)
    }

    pub fn read_player(
        &self,
        conference: Conference,
        team: &TeamSlug,
        player_id: &PlayerId,
    ) -> Result<PlayerRecord> {
        let location = self.locate(conference, team)?;
        self.store.read(&location, player_id)
    }

    pub fn read_players(&self, conference: Conference, team: &TeamSlug) -> Result<Vec<PlayerRecord>> {
        let location = self.locate(conference, team)?;
        self.store.read_all(&location)
    }

    pub fn update_player(
        &self,
        conference: Conference,
        team: &TeamSlug,
        player_id: &PlayerId,
        changes: &PlayerChanges,
    ) -> Result<PlayerRecord> {
        let location = self.locate(conference, team)?;
        self.store.update(&location, player_id, changes)
    }

    pub fn delete_player(
        &self,
        conference: Conference,
        team: &TeamSlug,
        player_id: &PlayerId,
    ) -> Result<PlayerRecord> {
        let location = self.locate(conference, team)?;
        self.store.delete(&location, player_id)
    }

    pub fn team_stats(&self, conference: Conference, team: &TeamSlug) -> Result<StatsSummary> {
        let location = self.locate(conference, team)?;
        self.aggregator().team_stats(&location)
    }

    pub fn conference_stats(&self, conference: Conference) -> StatsSummary {
        self.aggregator().conference_stats(conference)
    }

    pub fn league_stats(&self) -> StatsSummary {
        self.aggregator().league_stats()
    }

    pub fn league_players(&self) -> PlayerListing {
        self.aggregator().league_players()
    }

    pub fn conference_players(&self, conference: Conference) -> PlayerListing {
        self.aggregator().conference_players(conference)
    }

    pub fn find_player(&self, player_id: &PlayerId) -> PlayerListing {
        self.aggregator().find_player(player_id)
    }

    pub fn leaders(&self, field: &str, limit: Option<usize>) -> Result<PlayerListing> {
        self.aggregator().leaders(field, limit)
    }

    /// Valid teams currently on disk, in walk order.
    pub fn teams(&self) -> TeamListing {
        let mut walk = self.walker().walk_league();
        let teams = walk.by_ref().collect();
        TeamListing {
            teams,
            warnings: walk.into_warnings(),
        }
    }

    /// Create an empty table for a team. Existing tables are left untouched.
    ///
    /// This is how teams come into existence under the discovered roster
    /// policy. Under the configured policy only rostered teams can be
    /// provisioned.
    pub fn provision_team(&self, conference: Conference, team: &TeamSlug) -> Result<TeamLocation> {
        if !self.resolver.admits(conference, team) {
            return Err(LedgerError::InvalidTeam {
                team: team.to_string(),
                reason: format!("not on the {} roster", conference),
            });
        }
        let location = self.resolver.locate(conference, team);
        self.store.init_table(&location)?;
        Ok(location)
    }
}
