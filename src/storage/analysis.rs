//! Statistics over teams, conferences and the whole league

use super::{
    models::{
        FieldStats, LeaguePlayer, PlayerRecord, StatExtreme, StatsScope, StatsSummary, TableSchema,
    },
    queries::PlayerStore,
    walker::{HierarchyWalker, LeagueWalk, TeamEntry, WalkWarning},
};
use crate::{
    core::paths::{PathResolver, TeamLocation},
    error::Result,
    Conference, PlayerId,
};
use serde::Serialize;
use tracing::debug;

/// Players gathered from a walk, with the warnings it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerListing {
    pub players: Vec<LeaguePlayer>,
    pub warnings: Vec<WalkWarning>,
}

/// Computes [`StatsSummary`] values from walked team tables.
#[derive(Debug, Clone, Copy)]
pub struct StatsAggregator<'a> {
    resolver: &'a PathResolver,
    store: &'a PlayerStore,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(resolver: &'a PathResolver, store: &'a PlayerStore) -> Self {
        Self { resolver, store }
    }

    /// Statistics of one team. Read errors propagate.
    pub fn team_stats(&self, location: &TeamLocation) -> Result<StatsSummary> {
        let rows = self.store.read_all(location)?;
        Ok(summarize_team(location, &rows, self.store.schema()))
    }

    /// Fold of every readable team in `conference`.
    pub fn conference_stats(&self, conference: Conference) -> StatsSummary {
        self.fold(
            HierarchyWalker::new(self.resolver).walk_conference(conference),
            StatsScope::Conference { conference },
        )
    }

    /// Fold of every readable team in the league.
    pub fn league_stats(&self) -> StatsSummary {
        self.fold(
            HierarchyWalker::new(self.resolver).walk_league(),
            StatsScope::League,
        )
    }

    /// Every player of the league in walk order.
    pub fn league_players(&self) -> PlayerListing {
        self.collect_players(self.walker().walk_league(), |_| true)
    }

    /// Players of one conference in walk order. Only that conference is
    /// walked, so warnings never mention the other one.
    pub fn conference_players(&self, conference: Conference) -> PlayerListing {
        self.collect_players(self.walker().walk_conference(conference), |_| true)
    }

    /// Players with `player_id` in any team. Ids are only unique per team,
    /// so several may match.
    pub fn find_player(&self, player_id: &PlayerId) -> PlayerListing {
        self.collect_players(self.walker().walk_league(), |record| &record.id == player_id)
    }

    /// League players ordered by `field`, highest first. Ties keep walk order.
    pub fn leaders(&self, field: &str, limit: Option<usize>) -> Result<PlayerListing> {
        self.store.schema().require_field(field)?;

        let mut listing = self.league_players();
        listing.players.sort_by(|a, b| {
            let a = a.record.stat(field).map(|v| v.get()).unwrap_or_default();
            let b = b.record.stat(field).map(|v| v.get()).unwrap_or_default();
            b.total_cmp(&a)
        });
        if let Some(limit) = limit {
            listing.players.truncate(limit);
        }
        Ok(listing)
    }

    fn fold(&self, mut walk: LeagueWalk<'_>, scope: StatsScope) -> StatsSummary {
        let mut summary = StatsSummary::empty(scope, self.store.schema());
        while let Some(entry) = walk.next() {
            if let Some(rows) = self.read_entry(&entry, &mut walk) {
                summary = summary.merge(summarize_team(&entry.location, &rows, self.store.schema()));
            }
        }
        summary.warnings = walk.into_warnings();
        debug!(
            scope = %summary.scope,
            teams = summary.team_count,
            players = summary.player_count,
            "aggregated stats"
        );
        summary
    }

    fn walker(&self) -> HierarchyWalker<'a> {
        HierarchyWalker::new(self.resolver)
    }

    fn collect_players<F>(&self, mut walk: LeagueWalk<'_>, keep: F) -> PlayerListing
    where
        F: Fn(&PlayerRecord) -> bool,
    {
        let mut players = Vec::new();
        while let Some(entry) = walk.next() {
            if let Some(rows) = self.read_entry(&entry, &mut walk) {
                players.extend(rows.into_iter().filter(|r| keep(r)).map(|record| LeaguePlayer {
                    conference: entry.conference,
                    team: entry.team.clone(),
                    record,
                }));
            }
        }
        PlayerListing {
            players,
            warnings: walk.into_warnings(),
        }
    }

    /// Read a walked team's rows; an unreadable table becomes a warning.
    fn read_entry(&self, entry: &TeamEntry, walk: &mut LeagueWalk<'_>) -> Option<Vec<PlayerRecord>> {
        match self.store.read_all(&entry.location) {
            Ok(rows) => Some(rows),
            Err(e) => {
                walk.record_warning(WalkWarning::new(
                    entry.conference,
                    entry.team.as_str(),
                    entry.location.table_path(),
                    e.to_string(),
                ));
                None
            }
        }
    }
}

/// Summary of one team's rows. Extremes keep the first row on ties.
pub fn summarize_team(location: &TeamLocation, rows: &[PlayerRecord], schema: &TableSchema) -> StatsSummary {
    let fields = schema
        .stat_fields()
        .iter()
        .map(|field| {
            let mut sum = 0.0;
            let mut min: Option<StatExtreme> = None;
            let mut max: Option<StatExtreme> = None;
            for record in rows {
                let value = record.stat(field).map(|v| v.get()).unwrap_or_default();
                sum += value;
                if min.as_ref().map_or(true, |m| value < m.value) {
                    min = Some(extreme(location, record, value));
                }
                if max.as_ref().map_or(true, |m| value > m.value) {
                    max = Some(extreme(location, record, value));
                }
            }
            FieldStats {
                field: field.clone(),
                sum,
                average: average(sum, rows.len()),
                min,
                max,
            }
        })
        .collect();

    StatsSummary {
        scope: StatsScope::Team {
            conference: location.conference(),
            team: location.team().clone(),
        },
        team_count: 1,
        player_count: rows.len(),
        fields,
        warnings: Vec::new(),
    }
}

fn extreme(location: &TeamLocation, record: &PlayerRecord, value: f64) -> StatExtreme {
    StatExtreme {
        value,
        player_id: record.id.clone(),
        conference: location.conference(),
        team: location.team().clone(),
    }
}

fn average(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

impl StatsSummary {
    /// A summary covering nothing yet: zero counts, no averages or extremes.
    pub fn empty(scope: StatsScope, schema: &TableSchema) -> Self {
        Self {
            scope,
            team_count: 0,
            player_count: 0,
            fields: schema
                .stat_fields()
                .iter()
                .map(|field| FieldStats {
                    field: field.clone(),
                    sum: 0.0,
                    average: None,
                    min: None,
                    max: None,
                })
                .collect(),
            warnings: Vec::new(),
        }
    }

    /// Combine two summaries of the same schema, keeping `self`'s scope.
    ///
    /// Counts and sums add. On equal extremes `self` wins, so folding teams
    /// in walk order keeps the earliest team's player.
    pub fn merge(mut self, other: StatsSummary) -> StatsSummary {
        self.team_count += other.team_count;
        self.player_count += other.player_count;

        for (mine, theirs) in self.fields.iter_mut().zip(other.fields) {
            mine.sum += theirs.sum;
            mine.min = pick(mine.min.take(), theirs.min, |a, b| b.value < a.value);
            mine.max = pick(mine.max.take(), theirs.max, |a, b| b.value > a.value);
        }
        let count = self.player_count;
        for field in &mut self.fields {
            field.average = average(field.sum, count);
        }

        self.warnings.extend(other.warnings);
        self
    }
}

fn pick<F>(left: Option<StatExtreme>, right: Option<StatExtreme>, right_wins: F) -> Option<StatExtreme>
where
    F: Fn(&StatExtreme, &StatExtreme) -> bool,
{
    match (left, right) {
        (Some(a), Some(b)) => Some(if right_wins(&a, &b) { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}
