//! Common utilities and helper functions shared across commands.
//!
//! Opening the league from CLI options and rendering records and summaries
//! as text lines live here so every handler prints them the same way.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    core::config::LedgerConfig,
    storage::{LeaguePlayer, PlayerRecord, StatsSummary, TableSchema, WalkWarning},
    League, Result,
};

/// Load configuration and open the league at the resolved storage root.
pub fn open_league(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<League> {
    let config = match config {
        Some(path) => LedgerConfig::load(&path)?,
        None => LedgerConfig::load_default()?,
    };
    let root = config.resolve_root(root)?;
    tracing::debug!(root = %root.display(), "opening league");
    League::open(root, &config)
}

/// Print any value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// Report walk warnings on stderr.
pub fn print_warnings(warnings: &[WalkWarning]) {
    for warning in warnings {
        // tarpaulin::skip - console output
        eprintln!(
            "⚠ skipped {}/{}: {}",
            warning.conference.dir_name(),
            warning.entry,
            warning.reason
        );
    }
}

/// One text line per record: `id name (position) field value, ...`.
pub fn format_record(record: &PlayerRecord, schema: &TableSchema) -> String {
    let stats = schema
        .stat_fields()
        .iter()
        .map(|field| {
            let value = record.stat(field).unwrap_or_default();
            format!("{} {}", value, field)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {} ({}) - {}",
        record.id, record.name, record.position, stats
    )
}

/// A record prefixed with its conference and team.
pub fn format_league_player(player: &LeaguePlayer, schema: &TableSchema) -> String {
    format!(
        "[{}/{}] {}",
        player.conference.dir_name(),
        player.team,
        format_record(&player.record, schema)
    )
}

/// Multi-line rendering of a summary. Missing averages print as "no data".
pub fn format_summary(summary: &StatsSummary) -> String {
    let mut lines = vec![
        format!("Statistics for {}", summary.scope),
        format!("teams: {}", summary.team_count),
        format!("players: {}", summary.player_count),
    ];
    for field in &summary.fields {
        let average = field
            .average
            .map(|a| format!("{:.2}", a))
            .unwrap_or_else(|| "no data".to_string());
        let extreme = |e: &Option<crate::storage::StatExtreme>| {
            e.as_ref()
                .map(|e| format!("{} (id {}, {}/{})", e.value, e.player_id, e.conference.dir_name(), e.team))
                .unwrap_or_else(|| "no data".to_string())
        };
        lines.push(format!(
            "{}: sum {} | avg {} | min {} | max {}",
            field.field,
            field.sum,
            average,
            extreme(&field.min),
            extreme(&field.max)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        storage::{FieldStats, StatExtreme, StatValue, StatsScope},
        Conference, PlayerId, Position, TeamSlug,
    };

    fn sample_record() -> PlayerRecord {
        PlayerRecord::new(PlayerId::new("7").unwrap(), "Jaylen Brown", Position::ShootingGuard)
            .with_stat("points", StatValue::new(23.0).unwrap())
            .with_stat("rebounds", StatValue::new(5.5).unwrap())
            .with_stat("assists", StatValue::new(3.6).unwrap())
    }

    #[test]
    fn test_format_record() {
        let line = format_record(&sample_record(), &TableSchema::default());
        assert_eq!(
            line,
            "7 Jaylen Brown (SG) - 23 points, 5.5 rebounds, 3.6 assists"
        );
    }

    #[test]
    fn test_format_league_player() {
        let player = LeaguePlayer {
            conference: Conference::East,
            team: TeamSlug::parse("boston_celtics").unwrap(),
            record: sample_record(),
        };
        let line = format_league_player(&player, &TableSchema::default());
        assert!(line.starts_with("[east/boston_celtics] 7 Jaylen Brown"));
    }

    #[test]
    fn test_format_summary_no_data() {
        let summary = StatsSummary::empty(StatsScope::League, &TableSchema::default());
        let text = format_summary(&summary);
        assert!(text.contains("Statistics for league"));
        assert!(text.contains("players: 0"));
        assert!(text.contains("points: sum 0 | avg no data | min no data | max no data"));
    }

    #[test]
    fn test_format_summary_with_extremes() {
        let team = TeamSlug::parse("boston_celtics").unwrap();
        let summary = StatsSummary {
            scope: StatsScope::Team {
                conference: Conference::East,
                team: team.clone(),
            },
            team_count: 1,
            player_count: 2,
            fields: vec![FieldStats {
                field: "points".to_string(),
                sum: 30.0,
                average: Some(15.0),
                min: Some(StatExtreme {
                    value: 10.0,
                    player_id: PlayerId::new("2").unwrap(),
                    conference: Conference::East,
                    team: team.clone(),
                }),
                max: Some(StatExtreme {
                    value: 20.0,
                    player_id: PlayerId::new("1").unwrap(),
                    conference: Conference::East,
                    team,
                }),
            }],
            warnings: Vec::new(),
        };

        let text = format_summary(&summary);
        assert!(text.contains("Statistics for east/boston_celtics"));
        assert!(text.contains(
            "points: sum 30 | avg 15.00 | min 10 (id 2, east/boston_celtics) | max 20 (id 1, east/boston_celtics)"
        ));
    }
}
