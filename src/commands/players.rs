//! Player CRUD command implementations.

use crate::{
    cli::{StatAssignment, TeamArgs},
    storage::{PlayerChanges, PlayerRecord, StatValue, TableSchema},
    League, PlayerId, Position, Result,
};

use super::common::{format_league_player, format_record, print_json, print_warnings};

/// Options for adding a player.
#[derive(Debug)]
pub struct AddPlayerParams {
    pub team: TeamArgs,
    pub id: Option<PlayerId>,
    pub name: String,
    pub position: Position,
    pub stats: Vec<StatAssignment>,
    pub as_json: bool,
}

/// Build the record to create. Stats not given on the command line are 0;
/// unknown stat names are left in so validation rejects them.
pub fn build_record(
    schema: &TableSchema,
    id: Option<PlayerId>,
    name: String,
    position: Position,
    stats: Vec<StatAssignment>,
) -> PlayerRecord {
    let mut record = PlayerRecord::new(id.unwrap_or_else(PlayerId::generate), name, position);
    for field in schema.stat_fields() {
        record = record.with_stat(field.clone(), StatValue::default());
    }
    for stat in stats {
        record = record.with_stat(stat.field, stat.value);
    }
    record
}

/// Turn update options into a partial record.
pub fn build_changes(
    name: Option<String>,
    position: Option<Position>,
    stats: Vec<StatAssignment>,
) -> PlayerChanges {
    let mut changes = PlayerChanges {
        name,
        position,
        ..PlayerChanges::default()
    };
    for stat in stats {
        changes = changes.stat(stat.field, stat.value);
    }
    changes
}

pub fn handle_add(league: &League, params: AddPlayerParams) -> Result<()> {
    let record = build_record(
        league.store().schema(),
        params.id,
        params.name,
        params.position,
        params.stats,
    );
    let created = league.create_player(params.team.conference, &params.team.team, record)?;

    if params.as_json {
        print_json(&created)?;
    } else {
        println!("✓ Player added: {}", format_record(&created, league.store().schema()));
    }
    Ok(())
}

pub fn handle_list(
    league: &League,
    conference: Option<crate::Conference>,
    team: Option<crate::TeamSlug>,
    as_json: bool,
) -> Result<()> {
    let schema = league.store().schema();

    if let (Some(conference), Some(team)) = (conference, team.as_ref()) {
        let players = league.read_players(conference, team)?;
        if as_json {
            return print_json(&players);
        }
        if players.is_empty() {
            println!("No players in {}/{}.", conference.dir_name(), team);
        }
        for player in &players {
            println!("{}", format_record(player, schema)); // tarpaulin::skip
        }
        return Ok(());
    }

    let listing = match conference {
        Some(conference) => league.conference_players(conference),
        None => league.league_players(),
    };
    print_warnings(&listing.warnings);
    if as_json {
        return print_json(&listing.players);
    }
    if listing.players.is_empty() {
        println!("No players loaded.");
    }
    for player in &listing.players {
        println!("{}", format_league_player(player, schema)); // tarpaulin::skip
    }
    Ok(())
}

pub fn handle_show(league: &League, team: TeamArgs, id: PlayerId, as_json: bool) -> Result<()> {
    let record = league.read_player(team.conference, &team.team, &id)?;
    if as_json {
        print_json(&record)
    } else {
        println!("{}", format_record(&record, league.store().schema()));
        Ok(())
    }
}

pub fn handle_update(
    league: &League,
    team: TeamArgs,
    id: PlayerId,
    changes: PlayerChanges,
    as_json: bool,
) -> Result<()> {
    if changes.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }
    let updated = league.update_player(team.conference, &team.team, &id, &changes)?;
    if as_json {
        print_json(&updated)
    } else {
        println!("✓ Player updated: {}", format_record(&updated, league.store().schema()));
        Ok(())
    }
}

pub fn handle_delete(league: &League, team: TeamArgs, id: PlayerId) -> Result<()> {
    let removed = league.delete_player(team.conference, &team.team, &id)?;
    println!("✓ Player removed: {} {}", removed.id, removed.name);
    Ok(())
}

pub fn handle_find(league: &League, id: PlayerId, as_json: bool) -> Result<()> {
    let listing = league.find_player(&id);
    print_warnings(&listing.warnings);
    if as_json {
        return print_json(&listing.players);
    }
    if listing.players.is_empty() {
        println!("No player with id {}.", id);
    }
    for player in &listing.players {
        println!("{}", format_league_player(player, league.store().schema()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LedgerError;

    fn stat(s: &str) -> StatAssignment {
        s.parse().unwrap()
    }

    #[test]
    fn test_build_record_fills_missing_stats_with_zero() {
        let schema = TableSchema::default();
        let record = build_record(
            &schema,
            Some(PlayerId::new("1").unwrap()),
            "A".to_string(),
            Position::Center,
            vec![stat("points=20")],
        );

        assert_eq!(record.stat("points").unwrap().get(), 20.0);
        assert_eq!(record.stat("rebounds").unwrap().get(), 0.0);
        assert_eq!(record.stat("assists").unwrap().get(), 0.0);
        assert!(record.validate(&schema).is_ok());
    }

    #[test]
    fn test_build_record_generates_id_and_keeps_unknown_stats() {
        let schema = TableSchema::default();
        let record = build_record(
            &schema,
            None,
            "A".to_string(),
            Position::Center,
            vec![stat("blocks=2")],
        );

        assert!(!record.id.as_str().is_empty());
        assert!(matches!(
            record.validate(&schema),
            Err(LedgerError::UnknownStatField { field }) if field == "blocks"
        ));
    }

    #[test]
    fn test_build_changes() {
        let changes = build_changes(None, Some(Position::PointGuard), vec![stat("assists=9")]);
        assert!(changes.name.is_none());
        assert_eq!(changes.position, Some(Position::PointGuard));
        assert_eq!(changes.stats["assists"].get(), 9.0);
        assert!(!changes.is_empty());

        assert!(build_changes(None, None, Vec::new()).is_empty());
    }
}
