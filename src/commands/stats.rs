//! Statistics and league-wide query command implementations.

use crate::{Conference, League, Result, TeamSlug};

use super::common::{format_league_player, format_summary, print_json, print_warnings};

pub fn handle_stats(
    league: &League,
    conference: Option<Conference>,
    team: Option<TeamSlug>,
    as_json: bool,
) -> Result<()> {
    let summary = match (conference, team) {
        (Some(conference), Some(team)) => league.team_stats(conference, &team)?,
        (Some(conference), None) => league.conference_stats(conference),
        // clap enforces that --team comes with --conference
        (None, _) => league.league_stats(),
    };

    if as_json {
        return print_json(&summary);
    }
    print_warnings(&summary.warnings);
    println!("{}", format_summary(&summary)); // tarpaulin::skip
    Ok(())
}

pub fn handle_leaders(league: &League, field: &str, limit: usize, as_json: bool) -> Result<()> {
    let listing = league.leaders(field, Some(limit))?;
    print_warnings(&listing.warnings);
    if as_json {
        return print_json(&listing.players);
    }
    for (rank, player) in listing.players.iter().enumerate() {
        // tarpaulin::skip - console output
        println!(
            "{:>3}. {}",
            rank + 1,
            format_league_player(player, league.store().schema())
        );
    }
    Ok(())
}

pub fn handle_teams(league: &League, as_json: bool) -> Result<()> {
    let listing = league.teams();
    if as_json {
        return print_json(&listing);
    }
    print_warnings(&listing.warnings);
    for entry in &listing.teams {
        println!("{}/{}", entry.conference.dir_name(), entry.team);
    }
    Ok(())
}

pub fn handle_init_team(league: &League, conference: Conference, team: &TeamSlug) -> Result<()> {
    let location = league.provision_team(conference, team)?;
    println!("✓ Table ready at {}", location.table_path().display());
    Ok(())
}
