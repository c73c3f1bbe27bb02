//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::{anyhow, Result};
use clap::Parser;
use hoops_ledger::{
    cli::{Commands, Ledger},
    commands::{
        open_league,
        players::{
            build_changes, handle_add, handle_delete, handle_find, handle_list, handle_show,
            handle_update, AddPlayerParams,
        },
        stats::{handle_init_team, handle_leaders, handle_stats, handle_teams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Run the CLI.
fn main() -> Result<()> {
    init_tracing().ok();
    let app = Ledger::parse();
    let league = open_league(app.root, app.config)?;

    match app.command {
        Commands::Add {
            team,
            id,
            name,
            position,
            stats,
            json,
        } => handle_add(
            &league,
            AddPlayerParams {
                team,
                id,
                name,
                position,
                stats,
                as_json: json,
            },
        )?,

        Commands::List {
            conference,
            team,
            json,
        } => handle_list(&league, conference, team, json)?,

        Commands::Show { team, id, json } => handle_show(&league, team, id, json)?,

        Commands::Update {
            team,
            id,
            name,
            position,
            stats,
            json,
        } => handle_update(&league, team, id, build_changes(name, position, stats), json)?,

        Commands::Delete { team, id } => handle_delete(&league, team, id)?,

        Commands::Find { id, json } => handle_find(&league, id, json)?,

        Commands::Stats {
            conference,
            team,
            json,
        } => handle_stats(&league, conference, team, json)?,

        Commands::Leaders { field, limit, json } => handle_leaders(&league, &field, limit, json)?,

        Commands::Teams { json } => handle_teams(&league, json)?,

        Commands::InitTeam { team } => handle_init_team(&league, team.conference, &team.team)?,
    }

    Ok(())
}
