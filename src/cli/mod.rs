//! CLI argument definitions and parsing.

pub mod types;

use crate::{
    error::{LedgerError, Result},
    storage::StatValue,
    Conference, PlayerId, Position, TeamSlug,
};
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};

/// A `field=value` stat given on the command line, e.g. `points=27.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatAssignment {
    pub field: String,
    pub value: StatValue,
}

impl FromStr for StatAssignment {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        let (field, value) = s.split_once('=').ok_or_else(|| {
            LedgerError::invalid_player(format!("expected FIELD=VALUE, got '{}'", s))
        })?;
        Ok(Self {
            field: field.trim().to_lowercase(),
            value: value.parse()?,
        })
    }
}

/// Conference and team that a command operates on.
#[derive(Debug, Args)]
pub struct TeamArgs {
    /// Conference: east | west.
    #[clap(long, short)]
    pub conference: Conference,

    /// Team slug or name, e.g. `boston_celtics` or "Boston Celtics".
    #[clap(long, short)]
    pub team: TeamSlug,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a player to a team's table.
    Add {
        #[clap(flatten)]
        team: TeamArgs,

        /// Player id (a random UUID when omitted).
        #[clap(long)]
        id: Option<PlayerId>,

        /// Player name.
        #[clap(long, short)]
        name: String,

        /// Position: PG | SG | SF | PF | C.
        #[clap(long, short)]
        position: Position,

        /// Stat value (repeatable): `-s points=20 -s assists=5`. Missing stats are 0.
        #[clap(long = "stat", short = 's')]
        stats: Vec<StatAssignment>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List players of a team, a conference, or the whole league.
    List {
        /// Restrict to one conference.
        #[clap(long, short)]
        conference: Option<Conference>,

        /// Restrict to one team (requires --conference).
        #[clap(long, short, requires = "conference")]
        team: Option<TeamSlug>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player.
    Show {
        #[clap(flatten)]
        team: TeamArgs,

        /// Player id.
        #[clap(long)]
        id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Change some fields of a player; the rest stay as they are.
    Update {
        #[clap(flatten)]
        team: TeamArgs,

        /// Player id.
        #[clap(long)]
        id: PlayerId,

        /// New name.
        #[clap(long, short)]
        name: Option<String>,

        /// New position.
        #[clap(long, short)]
        position: Option<Position>,

        /// New stat value (repeatable): `-s points=22`.
        #[clap(long = "stat", short = 's')]
        stats: Vec<StatAssignment>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Remove a player from a team's table.
    Delete {
        #[clap(flatten)]
        team: TeamArgs,

        /// Player id.
        #[clap(long)]
        id: PlayerId,
    },

    /// Find a player id in every team of the league.
    Find {
        /// Player id.
        #[clap(long)]
        id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Statistics for a team, a conference, or the whole league.
    Stats {
        /// Restrict to one conference.
        #[clap(long, short)]
        conference: Option<Conference>,

        /// Restrict to one team (requires --conference).
        #[clap(long, short, requires = "conference")]
        team: Option<TeamSlug>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// League players ranked by one stat field.
    Leaders {
        /// Stat field to rank by, e.g. `points`.
        #[clap(long, short)]
        field: String,

        /// Number of players to show.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the teams found on disk.
    Teams {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Create an empty table for a team. With the configured roster policy the team must be on the roster.
    InitTeam {
        #[clap(flatten)]
        team: TeamArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hoops-ledger", about = "Hierarchical NBA player record store")]
pub struct Ledger {
    /// Storage root (or set `HOOPS_LEDGER_ROOT` env var).
    #[clap(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (default: the per-user hoops-ledger/config.toml, if present).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
