//! Hierarchical NBA Record Store
//!
//! A small persistence layer that models a league → conference → team
//! hierarchy as nested directories, with one CSV table of players per team.
//!
//! ## Features
//!
//! - **Path Resolution**: Validates conferences and teams against a roster policy
//! - **Player CRUD**: Create, read, update and delete rows of a team's table
//! - **Hierarchy Walking**: Lazy, restartable traversal that skips bad entries with warnings
//! - **Statistics**: Counts, sums, averages and extremes per team, conference and league
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   east/
//!     boston_celtics/players.csv
//!   west/
//!     los_angeles_lakers/players.csv
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoops_ledger::{
//!     storage::{PlayerRecord, StatValue},
//!     Conference, League, LedgerConfig, PlayerId, Position, TeamSlug,
//! };
//!
//! # fn example() -> hoops_ledger::Result<()> {
//! let league = League::open("/tmp/nba", &LedgerConfig::default())?;
//! let celtics = TeamSlug::parse("boston_celtics")?;
//!
//! let record = PlayerRecord::new(PlayerId::new("0")?, "Jayson Tatum", Position::SmallForward)
//!     .with_stat("points", StatValue::new(26.9)?)
//!     .with_stat("rebounds", StatValue::new(8.1)?)
//!     .with_stat("assists", StatValue::new(4.9)?);
//! league.create_player(Conference::East, &celtics, record)?;
//!
//! let stats = league.team_stats(Conference::East, &celtics)?;
//! assert_eq!(stats.player_count, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the store at a data directory without passing `--root` every time:
//! ```bash
//! export HOOPS_LEDGER_ROOT=/srv/nba
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    conference::Conference,
    ids::{PlayerId, TeamSlug},
    position::Position,
};
pub use crate::core::{LedgerConfig, PathResolver, RosterPolicy, TeamLocation, ROOT_ENV_VAR};
pub use error::{LedgerError, Result};
pub use league::League;
