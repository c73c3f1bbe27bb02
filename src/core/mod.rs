//! Core utilities for the hoops-ledger record store
//!
//! This module consolidates the pieces every storage component is built on:
//! - `config`: Storage root, roster policy and stat field configuration
//! - `files`: Missing-tolerant reads and atomic file replacement
//! - `paths`: Resolution of (conference, team) to a team location

pub mod config;
pub mod files;
pub mod paths;

// Re-export commonly used items for convenience
pub use config::{LedgerConfig, RosterConfig, RosterPolicy, ROOT_ENV_VAR};
pub use paths::{PathResolver, TeamLocation, TABLE_FILE_NAME};
