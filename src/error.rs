//! Error types for the hoops-ledger record store

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid conference: {conference}")]
    InvalidConference { conference: String },

    #[error("Invalid team '{team}': {reason}")]
    InvalidTeam { team: String, reason: String },

    #[error("Player not found: {player_id} in {team}")]
    PlayerNotFound { player_id: String, team: String },

    #[error("Duplicate player: {player_id} already exists in {team}")]
    DuplicatePlayer { player_id: String, team: String },

    #[error("Malformed table {path} (line {line}): {reason}")]
    MalformedTable {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("Storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid player: {reason}")]
    InvalidPlayer { reason: String },

    #[error("Unknown stat field: {field}")]
    UnknownStatField { field: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LedgerError {
    /// Wrap an I/O failure on `path`.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LedgerError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Build a `MalformedTable` error for `path` at a 1-based `line`.
    pub fn malformed(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        LedgerError::MalformedTable {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid_player(reason: impl Into<String>) -> Self {
        LedgerError::InvalidPlayer {
            reason: reason.into(),
        }
    }
}
