//! Command implementations for the hoops-ledger CLI

pub mod common;
pub mod players;
pub mod stats;

pub use common::open_league;
