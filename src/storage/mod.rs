//! Storage layer for the hoops-ledger record store
//!
//! This module maps the league hierarchy onto CSV files on disk,
//! organized into logical components:
//! - `models`: Data structures and the table schema
//! - `table`: CSV encoding and structural validation of team tables
//! - `queries`: CRUD operations on one team's table
//! - `walker`: Traversal of conferences and team directories
//! - `analysis`: Team, conference and league statistics

pub mod analysis;
pub mod models;
pub mod queries;
pub mod table;
pub mod walker;


// Re-export the main types and store structs for easy access
pub use analysis::{PlayerListing, StatsAggregator};
pub use models::*;
pub use queries::PlayerStore;
pub use walker::{HierarchyWalker, LeagueWalk, TeamEntry, WalkWarning};
