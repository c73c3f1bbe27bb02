//! Type-safe wrappers and enums for league hierarchy data.

pub mod conference;
pub mod ids;
pub mod position;
