//! The two fixed conferences of the league.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// League conferences, in their fixed enumeration order.
///
/// Each conference owns one directory directly under the storage root,
/// named by [`Conference::dir_name`]. Parsing also accepts `este`/`oeste`,
/// but only as input spellings: on disk the directory is always `east` or
/// `west`.
///
/// # Examples
///
/// ```rust
/// use hoops_ledger::Conference;
///
/// let east: Conference = "East".parse().unwrap();
/// assert_eq!(east, Conference::East);
/// assert_eq!(east.dir_name(), "east");
/// assert!("north".parse::<Conference>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    /// Every conference, East first.
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    /// Directory name under the storage root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Conference::East => "east",
            Conference::West => "west",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Conference::East => "East",
            Conference::West => "West",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Conference {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "east" | "este" | "e" => Ok(Conference::East),
            "west" | "oeste" | "w" => Ok(Conference::West),
            _ => Err(LedgerError::InvalidConference {
                conference: s.to_string(),
            }),
        }
    }
}
