//! Basketball position types.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basketball player positions.
///
/// Stored in tables by their short code (`PG`, `SG`, `SF`, `PF`, `C`).
/// Parsing also accepts the long English names and the Spanish names found in
/// older data sets (`base`, `escolta`, `alero`, `ala-pivot`, `pivot`).
///
/// # Examples
///
/// ```rust
/// use hoops_ledger::Position;
///
/// let c: Position = "pivot".parse().unwrap();
/// assert_eq!(c, Position::Center);
/// assert_eq!(c.to_string(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    /// Short code written to the player table.
    pub fn code(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "pg" | "point-guard" | "base" => Ok(Position::PointGuard),
            "sg" | "shooting-guard" | "escolta" => Ok(Position::ShootingGuard),
            "sf" | "small-forward" | "alero" => Ok(Position::SmallForward),
            "pf" | "power-forward" | "ala-pivot" => Ok(Position::PowerForward),
            "c" | "center" | "pivot" => Ok(Position::Center),
            _ => Err(LedgerError::invalid_player(format!(
                "unknown position '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.code().to_string()
    }
}
