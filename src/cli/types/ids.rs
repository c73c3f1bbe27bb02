//! Identifier types for teams and players.

use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a team's directory slug, e.g. `los_angeles_lakers`.
///
/// A slug is non-empty and made of lowercase ASCII letters, digits and
/// underscores, so it is always a safe single path component.
///
/// # Examples
///
/// ```rust
/// use hoops_ledger::TeamSlug;
///
/// let slug = TeamSlug::parse("Los Angeles Lakers").unwrap();
/// assert_eq!(slug.as_str(), "los_angeles_lakers");
/// assert!(TeamSlug::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamSlug(String);

impl TeamSlug {
    /// Normalize free-form input (case, spaces, hyphens) into a slug.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::from_normalized(normalized, raw)
    }

    /// Accept a directory name only if it is already a canonical slug.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::from_normalized(name.to_string(), name).ok()
    }

    fn from_normalized(slug: String, raw: &str) -> Result<Self> {
        if slug.is_empty() {
            return Err(LedgerError::InvalidTeam {
                team: raw.to_string(),
                reason: "team identifier must not be empty".to_string(),
            });
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(LedgerError::InvalidTeam {
                team: raw.to_string(),
                reason: "only letters, digits, spaces, '-' and '_' are allowed".to_string(),
            });
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamSlug {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TeamSlug {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TeamSlug> for String {
    fn from(slug: TeamSlug) -> Self {
        slug.0
    }
}

/// Type-safe wrapper for player identifiers.
///
/// Identifiers are unique within one team's table only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::invalid_player("player id must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Fresh random identifier for callers that do not supply one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlayerId {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_slug_normalization() {
        assert_eq!(
            TeamSlug::parse("Boston Celtics").unwrap().as_str(),
            "boston_celtics"
        );
        assert_eq!(
            TeamSlug::parse("  portland-trail-blazers ").unwrap().as_str(),
            "portland_trail_blazers"
        );
        assert_eq!(TeamSlug::parse("team_76").unwrap().as_str(), "team_76");
    }

    #[test]
    fn test_team_slug_rejects_bad_input() {
        assert!(TeamSlug::parse("").is_err());
        assert!(TeamSlug::parse("../etc").is_err());
        assert!(TeamSlug::parse("a/b").is_err());

        match TeamSlug::parse("  ").unwrap_err() {
            LedgerError::InvalidTeam { reason, .. } => assert!(reason.contains("empty")),
            other => panic!("Expected InvalidTeam, got {other:?}"),
        }
    }

    #[test]
    fn test_team_slug_from_dir_name_is_strict() {
        assert!(TeamSlug::from_dir_name("miami_heat").is_some());
        assert!(TeamSlug::from_dir_name("Miami Heat").is_none());
        assert!(TeamSlug::from_dir_name(".hidden").is_none());
    }

    #[test]
    fn test_player_id_trims_and_rejects_empty() {
        assert_eq!(PlayerId::new(" 23 ").unwrap().as_str(), "23");
        assert!(PlayerId::new("").is_err());
        assert!("   ".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_generated_player_ids_are_unique() {
        let a = PlayerId::generate();
        let b = PlayerId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }
}
