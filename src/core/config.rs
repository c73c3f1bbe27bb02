//! Ledger configuration: storage root, roster policy, stat fields and roster.
//!
//! Configuration is read from an optional TOML file:
//!
//! ```toml
//! root = "/srv/nba"
//! roster_policy = "configured"   # or "discovered"
//! stat_fields = ["points", "rebounds", "assists", "steals"]
//!
//! [roster]
//! east = ["boston_celtics", "miami_heat"]
//! west = ["los_angeles_lakers"]
//! ```
//!
//! Every key is optional; missing keys fall back to [`LedgerConfig::default`].

use crate::{
    core::files::read_optional,
    error::{LedgerError, Result},
    storage::models::{TableSchema, DEFAULT_STAT_FIELDS},
    Conference, TeamSlug,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the storage root.
pub const ROOT_ENV_VAR: &str = "HOOPS_LEDGER_ROOT";

const APP_DIR: &str = "hoops-ledger";
const CONFIG_FILE_NAME: &str = "config.toml";

/// How the set of valid teams is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterPolicy {
    /// Teams listed in the configured roster are valid, whether or not their
    /// directory exists yet.
    #[default]
    Configured,
    /// A team is valid when its `players.csv` exists on disk.
    Discovered,
}

/// Team slugs per conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub east: Vec<TeamSlug>,
    pub west: Vec<TeamSlug>,
}

impl RosterConfig {
    pub fn teams(&self, conference: Conference) -> &[TeamSlug] {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    pub fn contains(&self, conference: Conference, team: &TeamSlug) -> bool {
        self.teams(conference).contains(team)
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            east: slugs(&[
                "atlanta_hawks",
                "boston_celtics",
                "brooklyn_nets",
                "charlotte_hornets",
                "chicago_bulls",
                "cleveland_cavaliers",
                "detroit_pistons",
                "indiana_pacers",
                "miami_heat",
                "milwaukee_bucks",
                "new_york_knicks",
                "orlando_magic",
                "philadelphia_76ers",
                "toronto_raptors",
                "washington_wizards",
            ]),
            west: slugs(&[
                "dallas_mavericks",
                "denver_nuggets",
                "golden_state_warriors",
                "houston_rockets",
                "los_angeles_clippers",
                "los_angeles_lakers",
                "memphis_grizzlies",
                "minnesota_timberwolves",
                "new_orleans_pelicans",
                "oklahoma_city_thunder",
                "phoenix_suns",
                "portland_trail_blazers",
                "sacramento_kings",
                "san_antonio_spurs",
                "utah_jazz",
            ]),
        }
    }
}

fn slugs(names: &[&str]) -> Vec<TeamSlug> {
    names.iter().filter_map(|n| TeamSlug::from_dir_name(n)).collect()
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub root: Option<PathBuf>,
    pub roster_policy: RosterPolicy,
    pub stat_fields: Vec<String>,
    pub roster: RosterConfig,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            root: None,
            roster_policy: RosterPolicy::default(),
            stat_fields: DEFAULT_STAT_FIELDS.iter().map(|s| s.to_string()).collect(),
            roster: RosterConfig::default(),
        }
    }
}

impl LedgerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| LedgerError::Config {
            message: e.to_string(),
        })?;
        // Reject a bad stat field list up front rather than on first table access
        config.schema()?;
        Ok(config)
    }

    /// Load configuration from a file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_optional(path)?.ok_or_else(|| LedgerError::Config {
            message: format!("config file not found: {}", path.display()),
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml(&text)
    }

    /// Load the per-user config file if present, otherwise defaults.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => match read_optional(&path)? {
                Some(text) => {
                    debug!(path = %path.display(), "loading config");
                    Self::from_toml(&text)
                }
                None => Ok(Self::default()),
            },
            None => Ok(Self::default()),
        }
    }

    /// Table schema derived from the configured stat fields.
    pub fn schema(&self) -> Result<TableSchema> {
        TableSchema::new(self.stat_fields.iter().cloned())
    }

    /// Resolve the storage root.
    ///
    /// Precedence: explicit argument, then `HOOPS_LEDGER_ROOT`, then the
    /// config file's `root`, then `<data dir>/hoops-ledger/nba`.
    pub fn resolve_root(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(ROOT_ENV_VAR).map(PathBuf::from))
            .or_else(|| self.root.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR).join("nba")))
            .ok_or_else(|| LedgerError::Config {
                message: format!(
                    "no storage root given and {} is not set",
                    ROOT_ENV_VAR
                ),
            })
    }
}

/// `~/.config/hoops-ledger/config.toml` (platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LedgerConfig::default();
        assert_eq!(config.roster_policy, RosterPolicy::Configured);
        assert_eq!(config.stat_fields, vec!["points", "rebounds", "assists"]);
        assert_eq!(config.roster.east.len(), 15);
        assert_eq!(config.roster.west.len(), 15);
        assert!(config
            .roster
            .contains(Conference::East, &TeamSlug::parse("boston_celtics").unwrap()));
        assert!(!config
            .roster
            .contains(Conference::West, &TeamSlug::parse("boston_celtics").unwrap()));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LedgerConfig::from_toml(
            r#"
            roster_policy = "discovered"

            [roster]
            east = ["Boston Celtics"]
            "#,
        )
        .unwrap();

        assert_eq!(config.roster_policy, RosterPolicy::Discovered);
        assert_eq!(config.roster.east.len(), 1);
        assert_eq!(config.roster.east[0].as_str(), "boston_celtics");
        // West not given: falls back to the default roster
        assert_eq!(config.roster.west.len(), 15);
        assert_eq!(config.stat_fields.len(), 3);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = LedgerConfig::from_toml("roster_policy = 42");
        assert!(matches!(result, Err(LedgerError::Config { .. })));

        let result = LedgerConfig::from_toml(r#"stat_fields = ["points", "points"]"#);
        assert!(matches!(result, Err(LedgerError::Config { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "stat_fields = [\"points\", \"steals\"]\n").unwrap();

        let config = LedgerConfig::load(&path).unwrap();
        assert_eq!(config.schema().unwrap().stat_fields(), ["points", "steals"]);

        let missing = LedgerConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(LedgerError::Config { .. })));
    }

    #[test]
    fn test_resolve_root_prefers_explicit_value() {
        let config = LedgerConfig {
            root: Some(PathBuf::from("/from/config")),
            ..LedgerConfig::default()
        };
        let root = config
            .resolve_root(Some(PathBuf::from("/explicit")))
            .unwrap();
        assert_eq!(root, PathBuf::from("/explicit"));
    }
}
