//! Data models for the storage layer

use crate::{
    error::{LedgerError, Result},
    Conference, PlayerId, Position, TeamSlug,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

pub const ID_COLUMN: &str = "id";
pub const NAME_COLUMN: &str = "name";
pub const POSITION_COLUMN: &str = "position";

/// Stat columns used when no configuration overrides them.
pub const DEFAULT_STAT_FIELDS: [&str; 3] = ["points", "rebounds", "assists"];

/// A finite, non-negative statistic.
///
/// Displayed with Rust's shortest round-trip formatting, so a value parsed
/// from its own output is bit-identical and re-serializes to the same text.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StatValue(f64);

impl StatValue {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(LedgerError::invalid_player(format!(
                "stat value must be a finite number, got {}",
                value
            )));
        }
        if value < 0.0 {
            return Err(LedgerError::invalid_player(format!(
                "stat value must not be negative, got {}",
                value
            )));
        }
        // -0.0 would otherwise print as "-0"
        Ok(Self(value + 0.0))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StatValue {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s.trim().parse().map_err(|_| {
            LedgerError::invalid_player(format!("'{}' is not a number", s))
        })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for StatValue {
    type Error = LedgerError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StatValue> for f64 {
    fn from(value: StatValue) -> Self {
        value.0
    }
}

/// Column layout of every player table.
///
/// The header is `id,name,position` followed by the stat fields in
/// configuration order. Header writing and row parsing both go through this
/// one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    stat_fields: Vec<String>,
}

impl TableSchema {
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stat_fields: Vec<String> = Vec::new();
        for field in fields {
            let field: String = field.into();
            let field = field.trim().to_string();
            let valid_chars = !field.is_empty()
                && field
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
            if !valid_chars {
                return Err(LedgerError::Config {
                    message: format!(
                        "stat field '{}' must be lowercase letters, digits or '_'",
                        field
                    ),
                });
            }
            if [ID_COLUMN, NAME_COLUMN, POSITION_COLUMN].contains(&field.as_str()) {
                return Err(LedgerError::Config {
                    message: format!("stat field '{}' clashes with a fixed column", field),
                });
            }
            if stat_fields.contains(&field) {
                return Err(LedgerError::Config {
                    message: format!("stat field '{}' is listed twice", field),
                });
            }
            stat_fields.push(field);
        }
        if stat_fields.is_empty() {
            return Err(LedgerError::Config {
                message: "at least one stat field is required".to_string(),
            });
        }
        Ok(Self { stat_fields })
    }

    pub fn stat_fields(&self) -> &[String] {
        &self.stat_fields
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.stat_fields.iter().any(|f| f == field)
    }

    /// Header row in column order.
    pub fn header(&self) -> Vec<&str> {
        let mut header = vec![ID_COLUMN, NAME_COLUMN, POSITION_COLUMN];
        header.extend(self.stat_fields.iter().map(String::as_str));
        header
    }

    pub fn column_count(&self) -> usize {
        3 + self.stat_fields.len()
    }

    /// Error unless `field` is one of this schema's stat fields.
    pub fn require_field(&self, field: &str) -> Result<()> {
        if self.has_field(field) {
            Ok(())
        } else {
            Err(LedgerError::UnknownStatField {
                field: field.to_string(),
            })
        }
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            stat_fields: DEFAULT_STAT_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One player's row in a team table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub stats: BTreeMap<String, StatValue>,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            stats: BTreeMap::new(),
        }
    }

    pub fn with_stat(mut self, field: impl Into<String>, value: StatValue) -> Self {
        self.stats.insert(field.into(), value);
        self
    }

    pub fn stat(&self, field: &str) -> Option<StatValue> {
        self.stats.get(field).copied()
    }

    /// Check the record against `schema`: non-blank name and exactly the
    /// schema's stat fields.
    pub fn validate(&self, schema: &TableSchema) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::invalid_player("name must not be blank"));
        }
        if let Some(unknown) = self.stats.keys().find(|k| !schema.has_field(k)) {
            return Err(LedgerError::UnknownStatField {
                field: unknown.clone(),
            });
        }
        if let Some(missing) = schema
            .stat_fields()
            .iter()
            .find(|f| !self.stats.contains_key(f.as_str()))
        {
            return Err(LedgerError::invalid_player(format!(
                "missing stat field '{}'",
                missing
            )));
        }
        Ok(())
    }

    pub(crate) fn normalize(&mut self) {
        let trimmed = self.name.trim();
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }
    }
}

/// Partial update of a [`PlayerRecord`]. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub stats: BTreeMap<String, StatValue>,
}

impl PlayerChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn stat(mut self, field: impl Into<String>, value: StatValue) -> Self {
        self.stats.insert(field.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.stats.is_empty()
    }

    pub(crate) fn apply_to(&self, record: &mut PlayerRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(position) = self.position {
            record.position = position;
        }
        for (field, value) in &self.stats {
            record.stats.insert(field.clone(), *value);
        }
    }
}

/// A record together with the team that owns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaguePlayer {
    pub conference: Conference,
    pub team: TeamSlug,
    #[serde(flatten)]
    pub record: PlayerRecord,
}

/// The player holding an extreme value of a stat field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatExtreme {
    pub value: f64,
    pub player_id: PlayerId,
    pub conference: Conference,
    pub team: TeamSlug,
}

/// Aggregates of one stat field.
///
/// `average`, `min` and `max` are `None` when no player contributed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldStats {
    pub field: String,
    pub sum: f64,
    pub average: Option<f64>,
    pub min: Option<StatExtreme>,
    pub max: Option<StatExtreme>,
}

/// What a [`StatsSummary`] covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsScope {
    Team {
        conference: Conference,
        team: TeamSlug,
    },
    Conference {
        conference: Conference,
    },
    League,
}

impl fmt::Display for StatsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsScope::Team { conference, team } => {
                write!(f, "{}/{}", conference.dir_name(), team)
            }
            StatsScope::Conference { conference } => write!(f, "{} conference", conference),
            StatsScope::League => write!(f, "league"),
        }
    }
}

/// Statistics over a team, a conference or the whole league.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub scope: StatsScope,
    pub team_count: usize,
    pub player_count: usize,
    pub fields: Vec<FieldStats>,
    pub warnings: Vec<super::walker::WalkWarning>,
}

impl StatsSummary {
    pub fn field(&self, name: &str) -> Option<&FieldStats> {
        self.fields.iter().find(|f| f.field == name)
    }
}
