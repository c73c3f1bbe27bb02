//! CRUD operations on one team's player table

use super::{
    models::{PlayerChanges, PlayerRecord, TableSchema},
    table::{read_table, write_table, PlayerTable},
};
use crate::{
    core::paths::TeamLocation,
    error::{LedgerError, Result},
    PlayerId,
};
use tracing::info;

/// Record store for per-team player tables.
///
/// Every mutation reads the whole table, applies the change in memory and
/// rewrites the file. A failed call leaves the table as it was. Values the
/// mutation does not touch keep their stored spelling.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    schema: TableSchema,
}

impl PlayerStore {
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Append a new player. Creates the team's table if it does not exist.
    pub fn create(&self, location: &TeamLocation, mut record: PlayerRecord) -> Result<PlayerRecord> {
        record.normalize();
        record.validate(&self.schema)?;

        let path = location.table_path();
        let mut table = read_table(&path, &self.schema)?;
        if table.position_of(&record.id).is_some() {
            return Err(LedgerError::DuplicatePlayer {
                player_id: record.id.to_string(),
                team: location.to_string(),
            });
        }

        table.push(record.clone());
        write_table(&path, &self.schema, &table)?;
        info!(team = %location, player_id = %record.id, "created player");
        Ok(record)
    }

    /// All players of the team in table order.
    pub fn read_all(&self, location: &TeamLocation) -> Result<Vec<PlayerRecord>> {
        read_table(&location.table_path(), &self.schema).map(PlayerTable::into_records)
    }

    /// A single player by id.
    pub fn read(&self, location: &TeamLocation, player_id: &PlayerId) -> Result<PlayerRecord> {
        let table = read_table(&location.table_path(), &self.schema)?;
        let found = table
            .records()
            .find(|r| &r.id == player_id)
            .cloned()
            .ok_or_else(|| not_found(location, player_id));
        found
    }

    /// Apply `changes` to one player and persist. Returns the updated record.
    pub fn update(
        &self,
        location: &TeamLocation,
        player_id: &PlayerId,
        changes: &PlayerChanges,
    ) -> Result<PlayerRecord> {
        if let Some(field) = changes.stats.keys().find(|f| !self.schema.has_field(f)) {
            return Err(LedgerError::UnknownStatField {
                field: field.clone(),
            });
        }

        let path = location.table_path();
        let mut table = read_table(&path, &self.schema)?;
        let (index, mut updated) = table
            .position_of(player_id)
            .and_then(|index| table.get(index).map(|r| (index, r.clone())))
            .ok_or_else(|| not_found(location, player_id))?;

        changes.apply_to(&mut updated);
        updated.normalize();
        updated.validate(&self.schema)?;
        table.replace(index, updated.clone());

        write_table(&path, &self.schema, &table)?;
        info!(team = %location, player_id = %player_id, "updated player");
        Ok(updated)
    }

    /// Remove one player, keeping the remaining rows in order. Returns the
    /// removed record.
    pub fn delete(&self, location: &TeamLocation, player_id: &PlayerId) -> Result<PlayerRecord> {
        let path = location.table_path();
        let mut table = read_table(&path, &self.schema)?;
        let index = table
            .position_of(player_id)
            .ok_or_else(|| not_found(location, player_id))?;

        let removed = table.remove(index);
        write_table(&path, &self.schema, &table)?;
        info!(team = %location, player_id = %player_id, "deleted player");
        Ok(removed)
    }

    /// Write an empty table (header only) unless one already exists.
    pub fn init_table(&self, location: &TeamLocation) -> Result<()> {
        if location.has_table() {
            return Ok(());
        }
        write_table(&location.table_path(), &self.schema, &PlayerTable::default())?;
        info!(team = %location, "initialized table");
        Ok(())
    }
}

fn not_found(location: &TeamLocation, player_id: &PlayerId) -> LedgerError {
    LedgerError::PlayerNotFound {
        player_id: player_id.to_string(),
        team: location.to_string(),
    }
}
