//! CSV codec for team player tables.
//!
//! A table is a header row naming each column followed by one row per
//! player. Reading validates the structure against a [`TableSchema`]; any
//! deviation is reported as `MalformedTable` with the offending line.

use super::models::{PlayerRecord, StatValue, TableSchema};
use crate::{
    core::files::write_atomic,
    error::{LedgerError, Result},
    PlayerId, Position,
};
use std::{
    collections::{BTreeMap, HashSet},
    fs,
    io::ErrorKind,
    path::Path,
};
use tracing::debug;

/// The rows of one team table, each remembering the text it was read from.
///
/// Writing a row back emits its source text for every column whose value is
/// unchanged, so untouched values keep their exact spelling (`20.0`, `pg`).
/// Only columns that were modified, and rows that were added, are written in
/// canonical form.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    rows: Vec<TableRow>,
}

#[derive(Debug, Clone)]
struct TableRow {
    record: PlayerRecord,
    source: Option<RowSource>,
}

#[derive(Debug, Clone)]
struct RowSource {
    parsed: PlayerRecord,
    fields: csv::StringRecord,
}

impl PlayerTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.rows.iter().map(|row| &row.record)
    }

    pub fn into_records(self) -> Vec<PlayerRecord> {
        self.rows.into_iter().map(|row| row.record).collect()
    }

    pub fn position_of(&self, player_id: &PlayerId) -> Option<usize> {
        self.rows.iter().position(|row| &row.record.id == player_id)
    }

    pub fn get(&self, index: usize) -> Option<&PlayerRecord> {
        self.rows.get(index).map(|row| &row.record)
    }

    /// Replace the record at `index`, keeping its source text for the
    /// columns `record` leaves unchanged.
    pub fn replace(&mut self, index: usize, record: PlayerRecord) {
        if let Some(row) = self.rows.get_mut(index) {
            row.record = record;
        }
    }

    pub fn push(&mut self, record: PlayerRecord) {
        self.rows.push(TableRow {
            record,
            source: None,
        });
    }

    pub fn remove(&mut self, index: usize) -> PlayerRecord {
        self.rows.remove(index).record
    }
}

impl TableRow {
    fn encode(&self, schema: &TableSchema) -> Vec<String> {
        let record = &self.record;
        let kept = |column: usize, unchanged: bool| -> Option<String> {
            match &self.source {
                Some(source) if unchanged => source.fields.get(column).map(str::to_string),
                _ => None,
            }
        };
        let parsed = self.source.as_ref().map(|source| &source.parsed);

        let mut fields = vec![
            kept(0, parsed.is_some_and(|p| p.id == record.id))
                .unwrap_or_else(|| record.id.to_string()),
            kept(1, parsed.is_some_and(|p| p.name == record.name))
                .unwrap_or_else(|| record.name.clone()),
            kept(2, parsed.is_some_and(|p| p.position == record.position))
                .unwrap_or_else(|| record.position.code().to_string()),
        ];
        for (offset, field) in schema.stat_fields().iter().enumerate() {
            let value = record.stat(field);
            fields.push(
                kept(3 + offset, parsed.is_some_and(|p| p.stat(field) == value))
                    .unwrap_or_else(|| value.unwrap_or_default().to_string()),
            );
        }
        fields
    }
}

/// Read every row of the table at `path`. A missing file is an empty table.
pub fn read_table(path: &Path, schema: &TableSchema) -> Result<PlayerTable> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "table missing, treating as empty");
            return Ok(PlayerTable::default());
        }
        Err(e) => return Err(LedgerError::storage(path, e)),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let header = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();
    let expected = schema.header();
    if header.iter().ne(expected.iter().copied()) {
        return Err(LedgerError::malformed(
            path,
            1,
            format!(
                "header '{}' does not match expected '{}'",
                header.iter().collect::<Vec<_>>().join(","),
                expected.join(",")
            ),
        ));
    }

    let mut table = PlayerTable::default();
    let mut seen = HashSet::new();
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(path, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record =
            parse_row(&row, schema).map_err(|reason| LedgerError::malformed(path, line, reason))?;
        if !seen.insert(record.id.clone()) {
            return Err(LedgerError::malformed(
                path,
                line,
                format!("player id '{}' appears more than once", record.id),
            ));
        }
        table.rows.push(TableRow {
            record: record.clone(),
            source: Some(RowSource {
                parsed: record,
                fields: row,
            }),
        });
    }

    debug!(path = %path.display(), rows = table.len(), "read table");
    Ok(table)
}

/// Replace the table at `path` with `table`, header first.
pub fn write_table(path: &Path, schema: &TableSchema, table: &PlayerTable) -> Result<()> {
    let bytes = encode_table(schema, table).map_err(|e| csv_error(path, e))?;
    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}

fn encode_table(schema: &TableSchema, table: &PlayerTable) -> csv::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(schema.header())?;
    for row in &table.rows {
        writer.write_record(row.encode(schema))?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

fn parse_row(row: &csv::StringRecord, schema: &TableSchema) -> std::result::Result<PlayerRecord, String> {
    if row.len() != schema.column_count() {
        return Err(format!(
            "expected {} fields, found {}",
            schema.column_count(),
            row.len()
        ));
    }

    let id = PlayerId::new(&row[0]).map_err(|_| "empty player id".to_string())?;
    let name = row[1].trim();
    if name.is_empty() {
        return Err(format!("player '{}' has an empty name", id));
    }
    let position: Position = row[2]
        .parse()
        .map_err(|_| format!("unknown position '{}'", &row[2]))?;

    let mut stats = BTreeMap::new();
    for (field, raw) in schema.stat_fields().iter().zip(row.iter().skip(3)) {
        let value: StatValue = raw
            .parse()
            .map_err(|_| format!("field '{}' has non-numeric or negative value '{}'", field, raw))?;
        stats.insert(field.clone(), value);
    }

    Ok(PlayerRecord {
        id,
        name: name.to_string(),
        position,
        stats,
    })
}

fn csv_error(path: &Path, error: csv::Error) -> LedgerError {
    let line = error.position().map(|p| p.line()).unwrap_or(0);
    match error.into_kind() {
        csv::ErrorKind::Io(e) => LedgerError::storage(path, e),
        kind => LedgerError::malformed(path, line, format!("{:?}", kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "id,name,position,points,rebounds,assists\n";

    fn table_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("players.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    fn expect_malformed(contents: &str, needle: &str) {
        let dir = TempDir::new().unwrap();
        let path = table_file(&dir, contents);
        match read_table(&path, &TableSchema::default()) {
            Err(LedgerError::MalformedTable { reason, .. }) => {
                assert!(reason.contains(needle), "reason '{}' lacks '{}'", reason, needle)
            }
            other => panic!("Expected MalformedTable, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_table_is_empty() {
        let dir = TempDir::new().unwrap();
        let table = read_table(&dir.path().join("players.csv"), &TableSchema::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_valid_table() {
        let dir = TempDir::new().unwrap();
        let path = table_file(
            &dir,
            &format!("{HEADER}1,Jayson Tatum,SF,26.9,8.1,4.9\n2,\"Holiday, Jrue\",PG,12.5,5.4,4.8\n"),
        );

        let rows = read_table(&path, &TableSchema::default()).unwrap().into_records();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Jayson Tatum");
        assert_eq!(rows[0].position, Position::SmallForward);
        assert_eq!(rows[0].stat("points").unwrap().get(), 26.9);
        assert_eq!(rows[1].name, "Holiday, Jrue");
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let original = format!("{HEADER}1,\"Holiday, Jrue\",PG,12.5,5.4,4.8\n7,Jaylen Brown,SG,23,5.5,3.6\n");
        let path = table_file(&dir, &original);

        let table = read_table(&path, &TableSchema::default()).unwrap();
        write_table(&path, &TableSchema::default(), &table).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_rewrite_keeps_hand_written_spelling() {
        let dir = TempDir::new().unwrap();
        let original = format!("{HEADER}1,A,pg,20.0,5.50,1e1\n2,B,point guard,07,0,0\n");
        let path = table_file(&dir, &original);

        let table = read_table(&path, &TableSchema::default()).unwrap();
        assert_eq!(table.get(0).unwrap().position, Position::PointGuard);
        assert_eq!(table.get(0).unwrap().stat("assists").unwrap().get(), 10.0);
        write_table(&path, &TableSchema::default(), &table).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_rewrite_canonicalizes_only_changed_columns() {
        let dir = TempDir::new().unwrap();
        let path = table_file(&dir, &format!("{HEADER}1,A,pg,20.0,5.50,1e1\n"));

        let mut table = read_table(&path, &TableSchema::default()).unwrap();
        let mut record = table.get(0).unwrap().clone();
        record.stats.insert("rebounds".to_string(), StatValue::new(6.25).unwrap());
        table.replace(0, record);
        table.push(
            PlayerRecord::new(PlayerId::new("2").unwrap(), "B", Position::Center)
                .with_stat("points", StatValue::new(20.0).unwrap())
                .with_stat("rebounds", StatValue::default())
                .with_stat("assists", StatValue::new(1.5).unwrap()),
        );
        write_table(&path, &TableSchema::default(), &table).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{HEADER}1,A,pg,20.0,6.25,1e1\n2,B,C,20,0,1.5\n")
        );
    }

    #[test]
    fn test_field_count_mismatch() {
        expect_malformed(&format!("{HEADER}1,A,PG,20,5\n"), "expected 6 fields, found 5");
    }

    #[test]
    fn test_non_numeric_stat() {
        expect_malformed(&format!("{HEADER}1,A,PG,twenty,5,5\n"), "value 'twenty'");
        expect_malformed(&format!("{HEADER}1,A,PG,-3,5,5\n"), "negative value '-3'");
    }

    #[test]
    fn test_header_mismatch() {
        expect_malformed("id,name,position,points,assists,rebounds\n", "does not match");
        expect_malformed("", "does not match");
    }

    #[test]
    fn test_duplicate_ids_and_bad_positions() {
        expect_malformed(&format!("{HEADER}1,A,PG,1,1,1\n1,B,C,2,2,2\n"), "more than once");
        expect_malformed(&format!("{HEADER}1,A,QB,1,1,1\n"), "unknown position 'QB'");
        expect_malformed(&format!("{HEADER},A,PG,1,1,1\n"), "empty player id");
    }

    #[test]
    fn test_malformed_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = table_file(&dir, &format!("{HEADER}1,A,PG,1,1,1\n2,B,PG,oops,1,1\n"));
        match read_table(&path, &TableSchema::default()) {
            Err(LedgerError::MalformedTable { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected MalformedTable, got {other:?}"),
        }
    }
}
