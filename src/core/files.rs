//! File system helpers shared by the table codec and configuration loader.

use crate::error::{LedgerError, Result};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Read a file into a String, treating a missing file as `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::storage(path, e)),
    }
}

/// Replace `path` with `contents`.
///
/// The bytes go to a sibling temporary file first, which is then renamed over
/// the target, so readers see either the old or the new file in full. Parent
/// directories are created as needed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LedgerError::storage(parent, e))?;
    }

    let tmp = temp_path(path);
    let written = fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(contents)?;
        f.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(LedgerError::storage(&tmp, e));
    }

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        LedgerError::storage(path, e)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_optional_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_optional(&dir.path().join("nope.csv")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_atomic_creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("east").join("miami_heat").join("players.csv");

        write_atomic(&path, b"first").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("first"));

        write_atomic(&path, b"second").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("second"));

        // No temp file is left behind
        assert!(!path.with_file_name("players.csv.tmp").exists());
    }

    #[test]
    fn test_write_atomic_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("east");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_atomic(&blocker.join("team").join("players.csv"), b"x");
        assert!(matches!(
            result,
            Err(LedgerError::StorageUnavailable { .. })
        ));
    }
}
