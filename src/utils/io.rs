//! File I/O primitives with consistent error handling.

use crate::core::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read the manifest file, distinguishing an absent file from other failures
/// so the caller can map them to different exit codes.
pub fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::NotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })
}

/// Copy the manifest to `<file>.bak` before it is overwritten.
pub fn backup_file(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| Error::Write(e.to_string()))?;
    Ok(backup)
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

/// Overwrite the manifest with the transformed text.
pub fn write_manifest(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| Error::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_maps_absent_file_to_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_manifest(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn backup_copies_original_bytes_next_to_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "{}").unwrap();

        let backup = backup_file(&path).unwrap();
        assert_eq!(backup, dir.path().join("manifest.json.bak"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "{}");
    }

    #[test]
    fn backup_of_absent_file_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let err = backup_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Write(_)));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");

        write_manifest(&path, "{\"a\":1}\n").unwrap();
        assert_eq!(read_manifest(&path).unwrap(), "{\"a\":1}\n");
    }
}
