//! Whole-file access to the document holding the board.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub path: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            path: PathBuf::from("README.md"),
        }
    }
}

/// Read the entire document.
pub fn read_document(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the document in one step: write a sibling `.tmp` file, then
/// rename it over the original.
pub fn write_document(path: &Path, content: &str) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content).map_err(write_err)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    debug!(path = %path.display(), bytes = content.len(), "document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "old").unwrap();

        write_document(&path, "new ✓").unwrap();
        assert_eq!(read_document(&path).unwrap(), "new ✓");
        assert!(!dir.path().join("README.md.tmp").exists());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");
        let err = read_document(&path).unwrap_err();
        assert!(
            matches!(err, StoreError::Read { .. }),
            "expected Read error, got: {err}"
        );
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("README.md");
        let err = write_document(&path, "x").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
