//! Contact snapshots on disk.
//!
//! A snapshot is either a JSON array of rows or JSONL with one row per line.

use crate::model::{ContactRow, SourceError};
use std::path::{Path, PathBuf};

/// Read and parse a snapshot file.
///
/// # Errors
///
/// Returns `SourceError::FileNotFound` if the file does not exist,
/// `SourceError::Io` if it cannot be read, and `SourceError::Json` /
/// `SourceError::JsonLine` if it doesn't contain valid rows.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<ContactRow>, SourceError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SourceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_snapshot(&contents, path)
}

/// Parse snapshot text. `path` is only used for error context.
///
/// # Errors
///
/// Returns `SourceError::Json` for a malformed array and
/// `SourceError::JsonLine` for a malformed JSONL line.
pub fn parse_snapshot(contents: &str, path: &Path) -> Result<Vec<ContactRow>, SourceError> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents).map_err(|source| SourceError::Json {
            path: PathBuf::from(path),
            source,
        });
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| SourceError::JsonLine {
                path: PathBuf::from(path),
                line: index + 1,
                source,
            })
        })
        .collect()
}
