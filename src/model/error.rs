//! Error types for favtiles.
//!
//! Errors follow a small hierarchy built with `thiserror`, composing via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`SourceError`] - Snapshot reading and row validation failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing initialization failures
//!
//! # Recovery Strategy
//!
//! The engine itself never fails: malformed pin values are sanitized and invalid
//! gestures are no-ops. Errors only arise at the I/O shell, where they are fatal
//! for the CLI.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the contact snapshot.
    #[error("Failed to load contacts: {0}")]
    Source(#[from] SourceError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to initialize logging.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Failed to write output.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// A scripted gesture named an index the list doesn't have.
    #[error("Invalid gesture '{gesture}': {reason}")]
    Gesture {
        /// The gesture as written on the command line.
        gesture: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors encountered when reading a contact snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The snapshot file does not exist.
    #[error("Snapshot not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The snapshot file exists but could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a JSON array of rows.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// Path being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A line of a JSONL snapshot is not a valid row.
    #[error("Invalid row at {path}:{line}: {source}")]
    JsonLine {
        /// Path being parsed.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_converts_into_app_error() {
        let err: AppError = SourceError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        }
        .into();
        assert!(matches!(err, AppError::Source(_)));
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn gesture_error_names_gesture() {
        let err = AppError::Gesture {
            gesture: "9:1".to_string(),
            reason: "index 9 out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid gesture '9:1': index 9 out of range"
        );
    }
}
