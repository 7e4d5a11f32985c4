//! Contact data sources.
//!
//! This module turns data-source output into engine input:
//! - Snapshot loading from JSON / JSONL files
//! - Row ingestion (dedupe, soft tile limit, starred counting)

pub mod ingest;
pub mod snapshot;

pub use ingest::{ingest_rows, IngestedRows};
pub use snapshot::{load_snapshot, parse_snapshot};
