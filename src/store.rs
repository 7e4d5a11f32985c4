//! In-memory contact store.
//!
//! Serves as both the data source (rows for the next reload) and the
//! persistence sink for gestures. Used by the CLI and by tests.

use crate::engine::{PersistenceSink, PinDelta};
use crate::model::{ContactId, ContactRow, LookupKey, PinnedPosition};
use serde::Serialize;
use tracing::debug;

/// A write received from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreWrite {
    /// Pinned slots updated after a drop.
    Pins {
        /// Updates applied.
        updates: PinDelta,
    },
    /// Contact unstarred and demoted after a swipe.
    Demote {
        /// Contact removed from favorites.
        id: ContactId,
    },
}

/// Contact rows held in memory, plus a log of every write applied.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<ContactRow>,
    writes: Vec<StoreWrite>,
}

impl MemoryStore {
    /// Store holding `rows`.
    pub fn new(rows: Vec<ContactRow>) -> Self {
        Self {
            rows,
            writes: Vec::new(),
        }
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[ContactRow] {
        &self.rows
    }

    /// Rows as the data source delivers them: starred first, then frequents,
    /// each group in insertion order.
    pub fn snapshot(&self) -> Vec<ContactRow> {
        let (mut starred, frequent): (Vec<_>, Vec<_>) =
            self.rows.iter().cloned().partition(|row| row.starred);
        starred.extend(frequent);
        starred
    }

    /// Every write applied so far.
    pub fn writes(&self) -> &[StoreWrite] {
        &self.writes
    }

    /// Current pinned value for a contact (from its first row).
    pub fn pinned(&self, id: ContactId) -> Option<PinnedPosition> {
        self.rows
            .iter()
            .find(|row| row.contact_id == id)
            .map(|row| row.pinned)
    }
}

impl PersistenceSink for MemoryStore {
    fn update_pinned_positions(&mut self, delta: &PinDelta) {
        if delta.is_empty() {
            return;
        }
        delta.apply_to_rows(&mut self.rows);
        debug!(updates = delta.len(), "Applied pin updates");
        self.writes.push(StoreWrite::Pins {
            updates: delta.clone(),
        });
    }

    fn unstar_and_demote(&mut self, id: ContactId, lookup_key: &LookupKey) {
        for row in self
            .rows
            .iter_mut()
            .filter(|row| row.lookup_key == lookup_key.as_str())
        {
            row.starred = false;
            row.pinned = PinnedPosition::DEMOTED;
        }
        debug!(contact_id = %id, "Demoted contact");
        self.writes.push(StoreWrite::Demote { id });
    }
}
