//! Test harness for engine acceptance tests.
//!
//! Provides a recording render host and row fixtures so tests can drive the
//! engine through gestures and observe both the list and the notifications.

use crate::engine::{EngineConfig, FavoritesEngine, RenderHost};
use crate::model::{ContactId, ContactRow, PinnedPosition, Tile};
use crate::store::MemoryStore;

/// A notification the engine sent to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Offsets captured before a change.
    CacheOffsets,
    /// List changed, with the row ids to keep in place.
    DatasetChanged(Vec<u64>),
}

/// Host that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    /// Notifications received so far.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Forget recorded notifications.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Ids passed with the most recent dataset-changed notification.
    pub fn last_kept_in_place(&self) -> Option<&[u64]> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::DatasetChanged(ids) => Some(ids.as_slice()),
            HostEvent::CacheOffsets => None,
        })
    }
}

impl RenderHost for RecordingHost {
    fn cache_offsets_for_dataset_change(&mut self) {
        self.events.push(HostEvent::CacheOffsets);
    }

    fn on_dataset_changed(&mut self, ids_in_place: &[u64]) {
        self.events.push(HostEvent::DatasetChanged(ids_in_place.to_vec()));
    }
}

/// Engine wired to a recording host and an in-memory store.
pub type TestEngine = FavoritesEngine<RecordingHost, MemoryStore>;

/// Starred row for contact `id`, pinned at `pinned`.
pub fn starred_row(id: u64, pinned: PinnedPosition) -> ContactRow {
    ContactRow::new(ContactId::new(id), format!("lookup-{}", id))
        .named(format!("Contact {:02}", id))
        .starred(true)
        .pinned(pinned)
}

/// Frequently contacted (not starred) row for contact `id`.
pub fn frequent_row(id: u64) -> ContactRow {
    ContactRow::new(ContactId::new(id), format!("lookup-{}", id)).named(format!("Frequent {:02}", id))
}

/// `count` starred rows with ids `0..count`, each pinned at its own index.
pub fn pinned_rows(count: u64) -> Vec<ContactRow> {
    (0..count)
        .map(|id| starred_row(id, PinnedPosition::at(id as usize)))
        .collect()
}

/// Engine loaded with `rows` through the store, as a live session would be.
pub fn engine_with(rows: Vec<ContactRow>, config: EngineConfig) -> TestEngine {
    let mut engine = FavoritesEngine::new(config, RecordingHost::default(), MemoryStore::new(rows));
    let snapshot = engine.sink().snapshot();
    engine.reload(snapshot);
    engine.host_mut().clear();
    engine
}

/// Reload the engine from its own store.
pub fn reload_from_store(engine: &mut TestEngine) {
    let snapshot = engine.sink().snapshot();
    engine.reload(snapshot);
}

/// Displayed ids as raw numbers (placeholders report the dragged id).
pub fn raw_ids(tiles: &[Tile]) -> Vec<u64> {
    tiles.iter().map(|t| t.id().get()).collect()
}
