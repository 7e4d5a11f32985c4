//! Favorites reconciliation engine.
//!
//! Owns the displayed favorites list between reloads and implements the
//! gesture protocol on top of it:
//!
//! - **Reload**: ingest rows, arrange by pinned position, notify the host.
//! - **Drag**: lift a contact, move a placeholder on hover, drop (persisting
//!   the bounded pin reflow) or cancel.
//! - **Swipe to remove**: mark a pending removal, then commit it (unstar and
//!   demote) or undo it.
//!
//! Every operation runs synchronously on the thread driving the UI. Invalid
//! gestures are silent no-ops; nothing here returns an error.

pub mod arrange;
pub mod drag;
pub mod host;
pub mod layout;
pub mod merge;
pub mod reflow;

pub use arrange::{arrange_by_pinned_position, ArrangedList};
pub use drag::DragSession;
pub use host::{NullHost, PersistenceSink, RenderHost};
pub use layout::{classify, RowKind, TileLayout};
pub use merge::{MergedItem, SectionMap, SectionPosition};
pub use reflow::{reflowed_pinned_positions, PinDelta, PinUpdate};

use crate::model::{ContactEntry, ContactId, ContactRow, Tile};
use crate::source::ingest_rows;
use tracing::{debug, info};

/// Tunables for one favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Slots that can hold an explicit pin.
    pub pin_limit: usize,
    /// Frequents stop being read once this many contacts are loaded.
    pub tiles_soft_limit: usize,
    /// Row arithmetic.
    pub layout: TileLayout,
    /// Name shown for contacts without one.
    pub missing_name_label: String,
}

impl EngineConfig {
    /// Default pin limit.
    pub const DEFAULT_PIN_LIMIT: usize = 20;

    /// Default soft limit on loaded contacts.
    pub const DEFAULT_TILES_SOFT_LIMIT: usize = 20;

    /// Default label for nameless contacts.
    pub const DEFAULT_MISSING_NAME_LABEL: &'static str = "(No name)";
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pin_limit: Self::DEFAULT_PIN_LIMIT,
            tiles_soft_limit: Self::DEFAULT_TILES_SOFT_LIMIT,
            layout: TileLayout::default(),
            missing_name_label: Self::DEFAULT_MISSING_NAME_LABEL.to_string(),
        }
    }
}

/// The favorites list and its in-flight gesture state.
///
/// Constructed once per list session and handed to the render host by
/// reference. Notifications go to `H`, durable writes go to `S`.
#[derive(Debug)]
pub struct FavoritesEngine<H, S> {
    config: EngineConfig,
    tiles: Vec<Tile>,
    num_starred: usize,
    num_frequents: usize,
    drag: Option<DragSession>,
    pending_removal: Option<usize>,
    awaiting_remove: bool,
    id_to_keep_in_place: Option<u64>,
    deferred_reload: Option<Vec<ContactRow>>,
    host: H,
    sink: S,
}

impl<H: RenderHost, S: PersistenceSink> FavoritesEngine<H, S> {
    /// Create an engine with an empty list.
    pub fn new(config: EngineConfig, host: H, sink: S) -> Self {
        Self {
            config,
            tiles: Vec::new(),
            num_starred: 0,
            num_frequents: 0,
            drag: None,
            pending_removal: None,
            awaiting_remove: false,
            id_to_keep_in_place: None,
            deferred_reload: None,
            host,
            sink,
        }
    }

    // ===== Reload =====

    /// Replace the list with a fresh batch of rows from the data source.
    ///
    /// While a drag is active the batch is held back and applied when the drag
    /// ends, so the gesture keeps a stable list underneath it. A newer batch
    /// replaces an older held one, and a drop's pin updates are merged into
    /// the held batch before it is applied.
    pub fn reload(&mut self, rows: Vec<ContactRow>) {
        if self.drag.is_some() {
            debug!(rows = rows.len(), "Deferring reload until drag ends");
            self.deferred_reload = Some(rows);
            return;
        }
        self.apply_reload(rows);
    }

    fn apply_reload(&mut self, rows: Vec<ContactRow>) {
        if self.awaiting_remove {
            self.host.cache_offsets_for_dataset_change();
        }

        let ingested = ingest_rows(
            &rows,
            self.config.tiles_soft_limit,
            &self.config.missing_name_label,
        );
        self.num_starred = ingested.num_starred;
        self.num_frequents = ingested.num_frequents;
        self.awaiting_remove = false;

        let arranged = arrange_by_pinned_position(ingested.entries, self.config.pin_limit);
        self.tiles = arranged.into_entries().into_iter().map(Tile::Contact).collect();

        let keep_in_place = self.id_to_keep_in_place.take();
        self.host.on_dataset_changed(keep_in_place.as_slice());

        info!(
            rows = rows.len(),
            contacts = self.tiles.len(),
            starred = self.num_starred,
            frequents = self.num_frequents,
            skipped = ingested.skipped,
            keep_in_place = ?keep_in_place,
            "Reloaded favorites"
        );
    }

    fn apply_deferred_reload(&mut self) {
        if let Some(rows) = self.deferred_reload.take() {
            self.apply_reload(rows);
        }
    }

    // ===== Drag and drop =====

    /// Lift the contact at `index` out of the list, leaving a placeholder.
    ///
    /// Ignored (returns `None`) when a drag is already active, a removal is
    /// pending for this index or awaiting its reload, or `index` doesn't hold
    /// a contact.
    pub fn begin_drag(&mut self, index: usize) -> Option<&DragSession> {
        if self.drag.is_some() {
            debug!(index, "Ignoring drag start: drag already active");
            return None;
        }
        if self.awaiting_remove || self.pending_removal == Some(index) {
            debug!(index, "Ignoring drag start: removal in progress");
            return None;
        }
        let entry = match self.tiles.get(index) {
            Some(Tile::Contact(entry)) => entry.clone(),
            _ => return None,
        };

        self.host.cache_offsets_for_dataset_change();
        self.tiles[index] = Tile::Placeholder { id: entry.id };
        debug!(index, contact_id = %entry.id, "Drag started");
        self.drag = Some(DragSession::new(entry, index));
        self.host.on_dataset_changed(&[]);

        self.drag.as_ref()
    }

    /// Move the placeholder to `new_index`.
    ///
    /// Returns `false` (and leaves the drag where it was) if no drag is
    /// active, the index is unchanged or out of bounds, or it lies at or past
    /// the pin limit.
    pub fn on_hover(&mut self, new_index: usize) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        if new_index == session.hover_index()
            || new_index >= self.tiles.len()
            || new_index >= self.config.pin_limit
        {
            return false;
        }

        self.host.cache_offsets_for_dataset_change();
        let placeholder = self.tiles.remove(session.hover_index());
        self.tiles.insert(new_index, placeholder);
        session.set_hover_index(new_index);
        self.host.on_dataset_changed(&[]);
        true
    }

    /// Drop the dragged contact at the placeholder.
    ///
    /// If the placeholder moved, the contact replaces it in place, the
    /// pin reflow for the slots between the two indices is sent to the sink
    /// and returned, and the contact's row id is kept in place across the
    /// next reload. Otherwise the contact goes back where it came from and
    /// the delta is empty.
    pub fn commit_drop(&mut self) -> PinDelta {
        let Some(session) = self.drag.take() else {
            return PinDelta::default();
        };
        let (dragged, from, to) = session.into_parts();

        let delta = if from != to && to < self.tiles.len() {
            let keep = self.config.layout.adjusted_item_id(dragged.id);
            let dragged_id = dragged.id;
            // Replaced, not re-inserted: the reload that follows the write animates the move.
            self.tiles[to] = Tile::Contact(dragged);
            self.id_to_keep_in_place = Some(keep);
            self.host.cache_offsets_for_dataset_change();

            if to < self.config.pin_limit {
                let delta = reflowed_pinned_positions(&self.tiles, from, to);
                info!(
                    contact_id = %dragged_id,
                    from,
                    to,
                    updates = delta.len(),
                    "Persisting reflowed pin positions"
                );
                self.sink.update_pinned_positions(&delta);
                // A batch held back during the drag predates this write.
                if let Some(rows) = self.deferred_reload.as_mut() {
                    delta.apply_to_rows(rows);
                }
                delta
            } else {
                PinDelta::default()
            }
        } else {
            self.restore(dragged, from, to);
            PinDelta::default()
        };

        self.apply_deferred_reload();
        delta
    }

    /// Abandon the drag and put the contact back where it started.
    ///
    /// Used when the drop lands outside any valid target. Nothing is persisted.
    pub fn cancel_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let (dragged, from, to) = session.into_parts();
        debug!(contact_id = %dragged.id, from, "Drag cancelled");
        self.restore(dragged, from, to);
        self.apply_deferred_reload();
    }

    fn restore(&mut self, dragged: ContactEntry, from: usize, placeholder_at: usize) {
        if placeholder_at < self.tiles.len() {
            self.tiles.remove(placeholder_at);
        }
        let from = from.min(self.tiles.len());
        self.tiles.insert(from, Tile::Contact(dragged));
        self.host.on_dataset_changed(&[]);
    }

    // ===== Swipe to remove =====

    /// Remember `index` for removal without touching the list, so it can be undone.
    pub fn mark_pending_removal(&mut self, index: usize) {
        debug!(index, "Removal pending");
        self.pending_removal = Some(index);
    }

    /// Undo a pending removal. Nothing is persisted.
    pub fn clear_pending_removal(&mut self) {
        self.pending_removal = None;
    }

    /// True when a pending removal points at a slot in the list.
    pub fn has_pending_removal(&self) -> bool {
        self.pending_removal.is_some_and(|i| i < self.tiles.len())
    }

    /// Carry out a pending removal: unstar and demote the contact.
    ///
    /// The list itself changes on the next reload. Returns whether a contact
    /// was removed; the pending index is cleared either way.
    pub fn commit_pending_removal(&mut self) -> bool {
        let pending = self.pending_removal.take();
        let Some(entry) = pending
            .and_then(|i| self.tiles.get(i))
            .and_then(Tile::contact)
        else {
            return false;
        };

        info!(contact_id = %entry.id, "Unstarring and demoting contact");
        self.sink.unstar_and_demote(entry.id, &entry.lookup_key);
        self.awaiting_remove = true;
        true
    }

    /// Swipes are refused while a removal waits for its reload.
    pub fn is_swipe_enabled(&self) -> bool {
        !self.awaiting_remove
    }

    // ===== Queries =====

    /// Displayed slots, including a drag placeholder if one is active.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Ids in display order (placeholders report the dragged id).
    pub fn ids(&self) -> Vec<ContactId> {
        self.tiles.iter().map(Tile::id).collect()
    }

    /// Contact at `index`, unless it is the placeholder.
    pub fn entry(&self, index: usize) -> Option<&ContactEntry> {
        self.tiles.get(index).and_then(Tile::contact)
    }

    /// Displayed slot count.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no contacts are displayed.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Active drag, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// True while a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starred rows in the last reload.
    pub fn num_starred(&self) -> usize {
        self.num_starred
    }

    /// Frequent rows in the last reload.
    pub fn num_frequents(&self) -> usize {
        self.num_frequents
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ===== Rows =====

    /// Rows the host should display.
    pub fn item_count(&self) -> usize {
        self.config.layout.item_count(self.tiles.len())
    }

    /// Kind of row at `position`.
    pub fn row_kind(&self, position: usize) -> RowKind {
        self.config.layout.classify(position, self.tiles.len())
    }

    /// Slots shown on the row at `position`.
    pub fn row_tiles(&self, position: usize) -> &[Tile] {
        let range = self.config.layout.row_range(position, self.tiles.len());
        &self.tiles[range]
    }

    /// Stable id for the row at `position`.
    ///
    /// Tiled rows use their position; regular rows use the contact's adjusted id.
    pub fn item_id(&self, position: usize) -> Option<u64> {
        match self.row_kind(position) {
            RowKind::Tiled => Some(position as u64),
            RowKind::Regular => self
                .row_tiles(position)
                .first()
                .map(|tile| self.config.layout.adjusted_item_id(tile.id())),
        }
    }

    // ===== Collaborators =====

    /// The render host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The render host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The persistence sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The persistence sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
