//! Collaborators the engine talks to.
//!
//! The engine owns list state only. Pixels and animation belong to the
//! [`RenderHost`]; durable writes belong to the [`PersistenceSink`]. Both are
//! fire-and-forget from the engine's point of view.

use super::reflow::PinDelta;
use crate::model::{ContactId, LookupKey};

/// Receives list-change notifications so it can animate them.
pub trait RenderHost {
    /// Called before the list changes, so current row offsets can be captured.
    fn cache_offsets_for_dataset_change(&mut self);

    /// Called after the list changed.
    ///
    /// `ids_in_place` names row ids that must not visually move (the contact
    /// just dropped by a drag).
    fn on_dataset_changed(&mut self, ids_in_place: &[u64]);
}

/// Accepts durable writes produced by gestures.
pub trait PersistenceSink {
    /// Persist new pinned slots after a drop.
    fn update_pinned_positions(&mut self, delta: &PinDelta);

    /// Unstar a contact and pin it at the demoted sentinel, hiding it from favorites.
    fn unstar_and_demote(&mut self, id: ContactId, lookup_key: &LookupKey);
}

/// Host that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl RenderHost for NullHost {
    fn cache_offsets_for_dataset_change(&mut self) {}

    fn on_dataset_changed(&mut self, _ids_in_place: &[u64]) {}
}

impl<T: RenderHost + ?Sized> RenderHost for &mut T {
    fn cache_offsets_for_dataset_change(&mut self) {
        (**self).cache_offsets_for_dataset_change();
    }

    fn on_dataset_changed(&mut self, ids_in_place: &[u64]) {
        (**self).on_dataset_changed(ids_in_place);
    }
}

impl<T: PersistenceSink + ?Sized> PersistenceSink for &mut T {
    fn update_pinned_positions(&mut self, delta: &PinDelta) {
        (**self).update_pinned_positions(delta);
    }

    fn unstar_and_demote(&mut self, id: ContactId, lookup_key: &LookupKey) {
        (**self).unstar_and_demote(id, lookup_key);
    }
}
