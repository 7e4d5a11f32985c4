//! In-flight drag gesture state.

use crate::model::ContactEntry;

/// A contact lifted out of the list by a drag gesture.
///
/// Created when the drag starts, moved on each hover, consumed when the drag
/// is dropped or cancelled. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    dragged: ContactEntry,
    from_index: usize,
    hover_index: usize,
}

impl DragSession {
    pub(crate) fn new(dragged: ContactEntry, from_index: usize) -> Self {
        Self {
            dragged,
            from_index,
            hover_index: from_index,
        }
    }

    /// The contact being dragged.
    pub fn dragged(&self) -> &ContactEntry {
        &self.dragged
    }

    /// Index the contact was lifted from.
    pub fn from_index(&self) -> usize {
        self.from_index
    }

    /// Index currently holding the placeholder.
    pub fn hover_index(&self) -> usize {
        self.hover_index
    }

    /// True when the placeholder has left its starting slot.
    pub fn has_moved(&self) -> bool {
        self.hover_index != self.from_index
    }

    pub(crate) fn set_hover_index(&mut self, index: usize) {
        self.hover_index = index;
    }

    pub(crate) fn into_parts(self) -> (ContactEntry, usize, usize) {
        (self.dragged, self.from_index, self.hover_index)
    }
}
