//! Favorite contact entries and the tiles that display them.

use super::identifiers::{ContactId, LookupKey, PinnedPosition};
use serde::Serialize;

/// One favorite or frequent contact row, built fresh on every reload.
///
/// Only `pinned` is rewritten after construction, by the arrangement pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEntry {
    /// Stable contact identifier.
    pub id: ContactId,
    /// Display name shown on the tile.
    pub name: String,
    /// Pinned slot as currently known.
    pub pinned: PinnedPosition,
    /// Whether the contact is starred.
    pub is_favorite: bool,
    /// Whether `phone_number` is the contact's default number.
    pub is_default_number: bool,
    /// Number dialed from the tile. Cleared when the contact has several numbers and no default.
    pub phone_number: Option<String>,
    /// Label for `phone_number` ("Mobile", "Work", ...).
    pub phone_label: Option<String>,
    /// Reference the persistence sink uses for writes.
    pub lookup_key: LookupKey,
}

impl ContactEntry {
    /// Create an unpinned, non-starred entry with no phone number.
    pub fn new(id: ContactId, name: impl Into<String>, lookup_key: LookupKey) -> Self {
        Self {
            id,
            name: name.into(),
            pinned: PinnedPosition::UNPINNED,
            is_favorite: false,
            is_default_number: false,
            phone_number: None,
            phone_label: None,
            lookup_key,
        }
    }

    /// Builder-style pinned position.
    pub fn with_pinned(mut self, pinned: PinnedPosition) -> Self {
        self.pinned = pinned;
        self
    }

    /// Builder-style starred flag.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Builder-style phone number and label.
    pub fn with_phone(mut self, number: impl Into<String>, label: impl Into<String>) -> Self {
        self.phone_number = Some(number.into());
        self.phone_label = Some(label.into());
        self
    }

    /// Drop the number and label so the host asks which number to call.
    pub fn clear_phone(&mut self) {
        self.phone_number = None;
        self.phone_label = None;
    }
}

/// A displayed slot in the favorites list.
///
/// During a drag the lifted contact's slot is held by a `Placeholder` carrying
/// the contact's id, so the host can animate the gap as the same item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tile {
    /// A contact shown in this slot.
    Contact(ContactEntry),
    /// Blank drop target for the contact being dragged.
    Placeholder {
        /// Id of the dragged contact.
        id: ContactId,
    },
}

impl Tile {
    /// Contact id shown by this slot, placeholder or not.
    pub fn id(&self) -> ContactId {
        match self {
            Tile::Contact(entry) => entry.id,
            Tile::Placeholder { id } => *id,
        }
    }

    /// The contact in this slot, if it isn't a placeholder.
    pub fn contact(&self) -> Option<&ContactEntry> {
        match self {
            Tile::Contact(entry) => Some(entry),
            Tile::Placeholder { .. } => None,
        }
    }

    /// True for the drag placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Tile::Placeholder { .. })
    }
}

impl From<ContactEntry> for Tile {
    fn from(entry: ContactEntry) -> Self {
        Tile::Contact(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> ContactEntry {
        ContactEntry::new(
            ContactId::new(id),
            format!("Contact {}", id),
            LookupKey::new(format!("key-{}", id)).expect("valid key"),
        )
    }

    #[test]
    fn new_entry_is_unpinned() {
        assert_eq!(entry(1).pinned, PinnedPosition::UNPINNED);
    }

    #[test]
    fn clear_phone_drops_number_and_label() {
        let mut e = entry(1).with_phone("555-0100", "Mobile");
        e.clear_phone();
        assert_eq!(e.phone_number, None);
        assert_eq!(e.phone_label, None);
    }

    #[test]
    fn placeholder_carries_dragged_id() {
        let tile = Tile::Placeholder {
            id: ContactId::new(9),
        };
        assert_eq!(tile.id(), ContactId::new(9));
        assert!(tile.is_placeholder());
        assert!(tile.contact().is_none());
    }

    #[test]
    fn contact_tile_exposes_entry() {
        let tile = Tile::from(entry(3));
        assert_eq!(tile.id(), ContactId::new(3));
        assert!(!tile.is_placeholder());
        assert_eq!(tile.contact().map(|c| c.name.as_str()), Some("Contact 3"));
    }
}
