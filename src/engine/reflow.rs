//! Pin reflow after a drag-and-drop reorder.

use crate::model::{ContactId, ContactRow, PinnedPosition, Tile};
use serde::Serialize;

/// New pinned slot for one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinUpdate {
    /// Contact to update.
    pub id: ContactId,
    /// Slot to persist.
    pub pinned: PinnedPosition,
}

/// Batch of pin updates to hand to the persistence sink.
///
/// Empty when a gesture changed nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PinDelta(Vec<PinUpdate>);

impl PinDelta {
    /// Updates in ascending slot order.
    pub fn updates(&self) -> &[PinUpdate] {
        &self.0
    }

    /// Number of updates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there is nothing to persist.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the updates.
    pub fn iter(&self) -> std::slice::Iter<'_, PinUpdate> {
        self.0.iter()
    }

    /// Pinned slot written for `id`, if any.
    pub fn slot_for(&self, id: ContactId) -> Option<PinnedPosition> {
        self.0.iter().find(|u| u.id == id).map(|u| u.pinned)
    }

    /// Write the new slots into raw rows (every row of an updated contact).
    pub fn apply_to_rows(&self, rows: &mut [ContactRow]) {
        for row in rows.iter_mut() {
            if let Some(pinned) = self.slot_for(row.contact_id) {
                row.pinned = pinned;
            }
        }
    }
}

impl<'a> IntoIterator for &'a PinDelta {
    type Item = &'a PinUpdate;
    type IntoIter = std::slice::Iter<'a, PinUpdate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute the pin updates for a contact moved from `old_index` to `new_index`.
///
/// `tiles` is the list after the move. Only slots between the two indices
/// (inclusive) shift, so only they are considered; a slot is written unless
/// the contact there is already pinned at that index.
pub fn reflowed_pinned_positions(tiles: &[Tile], old_index: usize, new_index: usize) -> PinDelta {
    let lower = old_index.min(new_index);
    let upper = old_index.max(new_index);

    let updates = tiles
        .iter()
        .enumerate()
        .skip(lower)
        .take(upper + 1 - lower)
        .filter_map(|(slot, tile)| {
            let target = PinnedPosition::at(slot);
            match tile.contact() {
                Some(entry) if entry.pinned == target => None,
                _ => Some(PinUpdate {
                    id: tile.id(),
                    pinned: target,
                }),
            }
        })
        .collect();

    PinDelta(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactEntry, LookupKey};

    fn tile(id: u64, pinned: PinnedPosition) -> Tile {
        Tile::Contact(
            ContactEntry::new(
                ContactId::new(id),
                format!("C{}", id),
                LookupKey::new(format!("k{}", id)).expect("valid key"),
            )
            .with_pinned(pinned),
        )
    }

    /// Tiles 0..n, each pinned at its own index.
    fn pinned_tiles(n: u64) -> Vec<Tile> {
        (0..n)
            .map(|i| tile(i, PinnedPosition::at(i as usize)))
            .collect()
    }

    #[test]
    fn same_index_only_checks_that_slot() {
        let tiles = pinned_tiles(4);
        let delta = reflowed_pinned_positions(&tiles, 2, 2);
        assert!(delta.is_empty());
    }

    #[test]
    fn moving_down_rewrites_the_window() {
        // Contact 1 moved from index 1 to index 3.
        let mut tiles = pinned_tiles(5);
        let moved = tiles.remove(1);
        tiles.insert(3, moved);

        let delta = reflowed_pinned_positions(&tiles, 1, 3);
        let written: Vec<(u64, i32)> = delta
            .iter()
            .map(|u| (u.id.get(), u.pinned.get()))
            .collect();
        assert_eq!(written, vec![(2, 1), (3, 2), (1, 3)]);
    }

    #[test]
    fn moving_up_rewrites_the_window() {
        let mut tiles = pinned_tiles(5);
        let moved = tiles.remove(4);
        tiles.insert(0, moved);

        let delta = reflowed_pinned_positions(&tiles, 4, 0);
        assert_eq!(delta.len(), 5);
        assert_eq!(delta.slot_for(ContactId::new(4)), Some(PinnedPosition::at(0)));
        assert_eq!(delta.slot_for(ContactId::new(3)), Some(PinnedPosition::at(4)));
    }

    #[test]
    fn entries_already_in_place_are_skipped() {
        let tiles = vec![
            tile(0, PinnedPosition::at(0)),
            tile(1, PinnedPosition::UNPINNED),
            tile(2, PinnedPosition::at(2)),
        ];
        let delta = reflowed_pinned_positions(&tiles, 0, 2);
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.slot_for(ContactId::new(1)), Some(PinnedPosition::at(1)));
    }

    #[test]
    fn slots_outside_window_are_untouched() {
        let tiles: Vec<Tile> = (0..10).map(|i| tile(i, PinnedPosition::UNPINNED)).collect();
        let delta = reflowed_pinned_positions(&tiles, 3, 7);
        let slots: Vec<i32> = delta.iter().map(|u| u.pinned.get()).collect();
        assert_eq!(slots, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn apply_to_rows_updates_every_row_of_a_contact() {
        let tiles = vec![tile(1, PinnedPosition::UNPINNED), tile(2, PinnedPosition::at(1))];
        let delta = reflowed_pinned_positions(&tiles, 0, 1);
        let mut rows = vec![
            ContactRow::new(ContactId::new(1), "k1"),
            ContactRow::new(ContactId::new(1), "k1"),
            ContactRow::new(ContactId::new(3), "k3"),
        ];
        delta.apply_to_rows(&mut rows);
        assert_eq!(rows[0].pinned, PinnedPosition::at(0));
        assert_eq!(rows[1].pinned, PinnedPosition::at(0));
        assert_eq!(rows[2].pinned, PinnedPosition::UNPINNED);
    }

    #[test]
    fn delta_serializes_as_array() {
        let tiles = vec![tile(8, PinnedPosition::UNPINNED)];
        let delta = reflowed_pinned_positions(&tiles, 0, 0);
        let json = serde_json::to_string(&delta).expect("serializable");
        assert_eq!(json, r#"[{"id":8,"pinned":0}]"#);
    }
}
