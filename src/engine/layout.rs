//! Row arithmetic for the favorites list.
//!
//! The first `max_tiled_rows` rows show up to `column_count` contacts each as
//! tiles; every remaining contact gets a regular single-contact row. All
//! functions are pure and take only counts.

use crate::model::ContactId;
use std::ops::Range;

/// How a row of the list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Row of up to `column_count` contact tiles.
    Tiled,
    /// Row showing a single contact.
    Regular,
}

/// Column and tiled-row counts for the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    column_count: usize,
    max_tiled_rows: usize,
}

impl TileLayout {
    /// Tiled rows shown by default.
    pub const DEFAULT_MAX_TILED_ROWS: usize = 1;

    /// Tiles per row by default.
    pub const DEFAULT_COLUMN_COUNT: usize = 4;

    /// Create a layout. A column count of zero is treated as one.
    pub fn new(column_count: usize, max_tiled_rows: usize) -> Self {
        Self {
            column_count: column_count.max(1),
            max_tiled_rows,
        }
    }

    /// Tiles per tiled row.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Maximum number of tiled rows.
    pub fn max_tiled_rows(&self) -> usize {
        self.max_tiled_rows
    }

    /// Contacts that fit in the tiled rows.
    pub fn max_tiled_entries(&self) -> usize {
        self.column_count * self.max_tiled_rows
    }

    /// Tiled rows needed for `entry_count` contacts, capped at `max_tiled_rows`.
    pub fn row_count(&self, entry_count: usize) -> usize {
        if entry_count == 0 {
            return 0;
        }
        let unlimited = (entry_count - 1) / self.column_count + 1;
        unlimited.min(self.max_tiled_rows)
    }

    /// Tiled rows actually present in a list of `total` contacts.
    pub fn tiled_row_count(&self, total: usize) -> usize {
        self.row_count(total.min(self.max_tiled_entries()))
    }

    /// Rows (tiled plus regular) for a list of `total` contacts.
    pub fn item_count(&self, total: usize) -> usize {
        let regular = total.saturating_sub(self.max_tiled_entries());
        regular + self.row_count(total - regular)
    }

    /// Classify the row at `position`.
    pub fn classify(&self, position: usize, total: usize) -> RowKind {
        if position < self.tiled_row_count(total) {
            RowKind::Tiled
        } else {
            RowKind::Regular
        }
    }

    /// Index of the first contact shown on the row at `position`.
    pub fn first_entry_index(&self, position: usize, total: usize) -> usize {
        match self.classify(position, total) {
            RowKind::Tiled => position * self.column_count,
            RowKind::Regular => self.max_tiled_entries() + position - self.max_tiled_rows,
        }
    }

    /// Contact indices shown on the row at `position`, clamped to the list.
    pub fn row_range(&self, position: usize, total: usize) -> Range<usize> {
        let width = match self.classify(position, total) {
            RowKind::Tiled => self.column_count,
            RowKind::Regular => 1,
        };
        let start = self.first_entry_index(position, total).min(total);
        let end = (start + width).min(total);
        start..end
    }

    /// Row holding the contact at `entry_index`.
    pub fn row_index(&self, entry_index: usize) -> usize {
        if entry_index < self.max_tiled_entries() {
            entry_index / self.column_count
        } else {
            entry_index - self.max_tiled_entries() + self.max_tiled_rows
        }
    }

    /// Stable row id for a regular row showing `id`.
    ///
    /// Offset past the tiled row ids (which are their positions). Wraps for
    /// ids within `max_tiled_rows` of `u64::MAX`.
    pub fn adjusted_item_id(&self, id: ContactId) -> u64 {
        id.get().wrapping_add(self.max_tiled_rows as u64)
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLUMN_COUNT, Self::DEFAULT_MAX_TILED_ROWS)
    }
}

/// Classify the row at `index` without building a layout.
pub fn classify(
    index: usize,
    column_count: usize,
    max_tiled_rows: usize,
    total_count: usize,
) -> RowKind {
    TileLayout::new(column_count, max_tiled_rows).classify(index, total_count)
}
