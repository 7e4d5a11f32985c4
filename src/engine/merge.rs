//! Positional merge of two list sections.
//!
//! The favorites screen shows one section above another (e.g. a recent-calls
//! shortcut above the tiles). The host sees one flat list; this maps flat
//! positions to section-local indices and back.

/// A flat position resolved to its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPosition {
    /// Index within the first section.
    First(usize),
    /// Index within the second section.
    Second(usize),
}

/// An item borrowed from one of the two merged sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergedItem<'a, A, B> {
    /// Item from the first section.
    First(&'a A),
    /// Item from the second section.
    Second(&'a B),
}

/// Index translation for two sections laid out back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionMap {
    first_len: usize,
    second_len: usize,
}

impl SectionMap {
    /// Map for sections of the given sizes.
    pub fn new(first_len: usize, second_len: usize) -> Self {
        Self {
            first_len,
            second_len,
        }
    }

    /// Map for two concrete sections.
    pub fn for_sections<A, B>(first: &[A], second: &[B]) -> Self {
        Self::new(first.len(), second.len())
    }

    /// Items in the merged list.
    pub fn len(&self) -> usize {
        self.first_len + self.second_len
    }

    /// True when both sections are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a flat position; `None` past the end.
    pub fn locate(&self, position: usize) -> Option<SectionPosition> {
        if position < self.first_len {
            Some(SectionPosition::First(position))
        } else if position < self.len() {
            Some(SectionPosition::Second(position - self.first_len))
        } else {
            None
        }
    }

    /// Flat position of a section-local index; `None` if the index is out of range.
    pub fn position_of(&self, section: SectionPosition) -> Option<usize> {
        match section {
            SectionPosition::First(i) if i < self.first_len => Some(i),
            SectionPosition::Second(i) if i < self.second_len => Some(self.first_len + i),
            _ => None,
        }
    }

    /// Borrow the item at a flat position.
    pub fn item<'a, A, B>(
        &self,
        first: &'a [A],
        second: &'a [B],
        position: usize,
    ) -> Option<MergedItem<'a, A, B>> {
        match self.locate(position)? {
            SectionPosition::First(i) => first.get(i).map(MergedItem::First),
            SectionPosition::Second(i) => second.get(i).map(MergedItem::Second),
        }
    }
}
