//! Pinned-position arrangement.
//!
//! Turns an untrusted batch of entries into a deterministic order: pinned
//! entries land in their slots, unpinned entries fill the gaps in their
//! original order, demoted entries disappear. Pinned values are rewritten to
//! the slot actually occupied, so the pinned prefix is always gap-free and
//! duplicate-free regardless of what the backing store held.

use crate::model::{ContactEntry, ContactId, PinnedPosition};
use std::collections::VecDeque;
use tracing::debug;

/// Entries in display order after an arrangement pass.
///
/// # Invariants
/// - No demoted entries.
/// - `prefix_len <= pin_limit`.
/// - Every entry in the prefix whose pinned value lies within the pin limit
///   sits at exactly that index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrangedList {
    entries: Vec<ContactEntry>,
    prefix_len: usize,
}

impl ArrangedList {
    /// All arranged entries, prefix first.
    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    /// Number of entries placed by the slot-filling pass (at most the pin limit).
    ///
    /// Entries past the prefix are unpinned overflow followed by the remaining
    /// unpinned entries.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// The slot-filled prefix.
    pub fn prefix(&self) -> &[ContactEntry] {
        &self.entries[..self.prefix_len]
    }

    /// Total entries kept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when every input entry was demoted (or there was no input).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<ContactId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Consume into the ordered entries.
    pub fn into_entries(self) -> Vec<ContactEntry> {
        self.entries
    }
}

/// Arrange entries by pinned position.
///
/// 1. Demoted entries are dropped.
/// 2. Entries pinned within `[0, pin_limit)` are ranked by (pinned, name);
///    everything else is reset to `UNPINNED` and keeps its relative order.
/// 3. Slots `0..min(pin_limit, kept)` are filled left to right: the best
///    ranked pinned entry takes slot `i` once its pinned value is `<= i`,
///    otherwise the next unpinned entry does. A slot is skipped when neither
///    applies.
/// 4. Pinned entries that never fit lose their pin and follow the prefix,
///    then the remaining unpinned entries are appended.
pub fn arrange_by_pinned_position(entries: Vec<ContactEntry>, pin_limit: usize) -> ArrangedList {
    let total = entries.len();
    let mut pinned = Vec::new();
    let mut unpinned = VecDeque::new();

    for mut entry in entries {
        if entry.pinned.is_demoted() {
            continue;
        }
        if entry.pinned.is_pinned_within(pin_limit) {
            pinned.push(entry);
        } else {
            entry.pinned = PinnedPosition::UNPINNED;
            unpinned.push_back(entry);
        }
    }

    // Stable: equal (pinned, name) keep input order.
    pinned.sort_by(|a, b| a.pinned.cmp(&b.pinned).then_with(|| a.name.cmp(&b.name)));
    let mut pinned: VecDeque<ContactEntry> = pinned.into();

    let kept = pinned.len() + unpinned.len();
    let max_to_pin = pin_limit.min(kept);
    let mut arranged = Vec::with_capacity(kept);

    for slot in 0..max_to_pin {
        let front_fits = pinned
            .front()
            .and_then(|entry| entry.pinned.slot())
            .is_some_and(|wanted| wanted <= slot);

        if front_fits {
            if let Some(mut entry) = pinned.pop_front() {
                // Index occupied, not `slot`: a skipped slot would leave a gap and break idempotence.
                entry.pinned = PinnedPosition::at(arranged.len());
                arranged.push(entry);
            }
        } else if let Some(entry) = unpinned.pop_front() {
            arranged.push(entry);
        }
    }

    let prefix_len = arranged.len();
    let overflow = pinned.len();

    // Pins beyond the end of the list can't be honored.
    arranged.extend(pinned.into_iter().map(|mut entry| {
        entry.pinned = PinnedPosition::UNPINNED;
        entry
    }));
    arranged.extend(unpinned);

    debug!(
        input = total,
        kept,
        prefix_len,
        overflow,
        pin_limit,
        "Arranged favorites by pinned position"
    );

    ArrangedList {
        entries: arranged,
        prefix_len,
    }
}
