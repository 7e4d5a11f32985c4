//! Core identifier newtypes with smart constructors.
//!
//! Raw constructors are never exported for validated types - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable contact identifier from the data source. Always non-negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Create a new ContactId from a raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ContactId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference the persistence sink uses to address a contact.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LookupKey(String);

impl LookupKey {
    /// Smart constructor: validates non-empty lookup key
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidLookupKey> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidLookupKey::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pinned slot recorded for a contact in the backing store.
///
/// Values in `[0, pin_limit)` are explicit pins. Two sentinels exist:
/// [`PinnedPosition::UNPINNED`] (no pin) and [`PinnedPosition::DEMOTED`]
/// (hidden from favorites). Anything at or below `DEMOTED` counts as demoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnedPosition(i32);

impl PinnedPosition {
    /// Sentinel for "no pin".
    pub const UNPINNED: Self = Self(i32::MAX);

    /// Sentinel for "explicitly hidden from the favorites list".
    pub const DEMOTED: Self = Self(-1);

    /// Wrap a raw store value. Any value is accepted; classification happens on read.
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Pin at a list slot, saturating slots that don't fit in the store's integer width.
    pub fn at(slot: usize) -> Self {
        Self(i32::try_from(slot).unwrap_or(i32::MAX - 1))
    }

    /// Get the raw store value.
    pub fn get(&self) -> i32 {
        self.0
    }

    /// True for the demoted sentinel and any value below it.
    pub fn is_demoted(&self) -> bool {
        self.0 <= Self::DEMOTED.0
    }

    /// True when the value is an explicit pin below `pin_limit`.
    pub fn is_pinned_within(&self, pin_limit: usize) -> bool {
        self.slot().is_some_and(|slot| slot < pin_limit)
    }

    /// The slot this position names, if it is non-negative and not the unpinned sentinel.
    pub fn slot(&self) -> Option<usize> {
        if *self == Self::UNPINNED {
            return None;
        }
        usize::try_from(self.0).ok()
    }
}

impl Default for PinnedPosition {
    fn default() -> Self {
        Self::UNPINNED
    }
}

impl fmt::Display for PinnedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UNPINNED => f.write_str("unpinned"),
            p if p.is_demoted() => f.write_str("demoted"),
            Self(raw) => write!(f, "{}", raw),
        }
    }
}

// ===== Error Types =====

/// Rejected lookup key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLookupKey {
    /// Lookup keys are used to address writes and cannot be empty.
    #[error("Lookup key cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_key_rejects_empty_string() {
        assert_eq!(LookupKey::new(""), Err(InvalidLookupKey::Empty));
    }

    #[test]
    fn lookup_key_as_str_returns_original() {
        let key = LookupKey::new("0r1-3B2D4F").expect("valid key");
        assert_eq!(key.as_str(), "0r1-3B2D4F");
        assert_eq!(key.to_string(), "0r1-3B2D4F");
    }

    #[test]
    fn demoted_covers_all_negative_values() {
        assert!(PinnedPosition::DEMOTED.is_demoted());
        assert!(PinnedPosition::new(-7).is_demoted());
        assert!(!PinnedPosition::new(0).is_demoted());
        assert!(!PinnedPosition::UNPINNED.is_demoted());
    }

    #[test]
    fn pinned_within_limit_is_half_open() {
        assert!(PinnedPosition::new(0).is_pinned_within(20));
        assert!(PinnedPosition::new(19).is_pinned_within(20));
        assert!(!PinnedPosition::new(20).is_pinned_within(20));
        assert!(!PinnedPosition::UNPINNED.is_pinned_within(20));
        assert!(!PinnedPosition::DEMOTED.is_pinned_within(20));
    }

    #[test]
    fn slot_is_none_for_sentinels() {
        assert_eq!(PinnedPosition::UNPINNED.slot(), None);
        assert_eq!(PinnedPosition::DEMOTED.slot(), None);
        assert_eq!(PinnedPosition::new(4).slot(), Some(4));
    }

    #[test]
    fn display_names_sentinels() {
        assert_eq!(PinnedPosition::UNPINNED.to_string(), "unpinned");
        assert_eq!(PinnedPosition::DEMOTED.to_string(), "demoted");
        assert_eq!(PinnedPosition::at(3).to_string(), "3");
    }

    #[test]
    fn default_position_is_unpinned() {
        assert_eq!(PinnedPosition::default(), PinnedPosition::UNPINNED);
    }
}
