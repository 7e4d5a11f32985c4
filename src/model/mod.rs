//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod contact;
pub mod error;
pub mod identifiers;
pub mod row;

// Re-export for convenience
pub use contact::{ContactEntry, Tile};
pub use error::{AppError, SourceError};
pub use identifiers::{ContactId, InvalidLookupKey, LookupKey, PinnedPosition};
pub use row::{ContactRow, PhoneType};
