//! Raw rows delivered by the contacts data source.
//!
//! Rows are untrusted snapshots: pinned values may be stale, duplicated or out
//! of range. Parse at the boundary, sanitize in the engine.

use super::identifiers::{ContactId, PinnedPosition};
use serde::{Deserialize, Serialize};

/// Kind of phone number on a row, used to pick a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneType {
    /// Label comes from the row's custom label.
    Custom,
    /// Home number.
    Home,
    /// Mobile number.
    Mobile,
    /// Work number.
    Work,
    /// Anything else.
    #[default]
    Other,
}

impl PhoneType {
    /// Resolve the label shown next to the number.
    ///
    /// Custom types use `custom_label` when present, falling back to the generic label.
    pub fn label(self, custom_label: Option<&str>) -> String {
        match (self, custom_label) {
            (PhoneType::Custom, Some(label)) if !label.is_empty() => label.to_string(),
            (PhoneType::Custom, _) => "Custom".to_string(),
            (PhoneType::Home, _) => "Home".to_string(),
            (PhoneType::Mobile, _) => "Mobile".to_string(),
            (PhoneType::Work, _) => "Work".to_string(),
            (PhoneType::Other, _) => "Other".to_string(),
        }
    }
}

/// One phone-number row for a starred or frequent contact.
///
/// A contact with several numbers appears once per number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    /// Contact the number belongs to.
    pub contact_id: ContactId,
    /// Persistence lookup key.
    pub lookup_key: String,
    /// Display name; empty or missing names get a placeholder label.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Starred flag.
    #[serde(default)]
    pub starred: bool,
    /// Raw pinned value from the store.
    #[serde(default)]
    pub pinned: PinnedPosition,
    /// Whether this row's number is the contact's default.
    #[serde(default)]
    pub is_default_number: bool,
    /// Phone number on this row.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Kind of number.
    #[serde(default)]
    pub phone_type: PhoneType,
    /// Custom label for [`PhoneType::Custom`].
    #[serde(default)]
    pub phone_label: Option<String>,
}

impl ContactRow {
    /// Minimal row: unstarred, unpinned, no number.
    pub fn new(contact_id: ContactId, lookup_key: impl Into<String>) -> Self {
        Self {
            contact_id,
            lookup_key: lookup_key.into(),
            display_name: None,
            starred: false,
            pinned: PinnedPosition::UNPINNED,
            is_default_number: false,
            phone_number: None,
            phone_type: PhoneType::Other,
            phone_label: None,
        }
    }

    /// Builder-style display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Builder-style starred flag.
    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    /// Builder-style pinned value.
    pub fn pinned(mut self, pinned: PinnedPosition) -> Self {
        self.pinned = pinned;
        self
    }

    /// Builder-style phone number.
    pub fn number(mut self, number: impl Into<String>, phone_type: PhoneType) -> Self {
        self.phone_number = Some(number.into());
        self.phone_type = phone_type;
        self
    }

    /// Builder-style default-number flag.
    pub fn default_number(mut self, is_default: bool) -> Self {
        self.is_default_number = is_default;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_label_used_for_custom_type() {
        assert_eq!(PhoneType::Custom.label(Some("Boat")), "Boat");
        assert_eq!(PhoneType::Custom.label(Some("")), "Custom");
        assert_eq!(PhoneType::Custom.label(None), "Custom");
    }

    #[test]
    fn custom_label_ignored_for_builtin_types() {
        assert_eq!(PhoneType::Mobile.label(Some("Boat")), "Mobile");
        assert_eq!(PhoneType::Work.label(None), "Work");
    }

    #[test]
    fn row_deserializes_with_defaults() {
        let row: ContactRow =
            serde_json::from_str(r#"{"contact_id": 7, "lookup_key": "k7"}"#).expect("valid row");
        assert_eq!(row.contact_id, ContactId::new(7));
        assert!(!row.starred);
        assert_eq!(row.pinned, PinnedPosition::UNPINNED);
        assert_eq!(row.phone_type, PhoneType::Other);
    }

    #[test]
    fn row_deserializes_pinned_and_phone() {
        let json = r#"{
            "contact_id": 3,
            "lookup_key": "k3",
            "display_name": "Ada",
            "starred": true,
            "pinned": 2,
            "is_default_number": true,
            "phone_number": "555-0100",
            "phone_type": "mobile"
        }"#;
        let row: ContactRow = serde_json::from_str(json).expect("valid row");
        assert_eq!(row.pinned, PinnedPosition::new(2));
        assert_eq!(row.phone_type, PhoneType::Mobile);
        assert_eq!(row.display_name.as_deref(), Some("Ada"));
    }
}
