//! Raw rows to contact entries.

use crate::model::{ContactEntry, ContactId, ContactRow, LookupKey};
use std::collections::HashMap;
use tracing::warn;

/// Contact entries built from one batch of rows, before arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestedRows {
    /// One entry per contact, in row order.
    pub entries: Vec<ContactEntry>,
    /// Rows before the first non-starred row.
    pub num_starred: usize,
    /// Rows from the first non-starred row on.
    pub num_frequents: usize,
    /// Rows dropped because they couldn't be addressed for writes.
    pub skipped: usize,
}

/// Build one entry per contact from the data source's rows.
///
/// Rows arrive starred first, then frequents. Frequents stop being read once
/// `tiles_soft_limit` entries exist; starred contacts are never cut off.
/// Repeated rows for a contact (one per phone number) collapse into the first;
/// unless that row's number is the contact's default, the number is cleared so
/// the host asks which one to call.
pub fn ingest_rows(
    rows: &[ContactRow],
    tiles_soft_limit: usize,
    missing_name_label: &str,
) -> IngestedRows {
    let num_starred = rows.iter().position(|row| !row.starred).unwrap_or(rows.len());
    let num_frequents = rows.len() - num_starred;

    let mut entries: Vec<ContactEntry> = Vec::new();
    let mut seen: HashMap<ContactId, usize> = HashMap::with_capacity(rows.len());
    let mut skipped = 0;

    for (row_index, row) in rows.iter().enumerate() {
        if !row.starred && entries.len() >= tiles_soft_limit {
            break;
        }

        if let Some(&existing) = seen.get(&row.contact_id) {
            if let Some(entry) = entries.get_mut(existing) {
                if !entry.is_default_number {
                    entry.clear_phone();
                }
            }
            continue;
        }

        let lookup_key = match LookupKey::new(row.lookup_key.as_str()) {
            Ok(key) => key,
            Err(err) => {
                warn!(
                    row = row_index,
                    contact_id = %row.contact_id,
                    error = %err,
                    "Skipping contact row"
                );
                skipped += 1;
                continue;
            }
        };

        let name = match row.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => missing_name_label,
        };

        let mut entry = ContactEntry::new(row.contact_id, name, lookup_key)
            .with_pinned(row.pinned)
            .with_favorite(row.starred);
        entry.is_default_number = row.is_default_number;
        if let Some(number) = &row.phone_number {
            entry = entry.with_phone(
                number.as_str(),
                row.phone_type.label(row.phone_label.as_deref()),
            );
        }

        seen.insert(row.contact_id, entries.len());
        entries.push(entry);
    }

    IngestedRows {
        entries,
        num_starred,
        num_frequents,
        skipped,
    }
}
