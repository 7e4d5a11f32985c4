//! Scripted favorites session.
//!
//! Replays gestures against an engine backed by a [`MemoryStore`], reloading
//! from the store after every persisted write the way a live data source
//! would, and reports the final list.

use crate::engine::{EngineConfig, FavoritesEngine, NullHost, RenderHost, RowKind};
use crate::model::{AppError, ContactRow, Tile};
use crate::store::{MemoryStore, StoreWrite};
use serde::Serialize;
use std::str::FromStr;
use tracing::{info, warn};

/// Drag from one index to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    /// Index the drag starts on.
    pub from: usize,
    /// Index the drag hovers over before dropping.
    pub to: usize,
}

impl FromStr for DragGesture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
        let from = from
            .trim()
            .parse()
            .map_err(|e| format!("invalid FROM '{}': {}", from, e))?;
        let to = to
            .trim()
            .parse()
            .map_err(|e| format!("invalid TO '{}': {}", to, e))?;
        Ok(Self { from, to })
    }
}

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Drag and drop.
    Drag(DragGesture),
    /// Swipe away the contact at `index`, optionally undoing it.
    Remove {
        /// Index swiped.
        index: usize,
        /// Press undo instead of committing.
        undo: bool,
    },
}

/// One displayed contact in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileReport {
    /// Index in the list.
    pub index: usize,
    /// Contact id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Pinned value after arrangement.
    pub pinned: String,
    /// Row the contact is shown on.
    pub row: usize,
    /// Whether that row is tiled.
    pub tiled: bool,
    /// Number dialed from the tile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Final state of a scripted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Starred rows in the last reload.
    pub num_starred: usize,
    /// Frequent rows in the last reload.
    pub num_frequents: usize,
    /// Rows the host would render.
    pub item_count: usize,
    /// Contacts in display order.
    pub tiles: Vec<TileReport>,
    /// Writes the store received.
    pub writes: Vec<StoreWrite>,
}

/// Run `gestures` over `rows` and report the resulting list.
///
/// # Errors
///
/// Returns `AppError::Gesture` when a gesture starts on an index that holds
/// no contact. Hovers the engine refuses are not errors: the drop simply
/// lands back where it started.
pub fn run_session(
    rows: Vec<ContactRow>,
    config: EngineConfig,
    gestures: &[Gesture],
) -> Result<SessionReport, AppError> {
    let mut engine = FavoritesEngine::new(config, NullHost, MemoryStore::new(rows));
    let initial = engine.sink().snapshot();
    engine.reload(initial);

    for gesture in gestures {
        apply_gesture(&mut engine, *gesture)?;
    }

    Ok(report(&engine))
}

fn apply_gesture<H: RenderHost>(
    engine: &mut FavoritesEngine<H, MemoryStore>,
    gesture: Gesture,
) -> Result<(), AppError> {
    match gesture {
        Gesture::Drag(drag) => {
            if engine.begin_drag(drag.from).is_none() {
                return Err(AppError::Gesture {
                    gesture: format!("drag {}:{}", drag.from, drag.to),
                    reason: format!("no contact at index {} (list has {})", drag.from, engine.len()),
                });
            }
            if drag.to != drag.from && !engine.on_hover(drag.to) {
                warn!(from = drag.from, to = drag.to, "Drop target refused; contact returns to its slot");
            }
            let delta = engine.commit_drop();
            if !delta.is_empty() {
                let rows = engine.sink().snapshot();
                engine.reload(rows);
            }
        }
        Gesture::Remove { index, undo } => {
            if index >= engine.len() {
                return Err(AppError::Gesture {
                    gesture: format!("remove {}", index),
                    reason: format!("no contact at index {} (list has {})", index, engine.len()),
                });
            }
            engine.mark_pending_removal(index);
            if undo {
                engine.clear_pending_removal();
                info!(index, "Removal undone");
            } else if engine.commit_pending_removal() {
                let rows = engine.sink().snapshot();
                engine.reload(rows);
            }
        }
    }
    Ok(())
}

fn report<H: RenderHost>(engine: &FavoritesEngine<H, MemoryStore>) -> SessionReport {
    let layout = engine.config().layout;
    let tiles = engine
        .tiles()
        .iter()
        .enumerate()
        .filter_map(|(index, tile)| match tile {
            Tile::Contact(entry) => {
                let row = layout.row_index(index);
                Some(TileReport {
                    index,
                    id: entry.id.get(),
                    name: entry.name.clone(),
                    pinned: entry.pinned.to_string(),
                    row,
                    tiled: engine.row_kind(row) == RowKind::Tiled,
                    phone: entry.phone_number.clone(),
                })
            }
            Tile::Placeholder { .. } => None,
        })
        .collect();

    SessionReport {
        num_starred: engine.num_starred(),
        num_frequents: engine.num_frequents(),
        item_count: engine.item_count(),
        tiles,
        writes: engine.sink().writes().to_vec(),
    }
}
