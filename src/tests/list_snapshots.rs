//! Snapshot tests for the row layout the host renders.
//!
//! Renders each row as text so layout changes show up as readable diffs.

use crate::engine::{EngineConfig, RowKind};
use crate::model::Tile;
use crate::test_harness::{engine_with, frequent_row, pinned_rows, TestEngine};

// ===== Test Helpers =====

fn tile_label(tile: &Tile) -> String {
    match tile {
        Tile::Contact(entry) => entry.name.clone(),
        Tile::Placeholder { .. } => "____".to_string(),
    }
}

/// One line per row: its kind, then the tiles on it.
fn render_rows(engine: &TestEngine) -> String {
    (0..engine.item_count())
        .map(|position| {
            let kind = match engine.row_kind(position) {
                RowKind::Tiled => "tiled",
                RowKind::Regular => "regular",
            };
            let tiles: Vec<String> = engine.row_tiles(position).iter().map(tile_label).collect();
            format!("{:<7} | {}", kind, tiles.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_engine() -> TestEngine {
    let mut rows = pinned_rows(6);
    rows.push(frequent_row(10));
    engine_with(rows, EngineConfig::default())
}

#[test]
fn snapshot_settled_list() {
    let engine = sample_engine();
    insta::assert_snapshot!(render_rows(&engine), @r"
    tiled   | Contact 00, Contact 01, Contact 02, Contact 03
    regular | Contact 04
    regular | Contact 05
    regular | Frequent 10
    ");
}

#[test]
fn snapshot_list_mid_drag() {
    let mut engine = sample_engine();
    engine.begin_drag(1);
    engine.on_hover(5);
    insta::assert_snapshot!(render_rows(&engine), @r"
    tiled   | Contact 00, Contact 02, Contact 03, Contact 04
    regular | Contact 05
    regular | ____
    regular | Frequent 10
    ");
}
