//! Property-based tests for the drag and removal gestures.
//!
//! Drives a harness engine with arbitrary hover sequences and checks what the
//! list and the store look like afterwards.

use crate::engine::EngineConfig;
use crate::model::PinnedPosition;
use crate::test_harness::{
    engine_with, frequent_row, pinned_rows, raw_ids, reload_from_store, starred_row,
};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

/// Starred rows with scattered pins followed by a few frequents.
fn arb_rows() -> impl Strategy<Value = Vec<crate::model::ContactRow>> {
    (
        prop::collection::vec(prop::option::of(0usize..12), 1..12),
        0u64..4,
    )
        .prop_map(|(pins, frequents)| {
            let mut rows: Vec<_> = pins
                .into_iter()
                .enumerate()
                .map(|(i, pin)| {
                    let pinned = pin.map_or(PinnedPosition::UNPINNED, PinnedPosition::at);
                    starred_row(i as u64, pinned)
                })
                .collect();
            rows.extend((0..frequents).map(|i| frequent_row(100 + i)));
            rows
        })
}

/// Starred rows already stored at their displayed slots, then frequents.
fn arb_settled_rows() -> impl Strategy<Value = Vec<crate::model::ContactRow>> {
    (1u64..12, 0u64..4).prop_map(|(starred, frequents)| {
        let mut rows = pinned_rows(starred);
        rows.extend((0..frequents).map(|i| frequent_row(100 + i)));
        rows
    })
}

fn small_config() -> EngineConfig {
    EngineConfig {
        pin_limit: 8,
        ..EngineConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn cancel_restores_list_after_any_hovers(
        rows in arb_rows(),
        from_seed in any::<prop::sample::Index>(),
        hovers in prop::collection::vec(0usize..16, 0..6),
    ) {
        let mut engine = engine_with(rows, small_config());
        let before = raw_ids(engine.tiles());
        let from = from_seed.index(before.len());

        prop_assert!(engine.begin_drag(from).is_some());
        for hover in hovers {
            engine.on_hover(hover);
        }
        engine.cancel_drag();

        prop_assert_eq!(raw_ids(engine.tiles()), before);
        prop_assert!(engine.sink().writes().is_empty());
    }

    #[test]
    fn drop_only_rewrites_slots_between_indices(
        rows in arb_rows(),
        from_seed in any::<prop::sample::Index>(),
        to in 0usize..16,
    ) {
        let mut engine = engine_with(rows, small_config());
        let from = from_seed.index(engine.len());

        engine.begin_drag(from);
        let moved = engine.on_hover(to);
        let delta = engine.commit_drop();

        if !moved {
            prop_assert!(delta.is_empty());
        }
        let lower = from.min(to);
        let upper = from.max(to);
        for update in &delta {
            let slot = update.pinned.slot();
            prop_assert!(slot.is_some_and(|s| (lower..=upper).contains(&s)));
            prop_assert_eq!(engine.tiles()[slot.unwrap_or_default()].id(), update.id);
        }
        prop_assert!(engine.tiles().iter().all(|t| !t.is_placeholder()));
    }

    #[test]
    fn drop_then_reload_shows_dropped_order(
        rows in arb_settled_rows(),
        from_seed in any::<prop::sample::Index>(),
        to in 0usize..8,
    ) {
        let mut engine = engine_with(rows, small_config());
        let from = from_seed.index(engine.len());

        engine.begin_drag(from);
        engine.on_hover(to);
        engine.commit_drop();
        let dropped = raw_ids(engine.tiles());

        reload_from_store(&mut engine);
        prop_assert_eq!(raw_ids(engine.tiles()), dropped);
    }

    #[test]
    fn removal_drops_exactly_one_contact(
        rows in arb_rows(),
        index_seed in any::<prop::sample::Index>(),
    ) {
        let mut engine = engine_with(rows, small_config());
        let before = raw_ids(engine.tiles());
        let index = index_seed.index(before.len());

        engine.mark_pending_removal(index);
        prop_assert!(engine.commit_pending_removal());
        reload_from_store(&mut engine);

        let mut expected = before.clone();
        let removed = expected.remove(index);
        let after = raw_ids(engine.tiles());
        prop_assert!(!after.contains(&removed));
        prop_assert_eq!(after.len(), expected.len());
    }
}
