//! Property-based invariant tests for the windowing computation.
//!
//! These hold for any collection size, scroll position and geometry:
//!
//! 1. The window stays inside `0..item_count` and is never inverted.
//! 2. The window length is bounded by `ceil(viewport / item) + 2 * overscan`.
//! 3. `offset_y == start_index * item_height`.
//! 4. The computation is deterministic.
//! 5. Scrolling further down never moves the window start up.
//! 6. Position 0 starts at row 0; positions near the end reach the last row.
//! 7. A rendered frame has one row per windowed index and a full-height spacer.

use proptest::prelude::*;
use windowed_list::{Geometry, WindowedList, WindowedListOptions, compute_visible_range};

// ── Helpers ─────────────────────────────────────────────────────────────

fn geometry_strategy() -> impl Strategy<Value = (f64, f64, usize)> {
    (1.0f64..=200.0, 1.0f64..=2_000.0, 0usize..=16)
}

fn visible_count(item_height: f64, viewport_height: f64) -> usize {
    (viewport_height / item_height).ceil() as usize
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Bounds, length, offset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_is_bounded_and_offset_matches(
        (item_height, viewport_height, overscan) in geometry_strategy(),
        item_count in 0usize..=100_000,
        scroll in 0.0f64..=10_000_000.0,
    ) {
        let r = compute_visible_range(scroll, item_height, viewport_height, item_count, overscan);

        prop_assert!(r.start_index <= r.end_index);
        prop_assert!(r.end_index <= item_count);
        if let Some(last) = r.last_index() {
            prop_assert!(last < item_count);
        }
        prop_assert!(r.len() <= visible_count(item_height, viewport_height) + 2 * overscan);
        prop_assert_eq!(r.offset_y, r.start_index as f64 * item_height);
        if item_count == 0 {
            prop_assert!(r.is_empty());
            prop_assert_eq!(r.offset_y, 0.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_is_deterministic(
        (item_height, viewport_height, overscan) in geometry_strategy(),
        item_count in 0usize..=10_000,
        scroll in -1_000.0f64..=1_000_000.0,
    ) {
        let a = compute_visible_range(scroll, item_height, viewport_height, item_count, overscan);
        let b = compute_visible_range(scroll, item_height, viewport_height, item_count, overscan);
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Monotonic start
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn start_never_decreases_when_scrolling_down(
        (item_height, viewport_height, overscan) in geometry_strategy(),
        item_count in 1usize..=10_000,
        scroll in 0.0f64..=1_000_000.0,
        delta in 0.0f64..=50_000.0,
    ) {
        let before = compute_visible_range(scroll, item_height, viewport_height, item_count, overscan);
        let after =
            compute_visible_range(scroll + delta, item_height, viewport_height, item_count, overscan);
        prop_assert!(after.start_index >= before.start_index);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Boundaries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn top_starts_at_zero_and_bottom_reaches_last_row(
        item_height in 1u32..=200,
        viewport_height in 1u32..=2_000,
        overscan in 0usize..=16,
        item_count in 1usize..=10_000,
        extra_rows in 0.0f64..=1.0,
    ) {
        // Whole-pixel heights keep `(n * h) / h == n` exact.
        let item_height = f64::from(item_height);
        let viewport_height = f64::from(viewport_height);
        let top = compute_visible_range(0.0, item_height, viewport_height, item_count, overscan);
        prop_assert_eq!(top.start_index, 0);

        // Anywhere from the last row's top down to `overscan` rows further still includes it.
        let last_top = (item_count - 1) as f64 * item_height;
        let scroll = last_top + extra_rows * overscan as f64 * item_height;
        let bottom = compute_visible_range(scroll, item_height, viewport_height, item_count, overscan);
        prop_assert_eq!(bottom.last_index(), Some(item_count - 1));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Rendered frames
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn frame_matches_window(
        (item_height, viewport_height, overscan) in geometry_strategy(),
        item_count in 0usize..=5_000,
        scroll in 0.0f64..=1_000_000.0,
    ) {
        let geometry = Geometry::new(item_height, viewport_height)
            .unwrap()
            .with_overscan(overscan);
        let items: Vec<usize> = (0..item_count).collect();
        let mut list = WindowedList::new(WindowedListOptions::new(geometry));
        list.on_scroll(scroll);

        let frame = list.render(&items, |item, index| {
            assert_eq!(*item, index);
            *item
        });

        prop_assert_eq!(frame.rows.len(), frame.range.len());
        prop_assert_eq!(frame.spacer_height, item_count as f64 * item_height);
        prop_assert_eq!(frame.viewport_height, viewport_height);
        for (i, rendered) in frame.rows.iter().enumerate() {
            prop_assert_eq!(rendered.index, frame.range.start_index + i);
            prop_assert_eq!(rendered.key, rendered.index);
            prop_assert_eq!(rendered.row.height(), item_height);
        }
    }
}
