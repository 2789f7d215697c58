use core::cmp;

use crate::VisibleRange;
use crate::geometry::{ceil_to_count, floor_to_index};

/// Maps a scroll position and fixed geometry to the window of rows to materialize.
///
/// The window starts `overscan` rows above the first row intersecting the viewport and spans
/// `ceil(viewport_height / item_height) + 2 * overscan` rows, clamped to `0..item_count`. Its
/// length therefore never depends on `item_count`, and the computation is constant-time.
///
/// `scroll_position` need not be pre-clamped:
/// - NaN and negative positions behave like `0`.
/// - Positions past the end of the content yield the empty window at `item_count`.
///
/// Heights must be finite and positive (see [`crate::Geometry`]). Violations assert in debug
/// builds and produce an empty window otherwise.
pub fn compute_visible_range(
    scroll_position: f64,
    item_height: f64,
    viewport_height: f64,
    item_count: usize,
    overscan: usize,
) -> VisibleRange {
    if !(item_height > 0.0 && item_height.is_finite())
        || !(viewport_height > 0.0 && viewport_height.is_finite())
    {
        wl_warn!(
            item_height,
            viewport_height,
            "compute_visible_range: heights must be finite and positive"
        );
        debug_assert!(
            item_height > 0.0 && viewport_height > 0.0,
            "compute_visible_range: heights must be finite and positive \
             (item_height={item_height}, viewport_height={viewport_height})"
        );
        return VisibleRange::empty_at(0, 0.0);
    }

    if item_count == 0 {
        return VisibleRange::empty_at(0, item_height);
    }

    let scroll = sanitize_scroll_position(scroll_position);
    let first_visible = floor_to_index(scroll / item_height);
    let start = first_visible.saturating_sub(overscan);
    let visible_count = ceil_to_count(viewport_height / item_height);
    let span = visible_count.saturating_add(overscan.saturating_mul(2));
    let end = cmp::min(item_count, start.saturating_add(span));

    if start >= end {
        // Scrolled past the content, e.g. right after the collection shrank.
        return VisibleRange::empty_at(item_count, item_height);
    }

    VisibleRange {
        start_index: start,
        end_index: end,
        offset_y: start as f64 * item_height,
    }
}

/// NaN and negative positions collapse to the top of the list.
pub(crate) fn sanitize_scroll_position(position: f64) -> f64 {
    if position.is_nan() || position < 0.0 {
        0.0
    } else {
        position
    }
}
