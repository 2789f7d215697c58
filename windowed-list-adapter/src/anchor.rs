use core::fmt;

use windowed_list::WindowedList;

/// Pins the viewport to a logical item so it survives collection replacement.
///
/// Index keys drift when rows are inserted or removed above the viewport. Capturing an anchor
/// before swapping the collection and applying it afterwards keeps the same item at the same
/// spot on screen, e.g. when older messages are prepended to a timeline.
#[derive(Clone, PartialEq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor row's top to the scroll position.
    pub offset_in_viewport: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor on the row at the top edge of the viewport.
///
/// `items` must be the collection the list currently shows. Returns `None` when there is no
/// such row.
pub fn capture_first_visible_anchor<T, K>(
    list: &WindowedList<T, K>,
    items: &[T],
) -> Option<ScrollAnchor<K>> {
    let index = list.first_visible_index()?;
    let item = items.get(index)?;
    let start = list.item_start(index)?;
    Some(ScrollAnchor {
        key: list.key_for(item, index),
        offset_in_viewport: (list.scroll_position() - start).max(0.0),
    })
}

/// Re-applies an anchor after the collection was replaced by `items`.
///
/// `key_to_index` maps a key to its index in the *new* collection. The resulting position is
/// clamped to the new content extent. Returns `false` (leaving the position alone) when the key
/// is gone.
pub fn apply_anchor<T, K>(
    list: &mut WindowedList<T, K>,
    items: &[T],
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    list.set_item_count(items.len());
    let Some(index) = key_to_index(&anchor.key) else {
        wla_debug!("apply_anchor: anchor key no longer present");
        return false;
    };
    let Some(start) = list.item_start(index) else {
        return false;
    };
    list.on_scroll_clamped(start + anchor.offset_in_viewport);
    wla_trace!(index, position = list.scroll_position(), "anchor applied");
    true
}
