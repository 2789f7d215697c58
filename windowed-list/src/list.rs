use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::geometry::floor_to_index;
use crate::key::RowKey;
use crate::window::sanitize_scroll_position;
use crate::{
    Align, Frame, Geometry, RenderedRow, Row, RowMemo, ScrollDirection, VisibleRange,
    WindowedListOptions,
};

/// A headless windowing engine for fixed-height rows.
///
/// The list never holds items or UI objects. It owns the scroll position and the last committed
/// window; the host drives it:
/// 1. forward every scroll notification to [`Self::on_scroll`],
/// 2. build a [`Frame`] with [`Self::render`] (or [`Self::render_memoized`]) from the current
///    collection,
/// 3. paint the frame,
/// 4. call [`Self::commit_frame`], which notifies the range observer if the window moved.
///
/// Every query is constant-time in the collection size; a render allocates one `Vec` sized to
/// the window.
#[derive(Clone, Debug)]
pub struct WindowedList<T, K = usize> {
    options: WindowedListOptions<T, K>,
    item_count: usize,
    scroll_position: f64,
    scroll_direction: Option<ScrollDirection>,
    committed: Option<VisibleRange>,
}

impl<T, K> WindowedList<T, K> {
    /// Creates a list scrolled to the top, with no items yet.
    pub fn new(options: WindowedListOptions<T, K>) -> Self {
        wl_debug!(
            item_height = options.geometry.item_height(),
            viewport_height = options.geometry.viewport_height(),
            overscan = options.geometry.overscan(),
            "WindowedList::new"
        );
        Self {
            options,
            item_count: 0,
            scroll_position: 0.0,
            scroll_direction: None,
            committed: None,
        }
    }

    /// Creates a list and sizes it for `item_count` rows.
    pub fn with_item_count(options: WindowedListOptions<T, K>, item_count: usize) -> Self {
        let mut list = Self::new(options);
        list.item_count = item_count;
        list
    }

    pub fn options(&self) -> &WindowedListOptions<T, K> {
        &self.options
    }

    pub fn geometry(&self) -> Geometry {
        self.options.geometry
    }

    pub fn set_options(&mut self, options: WindowedListOptions<T, K>) {
        self.options = options;
        wl_debug!(
            item_height = self.options.geometry.item_height(),
            viewport_height = self.options.geometry.viewport_height(),
            overscan = self.options.geometry.overscan(),
            "WindowedList::set_options"
        );
    }

    /// Clones the current options, applies `f`, then hands the result to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowedListOptions<T, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.update_options(|o| o.geometry = geometry);
    }

    pub fn set_on_range_change(
        &mut self,
        on_range_change: Option<impl Fn(VisibleRange) + Send + Sync + 'static>,
    ) {
        self.options.on_range_change = on_range_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_key_of(&mut self, key_of: impl Fn(&T, usize) -> K + Send + Sync + 'static) {
        self.options.key_of = Arc::new(key_of);
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Records the length of a replacement collection.
    ///
    /// The scroll position is left alone; if the collection shrank below it, the window is empty
    /// until the host scrolls back into range.
    pub fn set_item_count(&mut self, item_count: usize) {
        if self.item_count == item_count {
            return;
        }
        wl_trace!(from = self.item_count, to = item_count, "set_item_count");
        self.item_count = item_count;
    }

    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Stores a scroll position reported by the host. The next read reflects it.
    ///
    /// Last write wins. NaN and negative positions are stored as `0`; the upper bound is the
    /// scroll surface's business and is not enforced here.
    pub fn on_scroll(&mut self, position: f64) {
        if position.is_nan() {
            wl_warn!("on_scroll: NaN scroll position treated as 0");
        }
        let position = sanitize_scroll_position(position);
        let prev = self.scroll_position;
        if position == prev {
            return;
        }
        self.scroll_direction = Some(if position > prev {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        });
        self.scroll_position = position;
        wl_trace!(position, "on_scroll");
    }

    /// Same as `on_scroll`, but clamps to [`Self::max_scroll_position`] first.
    pub fn on_scroll_clamped(&mut self, position: f64) {
        let clamped = self.clamp_scroll_position(position);
        self.on_scroll(clamped);
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range_for(self.scroll_position)
    }

    pub fn visible_range_for(&self, scroll_position: f64) -> VisibleRange {
        self.options
            .geometry
            .visible_range(scroll_position, self.item_count)
    }

    /// The last window passed to [`Self::commit`], if any.
    pub fn committed_range(&self) -> Option<VisibleRange> {
        self.committed
    }

    /// Height of the spacer: every row, rendered or not.
    pub fn total_height(&self) -> f64 {
        self.options.geometry.total_height(self.item_count)
    }

    pub fn max_scroll_position(&self) -> f64 {
        self.options.geometry.max_scroll_position(self.item_count)
    }

    pub fn clamp_scroll_position(&self, position: f64) -> f64 {
        sanitize_scroll_position(position).min(self.max_scroll_position())
    }

    /// Index of the row covering `position`, clamped to the last row.
    pub fn index_at_position(&self, position: f64) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        let position = sanitize_scroll_position(position);
        let index = floor_to_index(position / self.options.geometry.item_height());
        Some(index.min(self.item_count - 1))
    }

    /// Index of the row at the top edge of the viewport.
    pub fn first_visible_index(&self) -> Option<usize> {
        self.index_at_position(self.scroll_position)
    }

    pub fn item_start(&self, index: usize) -> Option<f64> {
        (index < self.item_count).then(|| index as f64 * self.options.geometry.item_height())
    }

    pub fn item_end(&self, index: usize) -> Option<f64> {
        let start = self.item_start(index)?;
        Some(start + self.options.geometry.item_height())
    }

    /// Scroll position that brings `index` into view with the given alignment.
    ///
    /// Out-of-range indexes are clamped to the last row. The result is clamped to
    /// `0..=max_scroll_position()`.
    pub fn scroll_to_index_position(&self, index: usize, align: Align) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        let index = index.min(self.item_count - 1);
        let item_height = self.options.geometry.item_height();
        let view = self.options.geometry.viewport_height();
        let start = index as f64 * item_height;
        let end = start + item_height;

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => start + item_height / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_position;
                if start >= cur && end <= cur + view {
                    cur
                } else if start < cur {
                    start
                } else {
                    end - view
                }
            }
        };

        self.clamp_scroll_position(target)
    }

    /// Scrolls so `index` is in view (no animation). Returns the applied position.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> f64 {
        let position = self.scroll_to_index_position(index, align);
        self.on_scroll(position);
        self.scroll_position
    }

    pub fn key_for(&self, item: &T, index: usize) -> K {
        (self.options.key_of)(item, index)
    }

    /// Calls `f` for every index in the current window, in order, without allocating.
    pub fn for_each_visible_index(&self, mut f: impl FnMut(usize)) {
        for index in self.visible_range().indices() {
            f(index);
        }
    }

    /// Collects the current window's indexes into `out` (clears `out` first).
    pub fn collect_visible_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_visible_index(|i| out.push(i));
    }

    /// Builds the frame for the current scroll position over `items`.
    ///
    /// `render_item` runs exactly once per row in the window; nothing outside the window is
    /// touched. The item count is taken from `items`.
    pub fn render<C>(
        &mut self,
        items: &[T],
        mut render_item: impl FnMut(&T, usize) -> C,
    ) -> Frame<K, C> {
        self.set_item_count(items.len());
        let range = self.visible_range();
        let item_height = self.options.geometry.item_height();

        let mut rows = Vec::with_capacity(range.len());
        for (index, item) in Self::window(items, range) {
            rows.push(RenderedRow {
                key: self.key_for(item, index),
                index,
                row: Row::new(render_item(item, index), item_height),
            });
        }

        wl_trace!(
            start = range.start_index,
            end = range.end_index,
            rows = rows.len(),
            "render"
        );
        self.frame(range, rows)
    }

    /// Like [`Self::render`], but rows whose key, item, index and height are unchanged since the
    /// previous frame are taken from `memo` instead of being rendered again.
    pub fn render_memoized<C: Clone>(
        &mut self,
        items: &[T],
        memo: &mut RowMemo<K, T, C>,
        mut render_item: impl FnMut(&T, usize) -> C,
    ) -> Frame<K, C>
    where
        K: RowKey,
        T: Clone + PartialEq,
    {
        self.set_item_count(items.len());
        let range = self.visible_range();
        let item_height = self.options.geometry.item_height();

        memo.begin_frame();
        let mut rows = Vec::with_capacity(range.len());
        for (index, item) in Self::window(items, range) {
            let key = self.key_for(item, index);
            let row = memo.present(key.clone(), item, index, item_height, || {
                render_item(item, index)
            });
            rows.push(RenderedRow { key, index, row });
        }
        memo.end_frame();

        wl_trace!(
            start = range.start_index,
            end = range.end_index,
            rendered = memo.last_rendered(),
            reused = memo.last_reused(),
            "render_memoized"
        );
        self.frame(range, rows)
    }

    /// Marks `range` as reflected in rendered output.
    ///
    /// When its indices differ from the previously committed window (or nothing was committed
    /// yet) the range observer runs once and `true` is returned. Committing the same window
    /// again is a no-op.
    pub fn commit(&mut self, range: &VisibleRange) -> bool {
        let changed = match &self.committed {
            Some(prev) => !prev.same_indices(range),
            None => true,
        };
        self.committed = Some(*range);
        if !changed {
            return false;
        }

        wl_debug!(
            start = range.start_index,
            end = range.end_index,
            "range committed"
        );
        if let Some(cb) = &self.options.on_range_change {
            cb(*range);
        }
        true
    }

    /// Commits the window of a frame the host has just painted.
    pub fn commit_frame<C>(&mut self, frame: &Frame<K, C>) -> bool {
        self.commit(&frame.range)
    }

    fn window(items: &[T], range: VisibleRange) -> impl Iterator<Item = (usize, &T)> {
        let start = range.start_index;
        items
            .get(range.indices())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(move |(i, item)| (start + i, item))
    }

    fn frame<C>(&self, range: VisibleRange, rows: Vec<RenderedRow<K, C>>) -> Frame<K, C> {
        Frame {
            viewport_height: self.options.geometry.viewport_height(),
            spacer_height: self.total_height(),
            range,
            rows,
        }
    }
}
