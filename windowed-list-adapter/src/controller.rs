use windowed_list::{
    Align, Frame, GeometryError, RowKey, RowMemo, WindowedList, WindowedListOptions,
};

use crate::{Easing, ScrollAnchor, Tween, apply_anchor, capture_first_visible_anchor};

/// Default quiet period after the last scroll event before `is_scrolling` resets.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// A framework-neutral driver around [`WindowedList`].
///
/// It holds no UI objects. Adapters call:
/// - `on_scroll` / `on_viewport_height` when the host reports changes,
/// - `present` whenever they paint, which renders, hands the frame to the host, and only then
///   commits it (so range observers never see a window that is not on screen yet),
/// - `tick(now_ms)` on each frame or timer tick, for tweens and `is_scrolling` reset.
///
/// When `tick` returns a position, the host should apply it to its real scroll surface.
#[derive(Clone, Debug)]
pub struct Controller<T, K = usize> {
    list: WindowedList<T, K>,
    tween: Option<Tween>,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,
    is_scrolling_reset_delay_ms: u64,
}

impl<T, K> Controller<T, K> {
    pub fn new(options: WindowedListOptions<T, K>) -> Self {
        Self::from_list(WindowedList::new(options))
    }

    pub fn from_list(list: WindowedList<T, K>) -> Self {
        Self {
            list,
            tween: None,
            is_scrolling: false,
            last_scroll_event_ms: None,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        }
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn list(&self) -> &WindowedList<T, K> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut WindowedList<T, K> {
        &mut self.list
    }

    pub fn into_list(self) -> WindowedList<T, K> {
        self.list
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the host viewport is resized.
    pub fn on_viewport_height(&mut self, viewport_height: f64) -> Result<(), GeometryError> {
        let geometry = self.list.geometry().with_viewport_height(viewport_height)?;
        self.list.set_geometry(geometry);
        Ok(())
    }

    /// Call this when the host reports a scroll position (wheel, drag, keyboard).
    ///
    /// User scrolling wins over any running tween, which is cancelled.
    pub fn on_scroll(&mut self, position: f64, now_ms: u64) {
        self.cancel_animation();
        self.apply_scroll(position, now_ms);
    }

    /// Advances the controller.
    ///
    /// - With a tween running, moves the list along it and returns the new position.
    /// - Otherwise clears `is_scrolling` once no scroll event arrived for the reset delay, and
    ///   returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let Some(tween) = self.tween else {
            self.update_scrolling(now_ms);
            return None;
        };

        let position = self.list.clamp_scroll_position(tween.sample(now_ms));
        self.apply_scroll(position, now_ms);

        if tween.is_done(now_ms) {
            self.tween = None;
            self.is_scrolling = false;
            self.last_scroll_event_ms = None;
        }

        Some(self.list.scroll_position())
    }

    /// Renders `items`, hands the frame to `paint`, then commits it.
    ///
    /// Returns `true` when the committed window changed (and the range observer ran).
    pub fn present<C>(
        &mut self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> C,
        paint: impl FnOnce(&Frame<K, C>),
    ) -> bool {
        let frame = self.list.render(items, render_item);
        paint(&frame);
        self.list.commit_frame(&frame)
    }

    /// Same as [`Self::present`], with unchanged rows taken from `memo`.
    pub fn present_memoized<C: Clone>(
        &mut self,
        items: &[T],
        memo: &mut RowMemo<K, T, C>,
        render_item: impl FnMut(&T, usize) -> C,
        paint: impl FnOnce(&Frame<K, C>),
    ) -> bool
    where
        K: RowKey,
        T: Clone + PartialEq,
    {
        let frame = self.list.render_memoized(items, memo, render_item);
        paint(&frame);
        self.list.commit_frame(&frame)
    }

    /// Jumps so `index` is in view (no animation). Returns the applied position.
    pub fn scroll_to_index(&mut self, index: usize, align: Align, now_ms: u64) -> f64 {
        let position = self.list.scroll_to_index_position(index, align);
        self.scroll_to_position(position, now_ms)
    }

    /// Jumps to `position`, clamped to the content. Returns the applied position.
    pub fn scroll_to_position(&mut self, position: f64, now_ms: u64) -> f64 {
        self.cancel_animation();
        let position = self.list.clamp_scroll_position(position);
        self.apply_scroll(position, now_ms);
        self.list.scroll_position()
    }

    /// Starts a tween that brings `index` into view. Returns the clamped target.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        let to = self.list.scroll_to_index_position(index, align);
        self.start_tween_to_position(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween toward `position`. Returns the clamped target.
    ///
    /// A tween already running is retargeted from where it currently is.
    pub fn start_tween_to_position(
        &mut self,
        position: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        let to = self.list.clamp_scroll_position(position);
        match &mut self.tween {
            Some(tween) => {
                tween.easing = easing;
                tween.retarget(now_ms, to, duration_ms);
            }
            None => {
                let from = self.list.scroll_position();
                self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
            }
        }
        wla_debug!(to, duration_ms, "tween started");
        to
    }

    pub fn capture_first_visible_anchor(&self, items: &[T]) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.list, items)
    }

    /// Captures an anchor on the row `offset_in_viewport` below the top edge.
    pub fn capture_anchor_at_offset_in_viewport(
        &self,
        items: &[T],
        offset_in_viewport: f64,
    ) -> Option<ScrollAnchor<K>> {
        let position = self.list.scroll_position() + offset_in_viewport.max(0.0);
        let index = self.list.index_at_position(position)?;
        let item = items.get(index)?;
        let start = self.list.item_start(index)?;
        Some(ScrollAnchor {
            key: self.list.key_for(item, index),
            offset_in_viewport: self.list.scroll_position() - start,
        })
    }

    /// Re-applies an anchor after the collection was replaced by `items`.
    ///
    /// This cancels any active tween.
    pub fn apply_anchor(
        &mut self,
        items: &[T],
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> bool {
        self.cancel_animation();
        apply_anchor(&mut self.list, items, anchor, key_to_index)
    }

    fn apply_scroll(&mut self, position: f64, now_ms: u64) {
        self.list.on_scroll(position);
        self.is_scrolling = true;
        self.last_scroll_event_ms = Some(now_ms);
    }

    fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.is_scrolling_reset_delay_ms {
            wla_trace!(now_ms, "is_scrolling reset");
            self.is_scrolling = false;
            self.last_scroll_event_ms = None;
        }
    }
}
