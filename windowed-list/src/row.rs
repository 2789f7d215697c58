use crate::key::{RowKey, RowMap};

/// One item's rendered content inside a container of the fixed row height.
///
/// A row knows nothing about indices, offsets or the collection it came from; placement is the
/// job of the enclosing [`crate::Frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct Row<C> {
    content: C,
    height: f64,
}

impl<C> Row<C> {
    pub fn new(content: C, height: f64) -> Self {
        Self { content, height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> Row<D> {
        Row {
            content: f(self.content),
            height: self.height,
        }
    }
}

struct MemoEntry<T, C> {
    item: T,
    index: usize,
    height: f64,
    content: C,
    frame: u64,
}

/// Remembers rendered rows across frames so unchanged rows are not rendered again.
///
/// A row is reused when its key is known and its item (by `PartialEq`), index and height are all
/// unchanged since it was last presented. The index is part of the match because the render
/// closure sees it: with item-derived keys, a prepend shifts every index while keys stay put. Rows that drop out of a frame are evicted when the
/// frame ends, so the cache never grows past one window.
///
/// This is purely an optimization: a frame rendered through a memo has the same rows as one
/// rendered without it.
pub struct RowMemo<K, T, C> {
    entries: RowMap<K, MemoEntry<T, C>>,
    frame: u64,
    last_rendered: usize,
    last_reused: usize,
}

impl<K: RowKey, T: Clone + PartialEq, C: Clone> RowMemo<K, T, C> {
    pub fn new() -> Self {
        Self {
            entries: RowMap::default(),
            frame: 0,
            last_rendered: 0,
            last_reused: 0,
        }
    }

    /// Number of cached rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows rendered (cache misses) during the last frame.
    pub fn last_rendered(&self) -> usize {
        self.last_rendered
    }

    /// Rows reused (cache hits) during the last frame.
    pub fn last_reused(&self) -> usize {
        self.last_reused
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_rendered = 0;
        self.last_reused = 0;
    }

    pub(crate) fn begin_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.last_rendered = 0;
        self.last_reused = 0;
    }

    pub(crate) fn present(
        &mut self,
        key: K,
        item: &T,
        index: usize,
        height: f64,
        render: impl FnOnce() -> C,
    ) -> Row<C> {
        let frame = self.frame;
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.frame = frame;
            if entry.index == index && entry.height == height && entry.item == *item {
                self.last_reused += 1;
                return Row::new(entry.content.clone(), height);
            }
            let content = render();
            entry.item = item.clone();
            entry.index = index;
            entry.height = height;
            entry.content = content.clone();
            self.last_rendered += 1;
            return Row::new(content, height);
        }

        let content = render();
        self.entries.insert(
            key,
            MemoEntry {
                item: item.clone(),
                index,
                height,
                content: content.clone(),
                frame,
            },
        );
        self.last_rendered += 1;
        Row::new(content, height)
    }

    pub(crate) fn end_frame(&mut self) {
        let frame = self.frame;
        self.entries.retain(|_, entry| entry.frame == frame);
    }
}

impl<K: RowKey, T: Clone + PartialEq, C: Clone> Default for RowMemo<K, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, C> core::fmt::Debug for RowMemo<K, T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowMemo")
            .field("len", &self.entries.len())
            .field("frame", &self.frame)
            .field("last_rendered", &self.last_rendered)
            .field("last_reused", &self.last_reused)
            .finish_non_exhaustive()
    }
}
