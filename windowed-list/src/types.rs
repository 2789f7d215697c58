use core::ops::Range;

/// Where a scroll-to target should land inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current position if the row is already fully visible, otherwise scroll the
    /// minimum distance.
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// The window of rows to materialize, plus the translation of the rendered block.
///
/// `start_index..end_index` is half-open. An empty window always has
/// `start_index == end_index`, and `offset_y == start_index * item_height` holds for every
/// window, empty or not.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// Where the first rendered row sits within the full, unrendered list.
    pub offset_y: f64,
}

impl VisibleRange {
    /// The empty window at `index` (0 for an empty list, `item_count` when scrolled past the
    /// end).
    pub fn empty_at(index: usize, item_height: f64) -> Self {
        Self {
            start_index: index,
            end_index: index,
            offset_y: index as f64 * item_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// Inclusive index of the last row, or `None` for an empty window.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }

    /// Whether two windows cover the same indices (the translation is derived from them).
    pub fn same_indices(&self, other: &Self) -> bool {
        self.start_index == other.start_index && self.end_index == other.end_index
    }
}
