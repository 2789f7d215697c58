use alloc::vec::Vec;

use crate::{Row, VisibleRange};

/// A row placed in a frame, with the identity the host should key it by.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRow<K, C> {
    pub key: K,
    pub index: usize,
    pub row: Row<C>,
}

/// What the host paints for one render pass.
///
/// The host lays it out as:
/// - a scroll container `viewport_height` tall,
/// - holding a spacer `spacer_height` tall (the whole list, rendered or not),
/// - holding `rows` stacked in order as a single block translated by `range.offset_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<K, C> {
    pub viewport_height: f64,
    pub spacer_height: f64,
    pub range: VisibleRange,
    pub rows: Vec<RenderedRow<K, C>>,
}

impl<K, C> Frame<K, C> {
    /// Translation applied to the rendered block.
    pub fn offset_y(&self) -> f64 {
        self.range.offset_y
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Absolute top of the row for `index`, if it was rendered in this frame.
    pub fn row_top(&self, index: usize) -> Option<f64> {
        let rendered = self.row(index)?;
        let position_in_block = (index - self.range.start_index) as f64;
        Some(self.range.offset_y + position_in_block * rendered.row.height())
    }

    pub fn row(&self, index: usize) -> Option<&RenderedRow<K, C>> {
        if !self.range.contains(index) {
            return None;
        }
        self.rows.get(index - self.range.start_index)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.rows.iter().map(|r| &r.key)
    }
}
