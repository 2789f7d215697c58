use core::fmt;

use crate::VisibleRange;

/// Overscan used when the caller does not pick one.
pub const DEFAULT_OVERSCAN: usize = 6;

/// Rejected geometry passed to [`Geometry::new`] or one of its setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// `item_height` was zero or negative.
    NonPositiveItemHeight(f64),
    /// `viewport_height` was zero or negative.
    NonPositiveViewportHeight(f64),
    /// `item_height` was NaN or infinite.
    NonFiniteItemHeight(f64),
    /// `viewport_height` was NaN or infinite.
    NonFiniteViewportHeight(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveItemHeight(h) => write!(f, "item height must be positive, got {h}"),
            Self::NonPositiveViewportHeight(h) => {
                write!(f, "viewport height must be positive, got {h}")
            }
            Self::NonFiniteItemHeight(h) => write!(f, "item height must be finite, got {h}"),
            Self::NonFiniteViewportHeight(h) => {
                write!(f, "viewport height must be finite, got {h}")
            }
        }
    }
}

impl core::error::Error for GeometryError {}

/// Fixed row geometry of one list instance.
///
/// All rows share `item_height`. Heights are logical pixels (or terminal rows, or whatever unit
/// the host uses, as long as scroll positions use the same unit).
///
/// Construction validates both heights, so every `Geometry` value in circulation satisfies
/// `item_height > 0` and `viewport_height > 0`. Deserialization goes through the same checks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GeometryRepr")
)]
pub struct Geometry {
    item_height: f64,
    viewport_height: f64,
    overscan: usize,
}

impl Geometry {
    /// Creates a geometry with [`DEFAULT_OVERSCAN`].
    pub fn new(item_height: f64, viewport_height: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            item_height: check_item_height(item_height)?,
            viewport_height: check_viewport_height(viewport_height)?,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    /// Sets the number of extra rows kept on each edge of the window.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Returns a copy with a different viewport height (e.g. after a host resize).
    pub fn with_viewport_height(mut self, viewport_height: f64) -> Result<Self, GeometryError> {
        self.viewport_height = check_viewport_height(viewport_height)?;
        Ok(self)
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Rows needed to cover the viewport at any fractional scroll alignment.
    pub fn visible_count(&self) -> usize {
        ceil_to_count(self.viewport_height / self.item_height)
    }

    /// Upper bound on the number of rows any window of this geometry can hold.
    pub fn max_window_len(&self) -> usize {
        self.visible_count()
            .saturating_add(self.overscan.saturating_mul(2))
    }

    /// Height of the spacer that gives the scroll surface its full extent.
    pub fn total_height(&self, item_count: usize) -> f64 {
        item_count as f64 * self.item_height
    }

    /// Largest meaningful scroll position for `item_count` rows.
    pub fn max_scroll_position(&self, item_count: usize) -> f64 {
        (self.total_height(item_count) - self.viewport_height).max(0.0)
    }

    /// Computes the window for `scroll_position` over `item_count` rows.
    pub fn visible_range(&self, scroll_position: f64, item_count: usize) -> VisibleRange {
        crate::compute_visible_range(
            scroll_position,
            self.item_height,
            self.viewport_height,
            item_count,
            self.overscan,
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GeometryRepr {
    item_height: f64,
    viewport_height: f64,
    #[serde(default = "default_overscan")]
    overscan: usize,
}

#[cfg(feature = "serde")]
fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

#[cfg(feature = "serde")]
impl TryFrom<GeometryRepr> for Geometry {
    type Error = GeometryError;

    fn try_from(repr: GeometryRepr) -> Result<Self, Self::Error> {
        Geometry::new(repr.item_height, repr.viewport_height)
            .map(|g| g.with_overscan(repr.overscan))
    }
}

fn check_item_height(h: f64) -> Result<f64, GeometryError> {
    if !h.is_finite() {
        return Err(GeometryError::NonFiniteItemHeight(h));
    }
    if h <= 0.0 {
        return Err(GeometryError::NonPositiveItemHeight(h));
    }
    Ok(h)
}

fn check_viewport_height(h: f64) -> Result<f64, GeometryError> {
    if !h.is_finite() {
        return Err(GeometryError::NonFiniteViewportHeight(h));
    }
    if h <= 0.0 {
        return Err(GeometryError::NonPositiveViewportHeight(h));
    }
    Ok(h)
}

/// `floor(value)` as an index, for non-negative `value`.
///
/// Saturates at `usize::MAX` for huge or infinite inputs; NaN maps to 0.
pub(crate) fn floor_to_index(value: f64) -> usize {
    // `as` truncates toward zero and saturates, which is `floor` on the non-negative half-line.
    value as usize
}

/// `ceil(value)` as a count, for non-negative `value`.
pub(crate) fn ceil_to_count(value: f64) -> usize {
    let whole = floor_to_index(value);
    if (whole as f64) < value {
        whole.saturating_add(1)
    } else {
        whole
    }
}
