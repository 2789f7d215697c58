use alloc::sync::Arc;

use crate::{Geometry, VisibleRange};

/// Derives the identity of the item at an index.
///
/// The default keys rows by index, which only stays attached to the same logical item while
/// nothing is inserted or removed above it. Supply a key derived from the item itself when the
/// collection can change between renders.
pub type KeyOf<T, K> = Arc<dyn Fn(&T, usize) -> K + Send + Sync>;

/// Observer invoked after a new window has been committed to rendered output.
///
/// It receives the committed window by value and no handle to the list, so it can read the range
/// (e.g. to prefetch) but cannot feed a scroll update back in synchronously.
pub type OnRangeChange = Arc<dyn Fn(VisibleRange) + Send + Sync>;

/// Configuration for [`crate::WindowedList`].
///
/// Closures live behind `Arc`s, so cloning is cheap and `WindowedList::update_options` can
/// tweak a field without reallocating them.
pub struct WindowedListOptions<T, K = usize> {
    pub geometry: Geometry,
    pub key_of: KeyOf<T, K>,
    pub on_range_change: Option<OnRangeChange>,
}

impl<T, K> Clone for WindowedListOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry,
            key_of: Arc::clone(&self.key_of),
            on_range_change: self.on_range_change.clone(),
        }
    }
}

impl<T: 'static> WindowedListOptions<T, usize> {
    /// Options for a list keyed by index.
    ///
    /// Index keys are only stable while the collection is unchanged. After an insert or removal
    /// above the viewport the same key names a different item; use [`Self::new_with_key`] when
    /// items move.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            key_of: Arc::new(|_: &T, index: usize| index),
            on_range_change: None,
        }
    }
}

impl<T, K> WindowedListOptions<T, K> {
    /// Options with a custom key derivation, for collections that get reordered or edited.
    pub fn new_with_key(
        geometry: Geometry,
        key_of: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            geometry,
            key_of: Arc::new(key_of),
            on_range_change: None,
        }
    }

    /// Replaces the key derivation, possibly changing the key type.
    pub fn with_key_of<K2>(
        self,
        key_of: impl Fn(&T, usize) -> K2 + Send + Sync + 'static,
    ) -> WindowedListOptions<T, K2> {
        WindowedListOptions {
            geometry: self.geometry,
            key_of: Arc::new(key_of),
            on_range_change: self.on_range_change,
        }
    }

    pub fn with_on_range_change(
        mut self,
        on_range_change: Option<impl Fn(VisibleRange) + Send + Sync + 'static>,
    ) -> Self {
        self.on_range_change = on_range_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.geometry = self.geometry.with_overscan(overscan);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}

impl<T, K> core::fmt::Debug for WindowedListOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedListOptions")
            .field("geometry", &self.geometry)
            .field("on_range_change", &self.on_range_change.is_some())
            .finish_non_exhaustive()
    }
}
