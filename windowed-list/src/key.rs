#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type RowMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type RowMap<K, V> = BTreeMap<K, V>;

/// Bound for row keys used by [`crate::RowMemo`].
///
/// With `std` this is `Hash + Eq`; without it, `Ord`. Both are blanket-implemented.
#[cfg(feature = "std")]
pub trait RowKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> RowKey for K {}

#[cfg(not(feature = "std"))]
pub trait RowKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> RowKey for K {}
