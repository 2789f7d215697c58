//! A headless windowing engine for fixed-height rows.
//!
//! Given a scroll position and fixed geometry, the engine picks the small contiguous window of
//! rows that keeps the viewport filled (plus an overscan buffer on both edges) and the single
//! translation that puts that block where it belongs inside the full, unrendered list. The
//! window's size depends only on the viewport, never on how many rows exist.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to:
//! - report scroll positions ([`WindowedList::on_scroll`]),
//! - hand over the current collection when rendering ([`WindowedList::render`]),
//! - paint the returned [`Frame`]: a viewport-sized scroll container, a spacer as tall as the
//!   whole list, and the rows translated by `offset_y`,
//! - commit the painted frame ([`WindowedList::commit_frame`]) so range observers fire.
//!
//! ```
//! use windowed_list::{Geometry, WindowedList, WindowedListOptions};
//!
//! let items: Vec<u32> = (0..1000).collect();
//! let geometry = Geometry::new(80.0, 400.0).unwrap();
//! let mut list = WindowedList::new(WindowedListOptions::new(geometry));
//!
//! list.on_scroll(4000.0);
//! let frame = list.render(&items, |item, _| item.to_string());
//! assert_eq!(frame.range.start_index, 44);
//! assert_eq!(frame.range.last_index(), Some(60));
//! assert_eq!(frame.offset_y(), 3520.0);
//! assert_eq!(frame.spacer_height, 80_000.0);
//! assert!(list.commit_frame(&frame));
//! ```
//!
//! For scroll-driving utilities (smooth scrolling, anchoring), see the `windowed-list-adapter`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod frame;
mod geometry;
mod key;
mod list;
mod options;
mod row;
mod types;
mod window;


pub use frame::{Frame, RenderedRow};
pub use geometry::{DEFAULT_OVERSCAN, Geometry, GeometryError};
pub use key::RowKey;
pub use list::WindowedList;
pub use options::{KeyOf, OnRangeChange, WindowedListOptions};
pub use row::{Row, RowMemo};
pub use types::{Align, ScrollDirection, VisibleRange};
pub use window::compute_visible_range;
