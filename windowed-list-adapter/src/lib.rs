//! Adapter utilities for the `windowed-list` crate.
//!
//! `windowed-list` is UI-agnostic and only does the windowing math and the render/commit
//! bookkeeping. This crate adds small, framework-neutral helpers hosts usually need:
//!
//! - A [`Controller`] that runs render → paint → commit in the right order
//! - Tween-based smooth scrolling (adapter-driven, no timers of its own)
//! - Scroll anchoring by key, so replacing the collection does not make content jump
//!
//! No bindings to any particular UI toolkit are provided.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::{Controller, DEFAULT_IS_SCROLLING_RESET_DELAY_MS};
pub use tween::{Easing, Tween};
