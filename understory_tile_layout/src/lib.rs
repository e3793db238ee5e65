// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_layout --heading-base-level=0

//! Understory Tile Layout: best-fit resizing for tiled tabs.
//!
//! A window is divided into axis-aligned tabs whose bounds are percentages of
//! the window (0 to 100 on each axis). Given one target tab and its neighbors,
//! this crate computes new bounds for the target that:
//!
//! - no longer cover any neighbor (the target is *shrunk*), and
//! - reclaim any free space around it (the target is *expanded*),
//!
//! without ever growing into another tab. It is meant for a discrete
//! "auto layout" action, not for continuous constraint solving while dragging.
//!
//! The work happens on a [`PercentageGrid`]: an integer occupancy raster, one
//! cell per percent, into which every other tab is rasterized. Shrinking
//! erodes edges one cell at a time, first only where a whole line is blocked
//! ([`Erosion::Conservative`]) and then wherever any cell is
//! ([`Erosion::Aggressive`]). Expansion starts from the tab pulled in by a
//! cell on each side, so neighbors that only share its boundary do not block
//! it, grows edges into lines that are free, and finally snaps each edge
//! flush against its neighbor.
//!
//! Tabs are supplied through the [`TileTab`] trait, which only needs a key and
//! bounds as a [`kurbo::Rect`]. [`TabRect`] is a ready-made implementation.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_tile_layout::{TabRect, TileLayoutEngine};
//!
//! let engine = TileLayoutEngine::default();
//!
//! // A small tab next to a neighbor that covers the right 60% of the window.
//! let target = TabRect::new("a", Rect::new(10.0, 10.0, 40.0, 40.0));
//! let neighbor = TabRect::new("b", Rect::new(40.0, 0.0, 100.0, 100.0));
//!
//! let fit = engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target);
//! assert_eq!(fit, Some(Rect::new(0.0, 0.0, 40.0, 100.0)));
//!
//! // Once it fits, there is nothing left to do.
//! let fitted = TabRect::new("a", Rect::new(0.0, 0.0, 40.0, 100.0));
//! let again = engine.shrink_and_expand_to_fill_empty_space(&[fitted, neighbor], &fitted);
//! assert_eq!(again, None);
//! ```
//!
//! Overlap between tabs can be tested directly:
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_tile_layout::{TabRect, intersection_test};
//!
//! let a = TabRect::new(1, Rect::new(0.0, 0.0, 60.0, 100.0));
//! let b = TabRect::new(2, Rect::new(40.0, 0.0, 100.0, 100.0));
//! assert!(intersection_test(&a, &b));
//! assert!(intersection_test(&a, &a));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: float math through `kurbo/libm` for `no_std` builds.
//!
//! ### Float semantics
//!
//! Bounds are assumed finite. Debug builds assert on NaN or infinite bounds.
//!
//! ## Logging
//!
//! Layout decisions are reported through the [`log`] facade (`debug` per
//! request, `trace` per pass). This crate never installs a logger.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edges;
mod engine;
mod error;
mod expand;
mod grid;
mod shrink;
mod tab;
mod types;
pub(crate) mod util;

pub use engine::{LayoutConfig, TileLayoutEngine};
pub use error::OutOfRangeError;
pub use grid::{Coverage, PercentageGrid};
pub use shrink::Erosion;
pub use tab::{TabRect, TileTab, TileTabMut, bounds_overlap, intersection_test};
pub use types::{CellRect, GridExtent};
