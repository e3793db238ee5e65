// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by checked grid operations.

use crate::types::{CellRect, GridExtent};

/// A grid was given a range it cannot represent.
///
/// These indicate a bug in the caller. The panicking grid queries abort with this message;
/// [`PercentageGrid::try_reduce`](crate::PercentageGrid::try_reduce) returns it instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRangeError {
    /// The grid extent has `min_xy > max_xy`.
    #[error("inverted grid extent [{}, {}]", .extent.min_xy, .extent.max_xy)]
    InvertedExtent {
        /// The rejected extent.
        extent: GridExtent,
    },
    /// A queried range has a minimum greater than its maximum.
    #[error("malformed cell range {cells:?}: minimum exceeds maximum")]
    Malformed {
        /// The rejected range.
        cells: CellRect,
    },
    /// A queried range reaches outside the grid.
    #[error(
        "cell range {cells:?} lies outside grid extent [{}, {}]",
        .extent.min_xy,
        .extent.max_xy
    )]
    OutsideExtent {
        /// The rejected range.
        cells: CellRect,
        /// Extent of the grid that was queried.
        extent: GridExtent,
    },
}
