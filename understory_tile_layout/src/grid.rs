// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense occupancy raster over a percentage grid.
//!
//! The grid covers the closed range `[min_xy, max_xy]` on both axes, one cell
//! per integer coordinate. Cells are points rather than unit squares: a tab
//! spanning `[40, 100]` occupies columns 40 through 100 inclusive, so two tabs
//! that share an edge also share that line of cells.
//!
//! Real-valued bounds are rasterized conservatively (floor of the minimum,
//! ceil of the maximum), so a partially covered cell always reads as occupied.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::error::OutOfRangeError;
use crate::types::{CellRect, GridExtent};

/// Reduction applied over a range of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// No cell in the range is occupied.
    None,
    /// At least one cell in the range is occupied.
    Any,
    /// Every cell in the range is occupied.
    All,
}

/// Occupancy grid built from the tabs surrounding a layout target.
#[derive(Clone, PartialEq, Eq)]
pub struct PercentageGrid {
    extent: GridExtent,
    range_xy: usize,
    // Row-major: cell (x, y) lives at `(y - min_xy) * range_xy + (x - min_xy)`.
    cells: Vec<u8>,
}

impl Debug for PercentageGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PercentageGrid")
            .field("extent", &self.extent)
            .field("range_xy", &self.range_xy)
            .field("occupied", &self.occupied_count())
            .finish_non_exhaustive()
    }
}

impl PercentageGrid {
    /// Create an empty grid covering `extent` on both axes.
    ///
    /// # Panics
    ///
    /// Panics if the extent is inverted; see [`PercentageGrid::try_new`].
    pub fn new(extent: GridExtent) -> Self {
        Self::try_new(extent).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Create an empty grid, rejecting an inverted extent.
    pub fn try_new(extent: GridExtent) -> Result<Self, OutOfRangeError> {
        if !extent.is_valid() {
            return Err(OutOfRangeError::InvertedExtent { extent });
        }
        let range_xy = extent.range_xy();
        Ok(Self {
            extent,
            range_xy,
            cells: vec![0; range_xy * range_xy],
        })
    }

    /// Create a grid over `extent` and rasterize every rectangle in `bounds` into it.
    pub fn from_bounds<I>(extent: GridExtent, bounds: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut grid = Self::new(extent);
        for rect in bounds {
            grid.set_range(rect);
        }
        grid
    }

    /// The extent this grid covers.
    #[inline]
    pub const fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Mark every cell touched by `bounds` as occupied.
    ///
    /// Minimums are floored and maximums ceiled before clamping to the extent,
    /// so bounds reaching outside the grid only mark the part inside it.
    pub fn set_range(&mut self, bounds: Rect) {
        debug_assert!(bounds.is_finite(), "tile bounds must be finite: {bounds:?}");
        let cells = self.extent.snap_outward(bounds);
        self.fill(cells);
    }

    /// Mark every cell of `cells` as occupied, clamping the range to the extent.
    pub fn set_cells(&mut self, cells: CellRect) {
        let normalized = CellRect::new(
            cells.min_x.min(cells.max_x),
            cells.min_x.max(cells.max_x),
            cells.min_y.min(cells.max_y),
            cells.min_y.max(cells.max_y),
        );
        self.fill(self.extent.clamp_cells(normalized));
    }

    fn fill(&mut self, cells: CellRect) {
        for y in cells.min_y..=cells.max_y {
            let (start, end) = self.line(y, cells.min_x, cells.max_x);
            self.cells[start..=end].fill(1);
        }
    }

    /// Reduce occupancy over an inclusive range, validating it first.
    pub fn try_reduce(
        &self,
        cells: CellRect,
        coverage: Coverage,
    ) -> Result<bool, OutOfRangeError> {
        self.check(cells)?;
        let mut lines = (cells.min_y..=cells.max_y).map(|y| {
            let (start, end) = self.line(y, cells.min_x, cells.max_x);
            &self.cells[start..=end]
        });
        Ok(match coverage {
            Coverage::None => lines.all(|line| line.iter().all(|&c| c == 0)),
            Coverage::Any => lines.any(|line| line.iter().any(|&c| c != 0)),
            Coverage::All => lines.all(|line| line.iter().all(|&c| c != 0)),
        })
    }

    /// Reduce occupancy over an inclusive range.
    ///
    /// # Panics
    ///
    /// Panics with the [`OutOfRangeError`] message if the range is malformed or leaves the grid.
    #[inline]
    pub fn reduce(&self, cells: CellRect, coverage: Coverage) -> bool {
        self.try_reduce(cells, coverage).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Whether every cell in the range is free.
    #[inline]
    pub fn is_range_off(&self, cells: CellRect) -> bool {
        self.reduce(cells, Coverage::None)
    }

    /// Whether any cell in the range is occupied.
    #[inline]
    pub fn is_range_on(&self, cells: CellRect) -> bool {
        self.reduce(cells, Coverage::Any)
    }

    /// Whether every cell in the range is occupied.
    #[inline]
    pub fn is_range_all_on(&self, cells: CellRect) -> bool {
        self.reduce(cells, Coverage::All)
    }

    /// Whether the single cell `(x, y)` is occupied.
    #[inline]
    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.is_range_on(CellRect::new(x, x, y, y))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Free every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn check(&self, cells: CellRect) -> Result<(), OutOfRangeError> {
        if !cells.is_well_formed() {
            return Err(OutOfRangeError::Malformed { cells });
        }
        if !self.extent.contains_cells(&cells) {
            return Err(OutOfRangeError::OutsideExtent {
                cells,
                extent: self.extent,
            });
        }
        Ok(())
    }

    // Buffer offsets of the first and last cell of row `y` between `min_x` and `max_x`.
    // Callers have already clamped or checked the coordinates.
    fn line(&self, y: i32, min_x: i32, max_x: i32) -> (usize, usize) {
        debug_assert!(
            self.extent.contains(y)
                && self.extent.contains(min_x)
                && self.extent.contains(max_x),
            "grid invariant violated: row {y} columns {min_x}..={max_x} outside {:?}",
            self.extent
        );
        let row = y.abs_diff(self.extent.min_xy) as usize * self.range_xy;
        (
            row + min_x.abs_diff(self.extent.min_xy) as usize,
            row + max_x.abs_diff(self.extent.min_xy) as usize,
        )
    }
}
