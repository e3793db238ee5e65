// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer cell ranges and the grid extent they live in.

use kurbo::Rect;

use crate::util::cell_coord;

/// Inclusive range of grid cells: `min_x..=max_x` by `min_y..=max_y`.
///
/// Field order follows the tile-tab convention of `(min_x, max_x, min_y, max_y)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Minimum x (left column)
    pub min_x: i32,
    /// Maximum x (right column)
    pub max_x: i32,
    /// Minimum y (bottom row)
    pub min_y: i32,
    /// Maximum y (top row)
    pub max_y: i32,
}

impl CellRect {
    /// Create a new cell range from its four inclusive bounds.
    #[inline(always)]
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// A single row `y` spanning `min_x..=max_x`.
    #[inline]
    pub const fn row(y: i32, min_x: i32, max_x: i32) -> Self {
        Self::new(min_x, max_x, y, y)
    }

    /// A single column `x` spanning `min_y..=max_y`.
    #[inline]
    pub const fn column(x: i32, min_y: i32, max_y: i32) -> Self {
        Self::new(x, x, min_y, max_y)
    }

    /// Whether both axes satisfy `min <= max`.
    #[inline]
    pub const fn is_well_formed(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Return true if the range has no extent on at least one axis.
    ///
    /// A single row or column of cells has zero extent as a rectangle, so it is collapsed.
    #[inline]
    pub const fn is_collapsed(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }

    /// Convert back to percentage-space bounds.
    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.min_x),
            f64::from(self.min_y),
            f64::from(self.max_x),
            f64::from(self.max_y),
        )
    }
}

/// Closed integer range `[min_xy, max_xy]` covered by a grid on both axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridExtent {
    /// Smallest cell coordinate on either axis.
    pub min_xy: i32,
    /// Largest cell coordinate on either axis.
    pub max_xy: i32,
}

impl GridExtent {
    /// Percentage coordinates: `[0, 100]`, one cell per percent.
    pub const PERCENT: Self = Self::new(0, 100);

    /// Create a new extent.
    #[inline(always)]
    pub const fn new(min_xy: i32, max_xy: i32) -> Self {
        Self { min_xy, max_xy }
    }

    /// Whether `min_xy <= max_xy`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.min_xy <= self.max_xy
    }

    /// Number of cells per side. Zero for an inverted extent.
    #[inline]
    pub const fn range_xy(&self) -> usize {
        if self.is_valid() {
            self.max_xy.abs_diff(self.min_xy) as usize + 1
        } else {
            0
        }
    }

    /// Whether `v` is a cell coordinate of this extent.
    #[inline]
    pub const fn contains(&self, v: i32) -> bool {
        self.min_xy <= v && v <= self.max_xy
    }

    /// Whether every cell of `cells` lies inside this extent.
    #[inline]
    pub const fn contains_cells(&self, cells: &CellRect) -> bool {
        self.contains(cells.min_x)
            && self.contains(cells.max_x)
            && self.contains(cells.min_y)
            && self.contains(cells.max_y)
    }

    /// Clamp a cell coordinate into this extent.
    #[inline]
    pub const fn clamp(&self, v: i32) -> i32 {
        if v < self.min_xy {
            self.min_xy
        } else if v > self.max_xy {
            self.max_xy
        } else {
            v
        }
    }

    /// Clamp all four bounds of `cells` into this extent.
    #[inline]
    pub const fn clamp_cells(&self, cells: CellRect) -> CellRect {
        CellRect::new(
            self.clamp(cells.min_x),
            self.clamp(cells.max_x),
            self.clamp(cells.min_y),
            self.clamp(cells.max_y),
        )
    }

    /// The whole extent as a cell range.
    #[inline]
    pub const fn full(&self) -> CellRect {
        CellRect::new(self.min_xy, self.max_xy, self.min_xy, self.max_xy)
    }

    /// Every cell touched by `bounds`: floor of the minimums, ceil of the maximums, clamped.
    pub fn snap_outward(&self, bounds: Rect) -> CellRect {
        self.clamped_cells(bounds.abs().expand())
    }

    /// Only the cells fully inside `bounds`: ceil of the minimums, floor of the maximums, clamped.
    pub fn snap_inward(&self, bounds: Rect) -> CellRect {
        self.clamped_cells(bounds.abs().trunc())
    }

    fn clamped_cells(&self, whole: Rect) -> CellRect {
        CellRect::new(
            cell_coord(whole.x0, *self),
            cell_coord(whole.x1, *self),
            cell_coord(whole.y0, *self),
            cell_coord(whole.y1, *self),
        )
    }
}

impl Default for GridExtent {
    fn default() -> Self {
        Self::PERCENT
    }
}
