// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grow a tab's edges into free cells.

use kurbo::Rect;

use crate::edges::{EdgeCursor, Edges};
use crate::grid::PercentageGrid;
use crate::types::CellRect;
use crate::util::trim_ends;

/// Tuning for [`expand_pass`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct ExpandParams {
    /// Cells each edge is pulled in by before growing.
    pub(crate) corner_offset: i32,
    /// Move free edges one final cell so they land on the neighbor's boundary line.
    pub(crate) snap_to_neighbors: bool,
}

/// Grow every edge of `start` outward, one cell per iteration, while the line
/// just outside it is free.
///
/// Growth starts from `start` pulled in by `corner_offset` cells on each side,
/// so a neighbor sharing only a boundary line or a corner point with the tab
/// does not block the edges next to it. Whole lines are tested from there on.
/// The result never gives up a cell of `start`.
pub(crate) fn expand_pass(
    grid: &PercentageGrid,
    start: CellRect,
    params: ExpandParams,
) -> CellRect {
    let extent = grid.extent();
    let (min_x, max_x) = trim_ends(start.min_x, start.max_x, params.corner_offset);
    let (min_y, max_y) = trim_ends(start.min_y, start.max_y, params.corner_offset);

    let mut cursor = EdgeCursor::new(CellRect::new(min_x, max_x, min_y, max_y));
    cursor.finish_at_boundary(extent);

    while !cursor.is_done() {
        let CellRect {
            min_x: xl,
            max_x: xr,
            min_y: yb,
            max_y: yt,
        } = cursor.cells;

        if cursor.is_moving(Edges::BOTTOM) {
            if grid.is_range_off(CellRect::row(yb - 1, xl, xr)) {
                cursor.cells.min_y -= 1;
            } else {
                cursor.finish(Edges::BOTTOM);
            }
        }

        if cursor.is_moving(Edges::TOP) {
            if grid.is_range_off(CellRect::row(yt + 1, xl, xr)) {
                cursor.cells.max_y += 1;
            } else {
                cursor.finish(Edges::TOP);
            }
        }

        if cursor.is_moving(Edges::LEFT) {
            if grid.is_range_off(CellRect::column(xl - 1, yb, yt)) {
                cursor.cells.min_x -= 1;
            } else {
                cursor.finish(Edges::LEFT);
            }
        }

        if cursor.is_moving(Edges::RIGHT) {
            if grid.is_range_off(CellRect::column(xr + 1, yb, yt)) {
                cursor.cells.max_x += 1;
            } else {
                cursor.finish(Edges::RIGHT);
            }
        }

        cursor.finish_at_boundary(extent);
    }

    let mut cells = cursor.cells;
    if params.snap_to_neighbors {
        snap_edges(grid, &mut cells);
    }
    CellRect::new(
        cells.min_x.min(start.min_x),
        cells.max_x.max(start.max_x),
        cells.min_y.min(start.min_y),
        cells.max_y.max(start.max_y),
    )
}

// The grow loop stops one line short of a neighbor. Each edge whose own line
// is still free moves onto the next one, which is the neighbor's boundary:
// the edges end up touching, sharing that line, with no interior overlap.
fn snap_edges(grid: &PercentageGrid, cells: &mut CellRect) {
    let extent = grid.extent();
    let CellRect {
        min_x: xl,
        max_x: xr,
        min_y: yb,
        max_y: yt,
    } = *cells;

    if grid.is_range_off(CellRect::column(xl, yb, yt)) {
        cells.min_x = extent.clamp(xl - 1);
    }
    if grid.is_range_off(CellRect::column(xr, yb, yt)) {
        cells.max_x = extent.clamp(xr + 1);
    }
    if grid.is_range_off(CellRect::row(yb, xl, xr)) {
        cells.min_y = extent.clamp(yb - 1);
    }
    if grid.is_range_off(CellRect::row(yt, xl, xr)) {
        cells.max_y = extent.clamp(yt + 1);
    }
}

/// Whether any edge of `cells` lies outside the matching edge of `original`.
pub(crate) fn grew_past(cells: CellRect, original: Rect) -> bool {
    f64::from(cells.min_x) < original.x0
        || f64::from(cells.max_x) > original.x1
        || f64::from(cells.min_y) < original.y0
        || f64::from(cells.max_y) > original.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridExtent;

    const PARAMS: ExpandParams = ExpandParams {
        corner_offset: 1,
        snap_to_neighbors: true,
    };

    fn grid_of(bounds: &[Rect]) -> PercentageGrid {
        PercentageGrid::from_bounds(GridExtent::PERCENT, bounds.iter().copied())
    }

    #[test]
    fn grows_to_window_edges_but_not_into_neighbor() {
        let grid = grid_of(&[Rect::new(40.0, 0.0, 70.0, 100.0)]);
        let grown = expand_pass(&grid, CellRect::new(10, 40, 10, 40), PARAMS);
        assert_eq!(grown, CellRect::new(0, 40, 0, 100));
    }

    #[test]
    fn snap_lands_flush_against_neighbor() {
        let grid = grid_of(&[Rect::new(60.0, 0.0, 100.0, 100.0)]);
        let grown = expand_pass(&grid, CellRect::new(0, 30, 0, 100), PARAMS);
        assert_eq!(grown, CellRect::new(0, 60, 0, 100));

        // Without the snap the edge stops one column short.
        let no_snap = ExpandParams {
            snap_to_neighbors: false,
            ..PARAMS
        };
        let grown = expand_pass(&grid, CellRect::new(0, 30, 0, 100), no_snap);
        assert_eq!(grown, CellRect::new(0, 59, 0, 100));
    }

    #[test]
    fn touching_neighbor_blocks_growth() {
        let grid = grid_of(&[Rect::new(50.0, 0.0, 100.0, 100.0)]);
        let start = CellRect::new(0, 50, 0, 100);
        let grown = expand_pass(&grid, start, PARAMS);
        assert_eq!(grown, start);
        assert!(!grew_past(grown, Rect::new(0.0, 0.0, 50.0, 100.0)));
    }

    #[test]
    fn diagonal_neighbor_is_only_touched_at_its_corner() {
        // Neighbor in the lower-left meets the target only at the corner point (10, 10).
        let grid = grid_of(&[Rect::new(0.0, 0.0, 10.0, 10.0)]);
        let start = CellRect::new(10, 40, 10, 40);

        let grown = expand_pass(&grid, start, PARAMS);
        assert_eq!(grown, CellRect::new(10, 100, 10, 100));

        let no_offset = ExpandParams {
            corner_offset: 0,
            ..PARAMS
        };
        assert_eq!(expand_pass(&grid, start, no_offset), grown);
    }

    #[test]
    fn shared_edge_does_not_block_perpendicular_growth() {
        // A neighbor below shares the target's bottom line and runs past its right edge.
        let grid = grid_of(&[Rect::new(0.0, 0.0, 100.0, 20.0)]);
        let start = CellRect::new(0, 40, 20, 40);
        assert_eq!(
            expand_pass(&grid, start, PARAMS),
            CellRect::new(0, 100, 20, 100)
        );

        // Without the offset, the shared line stops the right edge where it is.
        let no_offset = ExpandParams {
            corner_offset: 0,
            ..PARAMS
        };
        assert_eq!(
            expand_pass(&grid, start, no_offset),
            CellRect::new(0, 40, 20, 100)
        );
    }

    #[test]
    fn overlapping_start_is_kept() {
        let grid = grid_of(&[Rect::new(40.0, 0.0, 100.0, 100.0)]);
        let start = CellRect::new(0, 60, 0, 100);
        assert_eq!(expand_pass(&grid, start, PARAMS), start);
    }

    #[test]
    fn expansion_is_monotonic() {
        let grid = grid_of(&[
            Rect::new(0.0, 0.0, 30.0, 30.0),
            Rect::new(70.0, 70.0, 100.0, 100.0),
        ]);
        let start = CellRect::new(35, 65, 35, 65);
        let grown = expand_pass(&grid, start, PARAMS);
        assert!(grown.min_x <= start.min_x);
        assert!(grown.max_x >= start.max_x);
        assert!(grown.min_y <= start.min_y);
        assert!(grown.max_y >= start.max_y);
        assert!(grew_past(grown, start.to_rect()));
    }

    #[test]
    fn thin_target_grows_with_full_line_tests() {
        let grid = grid_of(&[Rect::new(0.0, 0.0, 100.0, 10.0)]);
        let grown = expand_pass(&grid, CellRect::new(50, 51, 50, 51), PARAMS);
        assert_eq!(grown, CellRect::new(0, 100, 10, 100));
    }
}
