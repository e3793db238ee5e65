// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Erode a tab's edges until it stops covering occupied cells.

use kurbo::Rect;

use crate::edges::{EdgeCursor, Edges};
use crate::grid::{Coverage, PercentageGrid};
use crate::types::CellRect;
use crate::util::trim_ends;

/// When an edge gives up a line of cells during a shrink pass.
///
/// Each edge looks at the line of cells just inside it, across the tab's
/// current span on the other axis less `corner_offset` cells at each end, and
/// moves inward one cell if the line is blocked by a neighbor. The skipped end
/// cells lie on the tab's own boundary, which a touching neighbor may share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Erosion {
    /// Erode only when the whole line is occupied.
    ///
    /// A neighbor that merely clips a corner of the tab never pulls an edge in.
    Conservative,
    /// Erode when any cell of the line is occupied.
    Aggressive,
}

impl Erosion {
    const fn coverage(self) -> Coverage {
        match self {
            Self::Conservative => Coverage::All,
            Self::Aggressive => Coverage::Any,
        }
    }
}

/// Run one erosion loop starting from `start`.
///
/// Returns the eroded cells, which may equal `start`, or `None` when the tab
/// collapsed on either axis.
pub(crate) fn shrink_pass(
    grid: &PercentageGrid,
    start: CellRect,
    erosion: Erosion,
    corner_offset: i32,
) -> Option<CellRect> {
    let extent = grid.extent();
    let coverage = erosion.coverage();

    let mut cursor = EdgeCursor::new(start);
    cursor.finish_at_boundary(extent);
    cursor.finish_collapsed();

    while !cursor.is_done() {
        // Every edge tests against the span as it was when this iteration began.
        let CellRect {
            min_x: xl,
            max_x: xr,
            min_y: yb,
            max_y: yt,
        } = cursor.cells;
        let (x0, x1) = trim_ends(xl, xr, corner_offset);
        let (y0, y1) = trim_ends(yb, yt, corner_offset);

        if cursor.is_moving(Edges::BOTTOM) {
            if grid.reduce(CellRect::row(yb + 1, x0, x1), coverage) {
                cursor.cells.min_y += 1;
            } else {
                cursor.finish(Edges::BOTTOM);
            }
        }

        if cursor.is_moving(Edges::TOP) {
            if grid.reduce(CellRect::row(yt - 1, x0, x1), coverage) {
                cursor.cells.max_y -= 1;
            } else {
                cursor.finish(Edges::TOP);
            }
        }

        if cursor.is_moving(Edges::LEFT) {
            if grid.reduce(CellRect::column(xl + 1, y0, y1), coverage) {
                cursor.cells.min_x += 1;
            } else {
                cursor.finish(Edges::LEFT);
            }
        }

        if cursor.is_moving(Edges::RIGHT) {
            if grid.reduce(CellRect::column(xr - 1, y0, y1), coverage) {
                cursor.cells.max_x -= 1;
            } else {
                cursor.finish(Edges::RIGHT);
            }
        }

        cursor.finish_at_opposite_boundary(extent);
        cursor.finish_collapsed();
    }

    let cells = cursor.cells;
    if cells.is_collapsed() {
        log::trace!("{erosion:?} shrink of {start:?} collapsed to {cells:?}");
        return None;
    }
    log::trace!("{erosion:?} shrink {start:?} -> {cells:?}");
    Some(cells)
}

/// Whether any edge of `cells` lies inside the matching edge of `original`.
pub(crate) fn shrank_within(cells: CellRect, original: Rect) -> bool {
    f64::from(cells.min_x) > original.x0
        || f64::from(cells.max_x) < original.x1
        || f64::from(cells.min_y) > original.y0
        || f64::from(cells.max_y) < original.y1
}

/// Shrink `start`, the cells inside `original`, off the occupied cells of `grid`
/// in two passes.
///
/// The conservative pass must leave an edge inside `original`, otherwise
/// there is nothing to do. The aggressive pass then continues from that
/// result and only refines it; if it collapses, the conservative result stands.
pub(crate) fn shrink_tab(
    grid: &PercentageGrid,
    original: Rect,
    start: CellRect,
    corner_offset: i32,
) -> Option<CellRect> {
    let conservative = shrink_pass(grid, start, Erosion::Conservative, corner_offset)?;
    if !shrank_within(conservative, original) {
        return None;
    }
    Some(
        shrink_pass(grid, conservative, Erosion::Aggressive, corner_offset)
            .unwrap_or(conservative),
    )
}
