// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge cursor shared by the shrink and expand passes.

use crate::types::{CellRect, GridExtent};

bitflags::bitflags! {
    /// Edges of a tab that have stopped moving.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct Edges: u8 {
        /// Minimum x.
        const LEFT   = 0b0000_0001;
        /// Maximum x.
        const RIGHT  = 0b0000_0010;
        /// Minimum y.
        const BOTTOM = 0b0000_0100;
        /// Maximum y.
        const TOP    = 0b0000_1000;
    }
}

/// Four edge positions moving one cell per iteration, and which of them are finished.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeCursor {
    pub(crate) cells: CellRect,
    pub(crate) done: Edges,
}

impl EdgeCursor {
    pub(crate) const fn new(cells: CellRect) -> Self {
        Self {
            cells,
            done: Edges::empty(),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done.is_all()
    }

    pub(crate) fn is_moving(&self, edge: Edges) -> bool {
        !self.done.contains(edge)
    }

    pub(crate) fn finish(&mut self, edge: Edges) {
        self.done |= edge;
    }

    /// Stop edges sitting on the grid boundary they would move toward when growing.
    pub(crate) fn finish_at_boundary(&mut self, extent: GridExtent) {
        let c = self.cells;
        if c.min_x <= extent.min_xy {
            self.finish(Edges::LEFT);
        }
        if c.max_x >= extent.max_xy {
            self.finish(Edges::RIGHT);
        }
        if c.min_y <= extent.min_xy {
            self.finish(Edges::BOTTOM);
        }
        if c.max_y >= extent.max_xy {
            self.finish(Edges::TOP);
        }
    }

    /// Stop edges that have been pushed all the way to the opposite grid boundary.
    pub(crate) fn finish_at_opposite_boundary(&mut self, extent: GridExtent) {
        let c = self.cells;
        if c.min_x >= extent.max_xy {
            self.finish(Edges::LEFT);
        }
        if c.max_x <= extent.min_xy {
            self.finish(Edges::RIGHT);
        }
        if c.min_y >= extent.max_xy {
            self.finish(Edges::BOTTOM);
        }
        if c.max_y <= extent.min_xy {
            self.finish(Edges::TOP);
        }
    }

    /// Stop both edges of any axis with no remaining extent.
    pub(crate) fn finish_collapsed(&mut self) {
        let c = self.cells;
        if c.min_x >= c.max_x {
            self.finish(Edges::LEFT | Edges::RIGHT);
        }
        if c.min_y >= c.max_y {
            self.finish(Edges::BOTTOM | Edges::TOP);
        }
    }
}
