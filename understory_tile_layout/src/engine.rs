// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The best-fit entry point and its configuration.

use kurbo::Rect;
use smallvec::SmallVec;

use crate::expand::{ExpandParams, expand_pass, grew_past};
use crate::grid::PercentageGrid;
use crate::shrink::shrink_tab;
use crate::tab::{TileTab, TileTabMut};
use crate::types::{CellRect, GridExtent};

/// Parameters controlling tile layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Extent of the occupancy grid on both axes.
    ///
    /// [`GridExtent::PERCENT`] (one cell per percent of the window) by default.
    pub extent: GridExtent,
    /// Cells trimmed off each end of the tab's span when testing lines.
    ///
    /// Expansion starts from the tab pulled in by this many cells, so a neighbor
    /// sharing only a boundary line or corner with the tab does not stop the
    /// edges next to it. Shrinking skips this many cells at each end of an
    /// inner line, since those lie on the tab's own boundary. Spans too short
    /// to trim are tested in full.
    pub corner_offset: i32,
    /// After growing, move each edge whose own line is still free onto the next
    /// line, so that it sits flush against the neighbor (or window edge) instead
    /// of one cell short.
    ///
    /// The result touches neighbors; it never overlaps their interiors.
    pub snap_to_neighbors: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            extent: GridExtent::PERCENT,
            corner_offset: 1,
            snap_to_neighbors: true,
        }
    }
}

/// Resizes a tab to the best fit in its window.
///
/// The engine holds only configuration. Each call rasterizes the other tabs
/// into a fresh [`PercentageGrid`] and drops it before returning.
#[derive(Clone, Copy, Debug, Default)]
pub struct TileLayoutEngine {
    config: LayoutConfig,
}

impl TileLayoutEngine {
    /// Create an engine with the given configuration.
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Rasterize `bounds` into a grid over the configured extent.
    pub fn rasterize<I>(&self, bounds: I) -> PercentageGrid
    where
        I: IntoIterator<Item = Rect>,
    {
        PercentageGrid::from_bounds(self.config.extent, bounds)
    }

    /// Shrink `target` until it no longer covers cells occupied by `others`.
    ///
    /// Edges first erode only across lines that are fully blocked, then, if
    /// that moved anything, across lines that are blocked at all. Erosion
    /// starts from the whole cells inside `target`, and the result is judged
    /// against `target` itself: fractional bounds that round inward count as
    /// a shrink. Returns `None` when no edge ends up inside `target` or the
    /// tab would collapse.
    pub fn shrink_tab(&self, others: &[Rect], target: Rect) -> Option<CellRect> {
        let target = target.abs();
        let grid = self.rasterize(others.iter().copied());
        let start = self.config.extent.snap_inward(target);
        shrink_tab(&grid, target, start, self.config.corner_offset)
    }

    /// Grow `target` into cells not occupied by `others`.
    ///
    /// `start` overrides where growth begins (typically a shrink result); the
    /// outcome is still judged against `target`. With no other tabs the whole
    /// extent is returned. Returns `None` if no edge ends up outside `target`.
    pub fn expand_tab(
        &self,
        others: &[Rect],
        target: Rect,
        start: Option<CellRect>,
    ) -> Option<CellRect> {
        let extent = self.config.extent;
        let target = target.abs();
        if others.is_empty() {
            return Some(extent.full());
        }

        let grid = self.rasterize(others.iter().copied());
        let start = match start {
            Some(cells) => extent.clamp_cells(cells),
            None => extent.snap_outward(target),
        };
        let params = ExpandParams {
            corner_offset: self.config.corner_offset,
            snap_to_neighbors: self.config.snap_to_neighbors,
        };
        let grown = expand_pass(&grid, start, params);
        log::trace!("expand {start:?} -> {grown:?}");
        grew_past(grown, target).then_some(grown)
    }

    /// Resize `target` to fill the empty space around it without overlapping
    /// any other tab in `tabs`.
    ///
    /// `tabs` may or may not contain `target`; it is excluded by key. Returns
    /// the new bounds, or `None` if they would equal the current ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurbo::Rect;
    /// use understory_tile_layout::{TabRect, TileLayoutEngine};
    ///
    /// let engine = TileLayoutEngine::default();
    /// let target = TabRect::new(0_u32, Rect::new(0.0, 0.0, 60.0, 100.0));
    /// let neighbor = TabRect::new(1_u32, Rect::new(40.0, 0.0, 100.0, 100.0));
    ///
    /// let fit = engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target);
    /// assert_eq!(fit, Some(Rect::new(0.0, 0.0, 40.0, 100.0)));
    /// ```
    pub fn shrink_and_expand_to_fill_empty_space<T: TileTab>(
        &self,
        tabs: &[T],
        target: &T,
    ) -> Option<Rect> {
        let key = target.key();
        let original = target.bounds_2d().abs();
        let others: SmallVec<[Rect; 8]> = tabs
            .iter()
            .filter(|tab| tab.key() != key)
            .map(TileTab::bounds_2d)
            .collect();
        log::debug!(
            "best fit for tab {key:?} at {original:?} among {} other tabs",
            others.len()
        );

        let shrunk = self.shrink_tab(&others, original);
        let expanded = self.expand_tab(&others, original, shrunk);
        let Some(cells) = expanded.or(shrunk) else {
            log::debug!("tab {key:?} can neither shrink nor expand");
            return None;
        };

        let fit = cells.to_rect();
        if fit == original {
            log::debug!("tab {key:?} already fits");
            return None;
        }
        log::debug!("tab {key:?} resized to {fit:?}");
        Some(fit)
    }

    /// Compute the best fit for the tab keyed `target` and write it back.
    ///
    /// Returns the new bounds, or `None` if the key is not in `tabs` or the
    /// tab already fits.
    pub fn apply_best_fit<T: TileTabMut>(&self, tabs: &mut [T], target: T::Key) -> Option<Rect> {
        let idx = tabs.iter().position(|tab| tab.key() == target)?;
        let fit = self.shrink_and_expand_to_fill_empty_space(tabs, &tabs[idx])?;
        tabs[idx].set_bounds_2d(fit);
        Some(fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::{TabRect, bounds_overlap};
    use alloc::vec;

    fn tab(key: u32, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> TabRect<u32> {
        TabRect::new(key, Rect::new(min_x, min_y, max_x, max_y))
    }

    #[test]
    fn half_window_beside_touching_neighbor_is_unchanged() {
        let engine = TileLayoutEngine::default();
        let target = tab(0, 0.0, 50.0, 0.0, 100.0);
        let neighbor = tab(1, 50.0, 100.0, 0.0, 100.0);
        let others = [neighbor.bounds];

        assert_eq!(engine.shrink_tab(&others, target.bounds), None);
        assert_eq!(engine.expand_tab(&others, target.bounds, None), None);
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target),
            None
        );
    }

    #[test]
    fn lone_tab_fills_window() {
        let engine = TileLayoutEngine::default();
        let target = tab(0, 0.0, 50.0, 0.0, 50.0);
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[], &target),
            Some(Rect::new(0.0, 0.0, 100.0, 100.0))
        );
        // The target alone in the list is the same as an empty window.
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[target], &target),
            Some(Rect::new(0.0, 0.0, 100.0, 100.0))
        );
    }

    #[test]
    fn full_window_tab_alone_is_a_no_op() {
        let engine = TileLayoutEngine::default();
        let target = tab(0, 0.0, 100.0, 0.0, 100.0);
        // Expand reports the full extent, but it matches the original bounds.
        assert_eq!(
            engine.expand_tab(&[], target.bounds, None),
            Some(CellRect::new(0, 100, 0, 100))
        );
        assert_eq!(engine.shrink_and_expand_to_fill_empty_space(&[], &target), None);
    }

    #[test]
    fn expand_stops_at_neighbor_column() {
        let engine = TileLayoutEngine::default();
        let target = Rect::new(10.0, 10.0, 40.0, 40.0);
        let neighbor = Rect::new(40.0, 0.0, 70.0, 100.0);
        assert_eq!(
            engine.expand_tab(&[neighbor], target, None),
            Some(CellRect::new(0, 40, 0, 100))
        );
    }

    #[test]
    fn overlapping_tab_shrinks_off_neighbor() {
        let engine = TileLayoutEngine::default();
        let target = tab(0, 0.0, 60.0, 0.0, 100.0);
        let neighbor = tab(1, 40.0, 100.0, 0.0, 100.0);

        assert_eq!(
            engine.shrink_tab(&[neighbor.bounds], target.bounds),
            Some(CellRect::new(0, 40, 0, 100))
        );
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target),
            Some(Rect::new(0.0, 0.0, 40.0, 100.0))
        );
    }

    #[test]
    fn shrink_then_expand_reclaims_space() {
        let engine = TileLayoutEngine::default();
        // Target overlaps the right neighbor and leaves a gap at the top.
        let target = tab(0, 0.0, 60.0, 0.0, 80.0);
        let neighbor = tab(1, 40.0, 100.0, 0.0, 100.0);
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target),
            Some(Rect::new(0.0, 0.0, 40.0, 100.0))
        );
    }

    #[test]
    fn grows_into_gap_between_neighbors() {
        let engine = TileLayoutEngine::default();
        let left = tab(1, 0.0, 30.0, 0.0, 100.0);
        let right = tab(2, 70.0, 100.0, 0.0, 100.0);
        let target = tab(0, 40.0, 60.0, 20.0, 80.0);
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[left, target, right], &target),
            Some(Rect::new(30.0, 0.0, 70.0, 100.0))
        );
    }

    #[test]
    fn diagonal_neighbor_is_not_overlapped() {
        let engine = TileLayoutEngine::default();
        let target = tab(0, 10.0, 40.0, 10.0, 40.0);
        let corner = tab(1, 0.0, 10.0, 0.0, 10.0);

        let fit = engine.shrink_and_expand_to_fill_empty_space(&[target, corner], &target);
        assert_eq!(fit, Some(Rect::new(10.0, 10.0, 100.0, 100.0)));
        assert!(!bounds_overlap(Rect::new(10.0, 10.0, 100.0, 100.0), corner.bounds));
    }

    #[test]
    fn fractional_target_shrinks_to_whole_cells() {
        let engine = TileLayoutEngine::default();
        let neighbor = Rect::new(70.0, 0.0, 100.0, 100.0);
        assert_eq!(
            engine.shrink_tab(&[neighbor], Rect::new(0.0, 0.0, 60.4, 100.0)),
            Some(CellRect::new(0, 60, 0, 100))
        );
        assert_eq!(
            engine.shrink_tab(&[neighbor], Rect::new(0.0, 0.0, 60.0, 100.0)),
            None
        );
    }

    #[test]
    fn fractional_bounds_snap_to_cells() {
        let engine = TileLayoutEngine::default();
        let target = tab(0, 0.0, 49.6, 0.0, 100.0);
        let neighbor = tab(1, 50.0, 100.0, 0.0, 100.0);
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target),
            Some(Rect::new(0.0, 0.0, 50.0, 100.0))
        );
    }

    #[test]
    fn apply_best_fit_writes_bounds_back() {
        let engine = TileLayoutEngine::default();
        let mut tabs = vec![
            tab(0, 0.0, 50.0, 0.0, 50.0),
            tab(1, 50.0, 100.0, 0.0, 100.0),
        ];

        let fit = engine.apply_best_fit(&mut tabs, 0);
        assert_eq!(fit, Some(Rect::new(0.0, 0.0, 50.0, 100.0)));
        assert_eq!(tabs[0].bounds, Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(tabs[1].bounds, Rect::new(50.0, 0.0, 100.0, 100.0));

        // Applying again is a no-op, and unknown keys are ignored.
        assert_eq!(engine.apply_best_fit(&mut tabs, 0), None);
        assert_eq!(engine.apply_best_fit(&mut tabs, 9), None);
    }

    #[test]
    fn custom_extent() {
        let engine = TileLayoutEngine::new(LayoutConfig {
            extent: GridExtent::new(0, 10),
            ..LayoutConfig::default()
        });
        let target = tab(0, 2.0, 4.0, 2.0, 4.0);
        let neighbor = tab(1, 6.0, 10.0, 0.0, 10.0);
        assert_eq!(
            engine.shrink_and_expand_to_fill_empty_space(&[target, neighbor], &target),
            Some(Rect::new(0.0, 0.0, 6.0, 10.0))
        );
    }
}
