// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view of a tab the layout engine needs: an identity and its bounds.

use core::fmt::Debug;

use kurbo::{Point, Rect, Size};

/// A tab laid out in a window, in percentage coordinates.
pub trait TileTab {
    /// Identity used to tell the layout target apart from its neighbors.
    type Key: Copy + Eq + Debug;

    /// This tab's identity.
    fn key(&self) -> Self::Key;

    /// Bounds in percentage-of-window units (`x0`/`x1` are min/max x, `y0`/`y1` min/max y).
    fn bounds_2d(&self) -> Rect;
}

/// A tab whose bounds can be written back after layout.
pub trait TileTabMut: TileTab {
    /// Replace the bounds of this tab.
    fn set_bounds_2d(&mut self, bounds: Rect);
}

/// Whether two tabs overlap.
///
/// A tab always overlaps itself, whatever its bounds. Otherwise the bounds
/// are compared with [`bounds_overlap`]. Display state plays no part.
pub fn intersection_test<T: TileTab>(a: &T, b: &T) -> bool {
    a.key() == b.key() || bounds_overlap(a.bounds_2d(), b.bounds_2d())
}

/// Whether two bounds overlap.
///
/// Separation requires one rectangle to lie entirely on one side of the
/// other. Note that this is not the grid's notion of touching: here bounds
/// meeting exactly at an edge are reported as *separate*, while the grid
/// rasterizes a shared edge into a line of cells both tabs occupy.
///
/// # Examples
///
/// ```
/// use kurbo::Rect;
/// use understory_tile_layout::bounds_overlap;
///
/// let left = Rect::new(0.0, 0.0, 50.0, 100.0);
/// let right = Rect::new(50.0, 0.0, 100.0, 100.0);
/// assert!(!bounds_overlap(left, right));
///
/// let wide = Rect::new(0.0, 0.0, 60.0, 100.0);
/// assert!(bounds_overlap(wide, right));
/// ```
pub fn bounds_overlap(a: Rect, b: Rect) -> bool {
    // `a` is right of `b`, `b` is right of `a`, `a` is above `b`, `b` is above `a`.
    !(a.x0 >= b.x1 || b.x0 >= a.x1 || a.y0 >= b.y1 || b.y0 >= a.y1)
}

/// A plain tab: a key, its bounds, and whether it is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabRect<K> {
    /// Identity of the tab.
    pub key: K,
    /// Bounds in percentage coordinates.
    pub bounds: Rect,
    /// Whether the tab is displayed. Layout ignores this.
    pub displayed: bool,
}

impl<K> TabRect<K> {
    /// Create a displayed tab with the given bounds.
    pub fn new(key: K, bounds: Rect) -> Self {
        Self {
            key,
            bounds: bounds.abs(),
            displayed: true,
        }
    }

    /// Create a displayed tab from its center point and size.
    pub fn from_center_size(key: K, center: impl Into<Point>, size: impl Into<Size>) -> Self {
        Self::new(key, Rect::from_center_size(center, size))
    }

    /// Center of the tab.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Width and height of the tab.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }
}

impl<K: Copy + Eq + Debug> TileTab for TabRect<K> {
    type Key = K;

    fn key(&self) -> K {
        self.key
    }

    fn bounds_2d(&self) -> Rect {
        self.bounds
    }
}

impl<K: Copy + Eq + Debug> TileTabMut for TabRect<K> {
    fn set_bounds_2d(&mut self, bounds: Rect) {
        self.bounds = bounds.abs();
    }
}
