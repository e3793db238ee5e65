// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::GridExtent;

/// Map an already whole-valued coordinate onto a cell of `extent`, saturating at its ends.
#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped into the i32 extent before the cast."
)]
#[inline]
pub(crate) fn cell_coord(value: f64, extent: GridExtent) -> i32 {
    debug_assert!(!value.is_nan(), "tile bounds must not be NaN");
    if value.is_nan() {
        return extent.min_xy;
    }
    value.clamp(f64::from(extent.min_xy), f64::from(extent.max_xy)) as i32
}

/// Shrink `lo..=hi` by `offset` at both ends, or keep it whole when too short to trim.
#[inline]
pub(crate) const fn trim_ends(lo: i32, hi: i32, offset: i32) -> (i32, i32) {
    if offset > 0 && hi - offset >= lo + offset {
        (lo + offset, hi - offset)
    } else {
        (lo, hi)
    }
}
