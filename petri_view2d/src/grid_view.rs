// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::extent::ViewExtent;

/// Initial zoom level: the viewport width is divided by `2^3` cells.
const INITIAL_SUBDIVISIONS: i32 = 3;

/// View state for a panable, zoomable grid.
///
/// `GridView` tracks:
/// - `cell_size`: pixel extent of one grid cell, always positive.
/// - `offset`: pan vector in pixels, unbounded.
/// - `subdivisions`: informational zoom level in `[1, max_subdivisions]`.
/// - `cursor`: last observed pointer position, in grid coordinates.
///
/// All coordinate conversion is exact integer arithmetic; see the crate
/// docs for the sign convention in [`view_to_grid`](Self::view_to_grid).
#[derive(Clone, Copy, Debug)]
pub struct GridView {
    subdivisions: i32,
    cell_size: i32,
    offset: (i32, i32),
    cursor: (i32, i32),
}

impl GridView {
    /// Creates a view sized for `extent`, centered on the grid origin.
    ///
    /// The initial cell size divides the viewport width into `2^3` cells,
    /// clamped to at least one pixel.
    #[must_use]
    pub fn new(extent: ViewExtent) -> Self {
        Self {
            subdivisions: INITIAL_SUBDIVISIONS,
            cell_size: (extent.width >> INITIAL_SUBDIVISIONS).max(1),
            offset: (0, 0),
            cursor: (0, 0),
        }
    }

    /// Current zoom level.
    #[must_use]
    pub fn subdivisions(&self) -> i32 {
        self.subdivisions
    }

    /// Pixel extent of one cell. Always positive.
    #[must_use]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Current pan offset in pixels.
    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Last observed pointer position, in grid coordinates.
    #[must_use]
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Records the pointer position in grid coordinates.
    pub fn set_cursor(&mut self, cursor: (i32, i32)) {
        self.cursor = cursor;
    }

    /// Upper zoom bound for `extent`: how many times the viewport can be
    /// halved along its shorter axis before cells become sub-pixel.
    ///
    /// Returns `min(floor(log2(width)), floor(log2(height)))`, or zero for
    /// a degenerate extent.
    #[must_use]
    pub fn max_subdivisions(extent: ViewExtent) -> i32 {
        #[expect(clippy::cast_possible_truncation, reason = "ilog2 of an i32 fits in i32")]
        fn floor_log2(v: i32) -> i32 {
            if v <= 0 { 0 } else { v.ilog2() as i32 }
        }
        floor_log2(extent.width).min(floor_log2(extent.height))
    }

    /// Zooms in one level, silently rejected at the upper bound.
    pub fn increment_subdivisions(&mut self, extent: ViewExtent) {
        if self.subdivisions < Self::max_subdivisions(extent) {
            self.subdivisions += 1;
        }
    }

    /// Zooms out one level, silently rejected below 1.
    pub fn decrement_subdivisions(&mut self) {
        if self.subdivisions > 1 {
            self.subdivisions -= 1;
        }
    }

    /// Grows or shrinks the cell size by `delta` pixels.
    ///
    /// Returns `false` and leaves the state unchanged when the result would
    /// be non-positive. This is the only guard keeping the divisor in
    /// [`view_to_grid`](Self::view_to_grid) away from zero.
    pub fn adjust_cell_size(&mut self, delta: i32) -> bool {
        let new_size = self.cell_size + delta;
        if new_size > 0 {
            self.cell_size = new_size;
            true
        } else {
            false
        }
    }

    /// Moves the pan offset by `(dx, dy)` pixels. Unbounded.
    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
    }

    /// Resets the pan offset to `(0, 0)`.
    pub fn reset_pan(&mut self) {
        self.offset = (0, 0);
    }

    /// Viewport x of the center of grid column `coord_x`.
    #[must_use]
    pub fn grid_to_view_x(&self, coord_x: i32, extent: ViewExtent) -> i32 {
        coord_x * self.cell_size + self.offset.0 + extent.width / 2
    }

    /// Viewport y of the center of grid row `coord_y`.
    #[must_use]
    pub fn grid_to_view_y(&self, coord_y: i32, extent: ViewExtent) -> i32 {
        coord_y * self.cell_size + self.offset.1 + extent.height / 2
    }

    /// Viewport position of the center of grid cell `coord`.
    #[must_use]
    pub fn grid_to_view(&self, coord: (i32, i32), extent: ViewExtent) -> (i32, i32) {
        (
            self.grid_to_view_x(coord.0, extent),
            self.grid_to_view_y(coord.1, extent),
        )
    }

    /// Grid column containing viewport pixel `x`.
    ///
    /// Centers the pixel on the view, shifts by half a cell so the cell
    /// origin sits at the cell center, then divides by the cell size. The
    /// quotient is decremented when the adjusted value is negative:
    /// truncating division alone would round small negative values toward
    /// zero and misfile pixels just left of center into cell 0.
    #[must_use]
    pub fn view_to_grid_x(&self, x: i32, extent: ViewExtent) -> i32 {
        let adjusted = x - self.offset.0 - extent.width / 2 + self.cell_size / 2;
        let coord = adjusted / self.cell_size;
        if adjusted < 0 { coord - 1 } else { coord }
    }

    /// Grid row containing viewport pixel `y`.
    #[must_use]
    pub fn view_to_grid_y(&self, y: i32, extent: ViewExtent) -> i32 {
        let adjusted = y - self.offset.1 - extent.height / 2 + self.cell_size / 2;
        let coord = adjusted / self.cell_size;
        if adjusted < 0 { coord - 1 } else { coord }
    }

    /// Grid cell containing the viewport pixel `p`.
    #[must_use]
    pub fn view_to_grid(&self, p: (i32, i32), extent: ViewExtent) -> (i32, i32) {
        (
            self.view_to_grid_x(p.0, extent),
            self.view_to_grid_y(p.1, extent),
        )
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GridViewDebugInfo {
        GridViewDebugInfo {
            subdivisions: self.subdivisions,
            cell_size: self.cell_size,
            offset: self.offset,
            cursor: self.cursor,
        }
    }
}

/// Debug snapshot of a [`GridView`] state.
#[derive(Clone, Copy, Debug)]
pub struct GridViewDebugInfo {
    /// Current zoom level.
    pub subdivisions: i32,
    /// Pixel extent of one cell.
    pub cell_size: i32,
    /// Pan offset in pixels.
    pub offset: (i32, i32),
    /// Last observed pointer position in grid coordinates.
    pub cursor: (i32, i32),
}
