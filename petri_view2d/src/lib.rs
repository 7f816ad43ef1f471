// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petri View 2D: pan/zoom view state over an unbounded cell grid.
//!
//! This crate provides a small, headless model of the view onto Petri's
//! logical grid:
//! - View state: cell size in pixels, pan offset, zoom level
//!   (subdivisions), and the last observed cursor cell.
//! - Coordinate conversion between viewport pixel space and discrete grid
//!   cells, in both directions.
//! - Zoom bounds derived from the viewport extent.
//!
//! It does **not** own any cell store or rendering backend. Callers are
//! expected to:
//! - Maintain the live-cell set elsewhere (for example `petri_grid`).
//! - Use [`GridView`] to decide which cell a pixel belongs to and where a
//!   cell's origin lands on screen.
//! - Wire input events into pan/zoom operations at a higher layer (for
//!   example `petri_event_state`).
//!
//! ## Integer arithmetic
//!
//! Unlike a continuous camera model, the mapping here is exact integer
//! arithmetic: grid coordinates, pixel positions, the pan offset, and the
//! cell size are all `i32`. The viewport-to-grid direction uses truncating
//! division with a decrement whenever the centered, adjusted pixel value is
//! negative, so pixels left of or above the view center resolve to cells on
//! the negative side rather than rounding toward cell zero. Rendering and
//! interaction must share this exact mapping to agree on which cell a pixel
//! belongs to.
//!
//! ## Minimal example
//!
//! ```rust
//! use petri_view2d::{GridView, ViewExtent};
//!
//! let extent = ViewExtent::new(640, 480);
//! let mut view = GridView::new(extent);
//!
//! // The view centers grid cell (0, 0) on the viewport.
//! let (px, py) = view.grid_to_view((0, 0), extent);
//! assert_eq!((px, py), (320, 240));
//! assert_eq!(view.view_to_grid((px, py), extent), (0, 0));
//!
//! // Pan right by one cell; the origin cell moves with it.
//! view.pan_by(view.cell_size(), 0);
//! assert_eq!(view.grid_to_view((0, 0), extent).0, 320 + view.cell_size());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod extent;
mod grid_view;

pub use extent::ViewExtent;
pub use grid_view::{GridView, GridViewDebugInfo};
