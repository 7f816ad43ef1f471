// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petri Event State: the interaction state machine for grid editing.
//!
//! This crate turns a stream of raw input events into coherent edit
//! operations on a Petri world: click-toggle, drag-paint, pattern stamping,
//! panning, and zooming. It sits between a host input backend (which
//! produces [`InputEvent`] values) and the two leaf crates it drives:
//! `petri_grid` (cell mutation) and `petri_view2d` (pan/zoom state).
//!
//! ## The state machine
//!
//! [`Interaction`] is a four-phase machine
//! ([`Idle`](Phase::Idle) / [`PaintingAdd`](Phase::PaintingAdd) /
//! [`PaintingRemove`](Phase::PaintingRemove) / [`Panning`](Phase::Panning))
//! plus an independent running flag for continuous stepping:
//!
//! - Primary button down toggles the cell under the pointer; the toggle
//!   result selects the painting phase, so dragging keeps adding (or keeps
//!   removing) until the button is released.
//! - Secondary button down starts a pan drag; motion deltas accumulate into
//!   the view's pixel offset.
//! - Painting and panning are gated on different physical buttons and can
//!   never be active at the same time.
//! - Wheel and key commands act in every phase: cell-size zoom, arrow-key
//!   panning, pan reset, run/pause/single-step, and the R-pentomino stamp
//!   at the cursor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use petri_event_state::{Interaction, InputEvent, Outcome, Phase, PointerButton};
//! use petri_grid::{Color, ColorSource, LifeGrid};
//! use petri_view2d::{GridView, ViewExtent};
//!
//! struct White;
//! impl ColorSource for White {
//!     fn next_color(&mut self) -> Color {
//!         Color::new(255, 255, 255)
//!     }
//! }
//!
//! let extent = ViewExtent::new(640, 480);
//! let mut grid = LifeGrid::new();
//! let mut view = GridView::new(extent);
//! let mut interaction = Interaction::new();
//! let mut colors = White;
//!
//! // Click the view center: cell (0, 0) toggles on and painting begins.
//! let down = InputEvent::PointerDown {
//!     button: PointerButton::Primary,
//!     pos: Point::new(320.0, 240.0),
//! };
//! let outcome = interaction.handle(&down, &mut grid, &mut view, extent, &mut colors);
//! assert_eq!(outcome, Outcome::Continue);
//! assert_eq!(interaction.phase(), Phase::PaintingAdd);
//! assert!(grid.contains(petri_grid::Coord::new(0, 0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod event;
mod interaction;

pub use drag::DragState;
pub use event::{InputEvent, Key, PointerButton, PointerButtons};
pub use interaction::{Interaction, Outcome, Phase};
