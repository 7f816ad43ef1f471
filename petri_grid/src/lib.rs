// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petri Grid: a sparse, colored Game of Life engine.
//!
//! This crate owns the live-cell store of a Conway's Game of Life world and
//! nothing else: no rendering, no input, no clock. The world is logically
//! unbounded (any [`Coord`] within `i32` range can be live) and sparse (only
//! live cells are stored, keyed by coordinate). Each live cell carries a
//! 3-byte RGB [`Color`].
//!
//! ## What it provides
//!
//! - [`LifeGrid`]: the live-cell store with point mutation
//!   ([`add`](LifeGrid::add), [`remove`](LifeGrid::remove),
//!   [`toggle`](LifeGrid::toggle), [`stamp`](LifeGrid::stamp)) and one-shot
//!   generation stepping ([`step`](LifeGrid::step)).
//! - [`ColorSource`]: the capability used to mint colors for interactively
//!   created cells. Callers inject it; the grid never owns a random number
//!   generator.
//! - [`patterns`]: relative-offset tables for a few classic patterns,
//!   usable with [`LifeGrid::stamp`].
//!
//! ## Minimal example
//!
//! ```rust
//! use petri_grid::{Color, Coord, LifeGrid};
//!
//! let mut grid = LifeGrid::new();
//!
//! // A blinker: three cells in a horizontal row.
//! let c = Color::new(200, 40, 40);
//! grid.add(Coord::new(-1, 0), c);
//! grid.add(Coord::new(0, 0), c);
//! grid.add(Coord::new(1, 0), c);
//!
//! grid.step();
//!
//! // After one generation it stands vertically.
//! assert!(grid.contains(Coord::new(0, -1)));
//! assert!(grid.contains(Coord::new(0, 0)));
//! assert!(grid.contains(Coord::new(0, 1)));
//! assert_eq!(grid.len(), 3);
//! ```
//!
//! ## Rules and colors
//!
//! The step rule is the classic B3/S23: a live cell survives with 2 or 3
//! live neighbors, a dead cell with exactly 3 live neighbors is born. A
//! surviving cell keeps its color; a newborn cell receives the
//! component-wise mean of its three parents' colors, accumulated as a sum
//! and a count and divided once. The mean is therefore independent of
//! iteration order over the store.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod color;
mod coord;
mod grid;
pub mod patterns;

pub use color::{Color, ColorSource};
pub use coord::{Coord, NEIGHBOR_DELTAS};
pub use grid::{LifeGrid, Toggle};
