// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative-offset tables for classic patterns, for use with
//! [`LifeGrid::stamp`](crate::LifeGrid::stamp).
//!
//! Offsets are relative to the stamp origin; negative `y` is up, matching
//! [`NEIGHBOR_DELTAS`](crate::NEIGHBOR_DELTAS).

use crate::coord::Coord;

/// The R-pentomino, the interactive stamp gesture's pattern. Famously
/// chaotic: it runs for over a thousand generations before settling.
pub const R_PENTOMINO: [Coord; 5] = [
    Coord::new(0, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(1, -1),
];

/// A 2x2 block, the simplest still life.
pub const BLOCK: [Coord; 4] = [
    Coord::new(0, 0),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(1, 1),
];

/// A period-2 blinker, laid out horizontally.
pub const BLINKER: [Coord; 3] = [Coord::new(-1, 0), Coord::new(0, 0), Coord::new(1, 0)];

/// A glider traveling toward positive x and y.
pub const GLIDER: [Coord; 5] = [
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
    Coord::new(1, 1),
];
