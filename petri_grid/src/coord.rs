// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Add;

/// Integer grid coordinate of a cell.
///
/// The grid is unbounded: every `(x, y)` pair representable in `i32` names a
/// distinct cell. There is no origin-relative special casing anywhere in the
/// engine; negative coordinates behave exactly like positive ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Horizontal grid position.
    pub x: i32,
    /// Vertical grid position.
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The eight neighbor offsets of a cell, in N, NE, E, SE, S, SW, W, NW order.
///
/// Negative `y` is "up" here purely by convention of the table; the step rule
/// itself is direction-agnostic.
pub const NEIGHBOR_DELTAS: [Coord; 8] = [
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
    Coord::new(0, 1),
    Coord::new(-1, 1),
    Coord::new(-1, 0),
    Coord::new(-1, -1),
];
