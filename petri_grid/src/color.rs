// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// 3-byte RGB payload carried by every live cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Creates a color from red, green, and blue components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Red component.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green component.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue component.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }
}

/// Capability for minting colors for interactively created cells.
///
/// [`LifeGrid::toggle`](crate::LifeGrid::toggle) and
/// [`LifeGrid::stamp`](crate::LifeGrid::stamp) ask this source for a fresh
/// color each time they bring a cell to life. The grid never owns a random
/// number generator itself; hosts pass a source in by mutable reference, so
/// a deterministic source can be substituted for tests or replay.
pub trait ColorSource {
    /// Returns the color for the next newly created cell.
    fn next_color(&mut self) -> Color;
}

impl<T: ColorSource + ?Sized> ColorSource for &mut T {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip() {
        let c = Color::new(1, 2, 3);
        assert_eq!((c.r(), c.g(), c.b()), (1, 2, 3));
        assert_eq!(c.0, [1, 2, 3]);
    }
}
