// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Viewport size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewExtent {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl ViewExtent {
    /// Creates an extent from a width and height in pixels.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let e = ViewExtent::new(640, 480);
        assert_eq!(e.width, 640);
        assert_eq!(e.height, 480);
    }
}
