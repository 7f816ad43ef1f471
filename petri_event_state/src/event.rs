// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

bitflags::bitflags! {
    /// Set of pointer buttons currently held, carried on motion events.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct PointerButtons: u8 {
        /// The primary (usually left) button.
        const PRIMARY = 1 << 0;
        /// The secondary (usually right) button.
        const SECONDARY = 1 << 1;
    }
}

/// A single pointer button, for down/up events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary (usually left) button: toggle and paint.
    Primary,
    /// The secondary (usually right) button: pan.
    Secondary,
}

impl PointerButton {
    /// The flag this button contributes to a [`PointerButtons`] mask.
    #[must_use]
    pub fn mask(self) -> PointerButtons {
        match self {
            Self::Primary => PointerButtons::PRIMARY,
            Self::Secondary => PointerButtons::SECONDARY,
        }
    }
}

/// Key identifier delivered by the host input backend.
///
/// Named variants cover the keys the interaction layer binds specially;
/// everything else arrives as [`Char`](Self::Char). The character bindings
/// are `c` run, `p` pause, `n` single-step, `r` stamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Enter: stop the tick loop.
    Return,
    /// Escape: stop the tick loop.
    Escape,
    /// Space: reset the pan offset.
    Space,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Keypad plus: grow the cell size.
    Plus,
    /// Keypad minus: shrink the cell size.
    Minus,
    /// Any other key, by character.
    Char(char),
}

/// A discrete input event, one entry of the batch a host drains per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to `pos` (viewport pixels) with `buttons` held.
    PointerMotion {
        /// New pointer position in viewport space.
        pos: Point,
        /// Buttons held during the motion.
        buttons: PointerButtons,
    },
    /// A pointer button was pressed at `pos`.
    PointerDown {
        /// The button that went down.
        button: PointerButton,
        /// Pointer position in viewport space.
        pos: Point,
    },
    /// A pointer button was released at `pos`.
    PointerUp {
        /// The button that went up.
        button: PointerButton,
        /// Pointer position in viewport space.
        pos: Point,
    },
    /// Vertical wheel scroll; positive is away from the user.
    Wheel {
        /// Scroll amount in wheel steps.
        delta_y: i32,
    },
    /// A key was pressed.
    KeyDown {
        /// Which key.
        key: Key,
    },
    /// The viewport was resized.
    Resize {
        /// New width in pixels.
        width: i32,
        /// New height in pixels.
        height: i32,
    },
    /// The host asked the application to quit.
    Quit,
}
