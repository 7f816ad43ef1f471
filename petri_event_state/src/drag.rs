// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for the pan gesture: movement deltas from position changes.

use kurbo::{Point, Vec2};

/// Tracks an in-progress drag and yields per-move deltas.
///
/// The interaction layer starts a drag on secondary-button down, feeds every
/// motion position through [`update`](Self::update), and applies the
/// returned delta to the view's pan offset. Computing deltas here means
/// hosts only have to report absolute pointer positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Starts tracking a drag from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Advances the drag to `pos`, returning the delta since the last
    /// position, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let delta = pos - self.last_pos?;
        self.last_pos = Some(pos);
        Some(delta)
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_pos.is_some()
    }
}
