// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use petri_event_state::InputEvent;
use petri_grid::Color;
use petri_view2d::ViewExtent;

/// Host input collaborator: supplies queued events, never blocks.
///
/// Each call drains whatever is queued at call time into `out`, in arrival
/// order. Events arriving afterwards wait for the next tick's drain.
pub trait EventSource {
    /// Appends all currently queued events to `out`.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
}

/// One filled rectangle of the scene: a live cell's screen footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge in viewport pixels.
    pub x: i32,
    /// Top edge in viewport pixels.
    pub y: i32,
    /// Width in pixels (the current cell size).
    pub width: i32,
    /// Height in pixels (the current cell size).
    pub height: i32,
    /// Fill color.
    pub color: Color,
}

/// Host graphical render collaborator.
///
/// Receives, once per tick, the viewport extent and one rectangle per live
/// cell. No culling is applied; every live cell is submitted regardless of
/// visibility.
pub trait SceneSink {
    /// Presents one frame's worth of cell rectangles.
    fn submit(&mut self, extent: ViewExtent, rects: &[CellRect]);
}

/// Host status/debug render collaborator: a plain text panel.
///
/// Purely informational; nothing flows back into the core.
pub trait StatusSink {
    /// Emits one label/value text line.
    fn line(&mut self, text: &str);

    /// Emits a section divider.
    fn divider(&mut self);
}
