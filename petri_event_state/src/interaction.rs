// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use petri_grid::{ColorSource, Coord, LifeGrid, Toggle, patterns};
use petri_view2d::{GridView, ViewExtent};

use crate::drag::DragState;
use crate::event::{InputEvent, Key, PointerButton, PointerButtons};

/// Pointer interaction phase.
///
/// Painting phases are entered from `Idle` by a primary-button toggle and
/// left on primary-button up; `Panning` is entered and left with the
/// secondary button. The two gestures are gated on different physical
/// buttons and are therefore mutually exclusive by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No pointer gesture in progress.
    #[default]
    Idle,
    /// Primary button held after a toggle that added a cell; motion adds.
    PaintingAdd,
    /// Primary button held after a toggle that removed a cell; motion removes.
    PaintingRemove,
    /// Secondary button held; motion pans the view.
    Panning,
}

/// Whether the tick loop should keep going after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep ticking.
    Continue,
    /// A quit event or quit key was observed; stop before the next tick.
    Stop,
}

/// The interaction state machine.
///
/// Feed every input event through [`handle`](Self::handle) in arrival
/// order. The machine mutates the grid and the view in response and reports
/// whether the loop should continue. The running flag for continuous
/// stepping is independent of the pointer phase and persists across ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interaction {
    phase: Phase,
    running: bool,
    drag: DragState,
}

impl Interaction {
    /// Creates an idle, paused interaction state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pointer phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether continuous stepping is on.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one input event to the grid and view.
    ///
    /// `extent` is the current viewport size, used to resolve pointer
    /// positions to grid cells. `colors` mints colors for cells created by
    /// toggling, painting, or stamping. `Resize` is a no-op here; the
    /// viewport extent is owned by the caller.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        grid: &mut LifeGrid,
        view: &mut GridView,
        extent: ViewExtent,
        colors: &mut impl ColorSource,
    ) -> Outcome {
        match *event {
            InputEvent::PointerMotion { pos, buttons } => {
                self.on_motion(pos, buttons, grid, view, extent, colors);
            }
            InputEvent::PointerDown { button, pos } => {
                self.on_down(button, pos, grid, view, extent, colors);
            }
            InputEvent::PointerUp { button, .. } => self.on_up(button),
            InputEvent::Wheel { delta_y } => {
                view.adjust_cell_size(delta_y);
            }
            InputEvent::KeyDown { key } => return self.on_key(key, grid, view, colors),
            InputEvent::Resize { .. } => {}
            InputEvent::Quit => return Outcome::Stop,
        }
        Outcome::Continue
    }

    fn on_motion(
        &mut self,
        pos: Point,
        buttons: PointerButtons,
        grid: &mut LifeGrid,
        view: &mut GridView,
        extent: ViewExtent,
        colors: &mut impl ColorSource,
    ) {
        // The cursor cell is tracked on every motion, whatever the phase.
        let cell = view.view_to_grid(pixel(pos), extent);
        view.set_cursor(cell);
        let coord = Coord::new(cell.0, cell.1);

        match self.phase {
            Phase::PaintingAdd if buttons.contains(PointerButtons::PRIMARY) => {
                // Idempotent: only mint a color when the cell is actually new.
                if !grid.contains(coord) {
                    grid.add(coord, colors.next_color());
                }
            }
            Phase::PaintingRemove if buttons.contains(PointerButtons::PRIMARY) => {
                grid.remove(coord);
            }
            Phase::Panning => {
                if let Some(delta) = self.drag.update(pos) {
                    view.pan_by(round(delta.x), round(delta.y));
                }
            }
            _ => {}
        }
    }

    fn on_down(
        &mut self,
        button: PointerButton,
        pos: Point,
        grid: &mut LifeGrid,
        view: &mut GridView,
        extent: ViewExtent,
        colors: &mut impl ColorSource,
    ) {
        match (self.phase, button) {
            (Phase::Idle, PointerButton::Primary) => {
                let cell = view.view_to_grid(pixel(pos), extent);
                view.set_cursor(cell);
                // The toggle result selects which way the drag paints.
                self.phase = match grid.toggle(Coord::new(cell.0, cell.1), colors) {
                    Toggle::Added => Phase::PaintingAdd,
                    Toggle::Removed => Phase::PaintingRemove,
                };
            }
            (Phase::Idle, PointerButton::Secondary) => {
                self.drag.start(pos);
                self.phase = Phase::Panning;
            }
            // A down for the other button while a gesture is active is ignored.
            _ => {}
        }
    }

    fn on_up(&mut self, button: PointerButton) {
        match (self.phase, button) {
            (Phase::PaintingAdd | Phase::PaintingRemove, PointerButton::Primary) => {
                self.phase = Phase::Idle;
            }
            (Phase::Panning, PointerButton::Secondary) => {
                self.drag.end();
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    fn on_key(
        &mut self,
        key: Key,
        grid: &mut LifeGrid,
        view: &mut GridView,
        colors: &mut impl ColorSource,
    ) -> Outcome {
        match key {
            Key::Return | Key::Escape => return Outcome::Stop,
            Key::Left => view.pan_by(view.cell_size(), 0),
            Key::Right => view.pan_by(-view.cell_size(), 0),
            Key::Up => view.pan_by(0, view.cell_size()),
            Key::Down => view.pan_by(0, -view.cell_size()),
            Key::Space => view.reset_pan(),
            Key::Plus => {
                view.adjust_cell_size(10);
            }
            Key::Minus => {
                view.adjust_cell_size(-10);
            }
            Key::Char('c') => self.running = true,
            Key::Char('p') => self.running = false,
            Key::Char('n') => grid.step(),
            Key::Char('r') => {
                let cursor = view.cursor();
                grid.stamp(Coord::new(cursor.0, cursor.1), &patterns::R_PENTOMINO, colors);
            }
            Key::Char(_) => {}
        }
        Outcome::Continue
    }
}

#[expect(clippy::cast_possible_truncation, reason = "pointer positions fit in i32 pixels")]
fn pixel(pos: Point) -> (i32, i32) {
    (pos.x as i32, pos.y as i32)
}

// Half-away-from-zero, written without `f64::round` to stay `no_std`.
#[expect(clippy::cast_possible_truncation, reason = "per-move drag deltas fit in i32 pixels")]
fn round(v: f64) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}
