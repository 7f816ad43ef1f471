// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use petri_event_state::{InputEvent, Interaction, Outcome, Phase};
use petri_grid::{ColorSource, LifeGrid};
use petri_view2d::{GridView, ViewExtent};

use crate::host::{CellRect, EventSource, SceneSink, StatusSink};

/// Per-tick orchestrator: drain input, update, optionally step, render.
///
/// `Ticker` owns the whole core state (grid, view, interaction machine,
/// viewport extent, and the color source) and talks to the host only
/// through the collaborator traits passed into [`tick`](Self::tick). One
/// tick is fully synchronous: events queued during a tick wait for the
/// next one.
#[derive(Debug)]
pub struct Ticker<C> {
    grid: LifeGrid,
    view: GridView,
    interaction: Interaction,
    extent: ViewExtent,
    colors: C,
    queue: Vec<InputEvent>,
    rects: Vec<CellRect>,
}

impl<C: ColorSource> Ticker<C> {
    /// Creates a ticker for a viewport of `extent`, with an empty grid.
    pub fn new(extent: ViewExtent, colors: C) -> Self {
        Self {
            grid: LifeGrid::new(),
            view: GridView::new(extent),
            interaction: Interaction::new(),
            extent,
            colors,
            queue: Vec::new(),
            rects: Vec::new(),
        }
    }

    /// The live-cell store.
    #[must_use]
    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    /// Mutable access to the live-cell store, for host-side seeding.
    pub fn grid_mut(&mut self) -> &mut LifeGrid {
        &mut self.grid
    }

    /// The view state.
    #[must_use]
    pub fn view(&self) -> &GridView {
        &self.view
    }

    /// The interaction state machine.
    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Current viewport extent.
    #[must_use]
    pub fn extent(&self) -> ViewExtent {
        self.extent
    }

    /// Runs one tick: drain → interact → step-if-running → render.
    ///
    /// Events are fed to the interaction machine in arrival order. A quit
    /// event or quit key makes this return [`Outcome::Stop`]; the remaining
    /// drained events are still processed and the frame is still rendered,
    /// the caller just should not tick again.
    pub fn tick(
        &mut self,
        events: &mut impl EventSource,
        scene: &mut impl SceneSink,
        status: &mut impl StatusSink,
    ) -> Outcome {
        self.queue.clear();
        events.poll_events(&mut self.queue);

        let mut outcome = Outcome::Continue;
        for event in &self.queue {
            // The extent is owned here, not by the state machine, so that
            // coordinate math later in the same batch uses the new size.
            if let InputEvent::Resize { width, height } = *event {
                self.extent = ViewExtent::new(width, height);
            }
            let handled =
                self.interaction
                    .handle(event, &mut self.grid, &mut self.view, self.extent, &mut self.colors);
            if handled == Outcome::Stop {
                outcome = Outcome::Stop;
            }
        }

        if self.interaction.is_running() {
            self.grid.step();
        }

        self.render_scene(scene);
        self.render_status(status);

        outcome
    }

    fn render_scene(&mut self, scene: &mut impl SceneSink) {
        let size = self.view.cell_size();
        let radius = size / 2;

        self.rects.clear();
        for (coord, color) in self.grid.iter() {
            let (x, y) = self.view.grid_to_view((coord.x, coord.y), self.extent);
            self.rects.push(CellRect {
                x: x - radius,
                y: y - radius,
                width: size,
                height: size,
                color,
            });
        }
        scene.submit(self.extent, &self.rects);
    }

    fn render_status(&self, status: &mut impl StatusSink) {
        let view = self.view.debug_info();

        status.line("Display");
        status.line(&format!("display.width: {}", self.extent.width));
        status.line(&format!("display.height: {}", self.extent.height));
        status.divider();

        status.line("Grid");
        status.line(&format!("grid.subdivisions: {}", view.subdivisions));
        status.line(&format!(
            "grid.max_subdivisions: {}",
            GridView::max_subdivisions(self.extent)
        ));
        status.line(&format!("grid.cell_size: {}", view.cell_size));
        status.line(&format!("grid.offset.x: {}", view.offset.0));
        status.line(&format!("grid.offset.y: {}", view.offset.1));
        status.line(&format!("grid.cursor.x: {}", view.cursor.0));
        status.line(&format!("grid.cursor.y: {}", view.cursor.1));
        status.divider();

        status.line("Life");
        status.line(&format!("running: {}", self.interaction.is_running()));
        status.line(&format!("phase: {}", phase_name(self.interaction.phase())));
        status.line(&format!("cells.size: {}", self.grid.len()));
        status.divider();
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::PaintingAdd => "painting-add",
        Phase::PaintingRemove => "painting-remove",
        Phase::Panning => "panning",
    }
}

/// Drives a [`Ticker`] until it reports [`Outcome::Stop`].
///
/// This is the whole scheduler: the core never terminates the process;
/// shutdown after the loop returns is the host's concern.
pub fn run<C: ColorSource>(
    ticker: &mut Ticker<C>,
    events: &mut impl EventSource,
    scene: &mut impl SceneSink,
    status: &mut impl StatusSink,
) {
    while ticker.tick(events, scene, status) == Outcome::Continue {}
}
