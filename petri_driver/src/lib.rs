// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petri Driver: the tick loop composing the Petri core with its host.
//!
//! One tick is: drain queued input events, feed them to the interaction
//! machine in arrival order, advance the simulation one generation when
//! running, then hand the frame to the render collaborators. The loop is
//! single-threaded, synchronous, and cooperative; nothing blocks or
//! suspends inside a tick.
//!
//! The host supplies the collaborators as capability objects:
//! - [`EventSource`]: non-blocking input drain.
//! - [`SceneSink`]: receives one [`CellRect`] per live cell, with no culling.
//! - [`StatusSink`]: receives the text status panel.
//! - A [`ColorSource`](petri_grid::ColorSource) for interactively created
//!   cells: [`ThreadRngColors`] for hosts, [`SeededColors`] for
//!   deterministic tests and replay.
//!
//! [`Ticker::tick`] returns [`Outcome`](petri_event_state::Outcome); the
//! [`run`] helper loops until `Stop`. The core never terminates the
//! process, it only stops ticking.
//!
//! ## Minimal example
//!
//! ```rust
//! use petri_driver::{CellRect, EventSource, SceneSink, SeededColors, StatusSink, Ticker, run};
//! use petri_event_state::{InputEvent, Key};
//! use petri_view2d::ViewExtent;
//!
//! // A scripted input source: one batch of events per tick.
//! struct Script(Vec<Vec<InputEvent>>);
//! impl EventSource for Script {
//!     fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
//!         if !self.0.is_empty() {
//!             out.extend(self.0.remove(0));
//!         }
//!     }
//! }
//!
//! struct Null;
//! impl SceneSink for Null {
//!     fn submit(&mut self, _: ViewExtent, _: &[CellRect]) {}
//! }
//! impl StatusSink for Null {
//!     fn line(&mut self, _: &str) {}
//!     fn divider(&mut self) {}
//! }
//!
//! let mut ticker = Ticker::new(ViewExtent::new(640, 480), SeededColors::new(7));
//! let mut events = Script(vec![
//!     // Tick 1: stamp the R-pentomino at the cursor cell.
//!     vec![InputEvent::KeyDown { key: Key::Char('r') }],
//!     // Tick 2: Enter stops the loop.
//!     vec![InputEvent::KeyDown { key: Key::Return }],
//! ]);
//!
//! run(&mut ticker, &mut events, &mut Null, &mut Null);
//! assert_eq!(ticker.grid().len(), 5);
//! ```

mod colors;
mod host;
mod ticker;

pub use colors::{SeededColors, ThreadRngColors};
pub use host::{CellRect, EventSource, SceneSink, StatusSink};
pub use ticker::{Ticker, run};
