// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use petri_grid::{Color, ColorSource};

/// Color source backed by the thread-local generator; the host default.
#[derive(Clone, Debug, Default)]
pub struct ThreadRngColors {
    rng: ThreadRng,
}

impl ThreadRngColors {
    /// Creates a source over the calling thread's generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for ThreadRngColors {
    fn next_color(&mut self) -> Color {
        Color::new(self.rng.random(), self.rng.random(), self.rng.random())
    }
}

/// Deterministic color source for tests and replay.
///
/// Two sources built from the same seed yield the same color sequence.
#[derive(Clone, Debug)]
pub struct SeededColors {
    rng: StdRng,
}

impl SeededColors {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for SeededColors {
    fn next_color(&mut self) -> Color {
        Color::new(self.rng.random(), self.rng.random(), self.rng.random())
    }
}
