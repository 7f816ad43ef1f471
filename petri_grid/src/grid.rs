// Copyright 2026 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::color::{Color, ColorSource};
use crate::coord::{Coord, NEIGHBOR_DELTAS};

/// Result of [`LifeGrid::toggle`]: which direction the cell flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The coordinate was dead and is now live.
    Added,
    /// The coordinate was live and is now dead.
    Removed,
}

/// Per-candidate accumulator for one step: contributor count plus
/// component-wise color sums, divided once when the birth is committed.
/// Summing first keeps the birth color independent of the order in which
/// live parents are visited.
#[derive(Clone, Copy, Debug, Default)]
struct BirthAccumulator {
    contributors: u32,
    sums: [u32; 3],
}

impl BirthAccumulator {
    fn contribute(&mut self, color: Color) {
        self.contributors += 1;
        self.sums[0] += u32::from(color.r());
        self.sums[1] += u32::from(color.g());
        self.sums[2] += u32::from(color.b());
    }

    fn color(&self) -> Color {
        debug_assert!(self.contributors > 0, "birth with no contributors");
        let n = self.contributors.max(1);
        #[expect(clippy::cast_possible_truncation, reason = "a mean of u8 components fits in u8")]
        let components = [
            (self.sums[0] / n) as u8,
            (self.sums[1] / n) as u8,
            (self.sums[2] / n) as u8,
        ];
        Color(components)
    }
}

/// Sparse live-cell store for an unbounded Game of Life world.
///
/// Only live cells are stored, as a map from [`Coord`] to [`Color`]. The
/// store is mutated exclusively through [`add`](Self::add),
/// [`remove`](Self::remove), [`toggle`](Self::toggle),
/// [`stamp`](Self::stamp), [`clear`](Self::clear), and
/// [`step`](Self::step); there are no internal modes.
#[derive(Clone, Debug, Default)]
pub struct LifeGrid {
    cells: HashMap<Coord, Color>,
}

impl LifeGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if the coordinate is live.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Color of the live cell at `coord`, if any.
    #[must_use]
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        self.cells.get(&coord).copied()
    }

    /// Iterates over all live cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells.iter().map(|(&c, &color)| (c, color))
    }

    /// Inserts a live cell if the coordinate is dead.
    ///
    /// Returns `true` if the cell was inserted. A live cell already at
    /// `coord` is left untouched (its color is not overwritten) and `false`
    /// is returned; an occupied coordinate is a policy rejection, not an
    /// error.
    pub fn add(&mut self, coord: Coord, color: Color) -> bool {
        match self.cells.entry(coord) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(v) => {
                v.insert(color);
                true
            }
        }
    }

    /// Removes the live cell at `coord`, returning whether one was there.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.cells.remove(&coord).is_some()
    }

    /// Flips the cell at `coord`.
    ///
    /// A live cell is removed; a dead one is brought to life with a fresh
    /// color from `colors`. The source is only consulted when a cell is
    /// actually created.
    pub fn toggle(&mut self, coord: Coord, colors: &mut impl ColorSource) -> Toggle {
        if self.cells.remove(&coord).is_some() {
            Toggle::Removed
        } else {
            self.cells.insert(coord, colors.next_color());
            Toggle::Added
        }
    }

    /// Toggles every `origin + offset` cell independently.
    ///
    /// This is the "stamp" gesture: each constituent cell flips on its own,
    /// so stamping over existing cells turns those off while the rest turn
    /// on. The operation is deliberately not transactional; a mixed result
    /// is correct stamp semantics, not a failure.
    pub fn stamp(&mut self, origin: Coord, offsets: &[Coord], colors: &mut impl ColorSource) {
        for &offset in offsets {
            self.toggle(origin + offset, colors);
        }
    }

    /// Removes all live cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Advances the world by one generation, replacing the store.
    ///
    /// Classic B3/S23 over the eight [`NEIGHBOR_DELTAS`]: a live cell with 2
    /// or 3 live neighbors survives with its color unchanged; a dead
    /// coordinate adjacent to exactly 3 live cells is born with the
    /// component-wise mean of its parents' colors. The mean is accumulated
    /// as sums plus a count and divided once, so it does not depend on the
    /// iteration order of the store. Stepping an empty grid is a no-op.
    pub fn step(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        let mut next = HashMap::with_capacity(self.cells.len());
        let mut candidates: HashMap<Coord, BirthAccumulator> = HashMap::new();

        for (&coord, &color) in &self.cells {
            let mut neighbors = 0;
            for delta in NEIGHBOR_DELTAS {
                let at = coord + delta;
                if self.cells.contains_key(&at) {
                    neighbors += 1;
                } else {
                    candidates.entry(at).or_default().contribute(color);
                }
            }
            if neighbors == 2 || neighbors == 3 {
                next.insert(coord, color);
            }
        }

        for (coord, acc) in candidates {
            if acc.contributors == 3 {
                next.insert(coord, acc.color());
            }
        }

        self.cells = next;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::patterns;

    /// Deterministic source cycling through a fixed palette.
    struct Palette {
        colors: Vec<Color>,
        at: usize,
    }

    impl Palette {
        fn of(colors: &[Color]) -> Self {
            Self {
                colors: colors.to_vec(),
                at: 0,
            }
        }
    }

    impl ColorSource for Palette {
        fn next_color(&mut self) -> Color {
            let c = self.colors[self.at % self.colors.len()];
            self.at += 1;
            c
        }
    }

    const RED: Color = Color::new(200, 10, 10);
    const GREEN: Color = Color::new(10, 200, 10);
    const BLUE: Color = Color::new(10, 10, 200);

    #[test]
    fn add_is_idempotent_and_keeps_first_color() {
        let mut grid = LifeGrid::new();
        let c = Coord::new(2, 3);

        assert!(grid.add(c, RED));
        assert!(!grid.add(c, GREEN));

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.color_at(c), Some(RED));
    }

    #[test]
    fn remove_reports_presence() {
        let mut grid = LifeGrid::new();
        let c = Coord::new(-4, 9);

        assert!(!grid.remove(c));
        grid.add(c, RED);
        assert!(grid.remove(c));
        assert!(!grid.remove(c));
        assert!(grid.is_empty());
    }

    #[test]
    fn toggle_twice_restores_presence_and_replayed_color() {
        let mut grid = LifeGrid::new();
        let c = Coord::new(0, 0);
        // A one-color palette replays the same color on the re-add, so the
        // involution also restores the color.
        let mut colors = Palette::of(&[BLUE]);

        assert_eq!(grid.toggle(c, &mut colors), Toggle::Added);
        assert_eq!(grid.color_at(c), Some(BLUE));
        assert_eq!(grid.toggle(c, &mut colors), Toggle::Removed);
        assert!(!grid.contains(c));
        assert_eq!(grid.toggle(c, &mut colors), Toggle::Added);
        assert_eq!(grid.color_at(c), Some(BLUE));
    }

    #[test]
    fn toggle_consults_source_only_on_add() {
        let mut grid = LifeGrid::new();
        let mut colors = Palette::of(&[RED, GREEN]);
        let c = Coord::new(5, 5);

        grid.toggle(c, &mut colors);
        grid.toggle(c, &mut colors);
        grid.toggle(c, &mut colors);

        // Two adds, one remove: the second add gets the second palette entry.
        assert_eq!(grid.color_at(c), Some(GREEN));
    }

    #[test]
    fn step_on_empty_grid_is_noop() {
        let mut grid = LifeGrid::new();
        grid.step();
        assert!(grid.is_empty());
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = LifeGrid::new();
        grid.add(Coord::new(7, -2), RED);
        grid.step();
        assert!(grid.is_empty());
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = LifeGrid::new();
        let block = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
        ];
        for (i, &c) in block.iter().enumerate() {
            grid.add(c, Color::new(i as u8, 0, 0));
        }

        let before: Vec<_> = block.iter().map(|&c| grid.color_at(c)).collect();
        grid.step();

        assert_eq!(grid.len(), 4);
        for (&c, want) in block.iter().zip(before) {
            assert_eq!(grid.color_at(c), want, "block member changed");
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut grid = LifeGrid::new();
        for x in -1..=1 {
            grid.add(Coord::new(x, 0), RED);
        }

        grid.step();
        assert_eq!(grid.len(), 3);
        for y in -1..=1 {
            assert!(grid.contains(Coord::new(0, y)), "expected vertical blinker");
        }

        grid.step();
        assert_eq!(grid.len(), 3);
        for x in -1..=1 {
            assert!(grid.contains(Coord::new(x, 0)), "expected horizontal blinker");
        }
    }

    #[test]
    fn surviving_cells_keep_their_colors() {
        let mut grid = LifeGrid::new();
        grid.add(Coord::new(-1, 0), RED);
        grid.add(Coord::new(0, 0), GREEN);
        grid.add(Coord::new(1, 0), BLUE);

        grid.step();

        // Only the center survives (the tips die); it keeps its own color.
        assert_eq!(grid.color_at(Coord::new(0, 0)), Some(GREEN));
    }

    #[test]
    fn birth_color_is_component_wise_mean_of_parents() {
        let mut grid = LifeGrid::new();
        grid.add(Coord::new(-1, 0), Color::new(30, 0, 90));
        grid.add(Coord::new(0, 0), Color::new(60, 30, 90));
        grid.add(Coord::new(1, 0), Color::new(90, 60, 96));

        grid.step();

        // The blinker's tips (0, -1) and (0, 1) are three-parent births.
        let want = Color::new(60, 30, 92);
        assert_eq!(grid.color_at(Coord::new(0, -1)), Some(want));
        assert_eq!(grid.color_at(Coord::new(0, 1)), Some(want));
    }

    #[test]
    fn birth_mean_truncates_toward_zero() {
        let mut grid = LifeGrid::new();
        grid.add(Coord::new(-1, 0), Color::new(1, 0, 255));
        grid.add(Coord::new(0, 0), Color::new(1, 0, 255));
        grid.add(Coord::new(1, 0), Color::new(2, 1, 255));

        grid.step();

        // (1 + 1 + 2) / 3 == 1, (0 + 0 + 1) / 3 == 0, (255 * 3) / 3 == 255.
        assert_eq!(grid.color_at(Coord::new(0, 1)), Some(Color::new(1, 0, 255)));
    }

    #[test]
    fn stamp_flips_each_member_independently() {
        let mut grid = LifeGrid::new();
        let mut colors = Palette::of(&[RED]);
        let origin = Coord::new(10, 10);

        // Pre-fill one member; stamping flips it off while the rest turn on.
        grid.add(origin + Coord::new(0, -1), GREEN);
        grid.stamp(origin, &patterns::R_PENTOMINO, &mut colors);

        assert!(!grid.contains(origin + Coord::new(0, -1)));
        assert_eq!(grid.len(), patterns::R_PENTOMINO.len() - 1);
        for &offset in &patterns::R_PENTOMINO[..] {
            if offset != Coord::new(0, -1) {
                assert!(grid.contains(origin + offset));
            }
        }
    }

    #[test]
    fn clear_empties_the_store() {
        let mut grid = LifeGrid::new();
        let mut colors = Palette::of(&[RED]);
        grid.stamp(Coord::new(0, 0), &patterns::GLIDER, &mut colors);
        assert!(!grid.is_empty());

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
    }

    #[test]
    fn iter_yields_every_live_cell_once() {
        let mut grid = LifeGrid::new();
        grid.add(Coord::new(0, 0), RED);
        grid.add(Coord::new(3, -1), GREEN);

        let mut seen: Vec<_> = grid.iter().collect();
        seen.sort_by_key(|(c, _)| *c);
        assert_eq!(
            seen,
            alloc::vec![(Coord::new(0, 0), RED), (Coord::new(3, -1), GREEN)]
        );
    }
}
