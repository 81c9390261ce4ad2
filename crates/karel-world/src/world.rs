//! The world snapshot: grid dimensions, beepers, walls, corner colors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// An RGBA color, each channel in `0.0..=1.0`.
pub type Color = [f32; 4];

// ---------------------------------------------------------------------------
// Corner
// ---------------------------------------------------------------------------

/// One (avenue, street) grid intersection, both indices 1-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Corner {
    pub avenue: u32,
    pub street: u32,
}

impl Corner {
    pub fn new(avenue: u32, street: u32) -> Self {
        Self { avenue, street }
    }
}

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// A blocking edge segment on one side of a corner.
///
/// The renderer draws a wall as the edge of the corner's cell on the named
/// side; a wall north of (2, 2) and a wall south of (2, 3) occupy the same
/// grid boundary but are distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub corner: Corner,
    pub direction: Direction,
}

impl Wall {
    pub fn new(avenue: u32, street: u32, direction: Direction) -> Self {
        Self {
            corner: Corner::new(avenue, street),
            direction,
        }
    }
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// The world snapshot the renderer reads: dimensions plus sparse per-corner
/// state.
///
/// Beepers and corner colors are stored sparsely; absent corners mean zero
/// beepers and the default (uncolored) marker. Mutation helpers exist so
/// hosts and tests can assemble worlds, but the renderer treats a `World`
/// as immutable for the duration of a draw call.
///
/// Corner-keyed maps are intentionally not serialized wholesale; hosts that
/// persist worlds own their file format and rebuild through the mutation
/// helpers.
#[derive(Debug, Clone, Default)]
pub struct World {
    num_avenues: u32,
    num_streets: u32,
    beepers: HashMap<Corner, u32>,
    walls: Vec<Wall>,
    corner_colors: HashMap<Corner, Color>,
}

impl World {
    /// Create an empty world of the given dimensions.
    pub fn new(num_avenues: u32, num_streets: u32) -> Self {
        Self {
            num_avenues,
            num_streets,
            ..Default::default()
        }
    }

    /// Number of avenues (horizontal extent).
    pub fn num_avenues(&self) -> u32 {
        self.num_avenues
    }

    /// Number of streets (vertical extent).
    pub fn num_streets(&self) -> u32 {
        self.num_streets
    }

    /// Whether the corner lies inside the grid.
    pub fn in_bounds(&self, corner: Corner) -> bool {
        (1..=self.num_avenues).contains(&corner.avenue)
            && (1..=self.num_streets).contains(&corner.street)
    }

    // -- beepers ------------------------------------------------------------

    /// Beeper count at a corner; zero when none have been placed.
    pub fn beeper_count(&self, corner: Corner) -> u32 {
        self.beepers.get(&corner).copied().unwrap_or(0)
    }

    /// Iterate over all corners holding at least one beeper.
    pub fn beepers(&self) -> impl Iterator<Item = (Corner, u32)> + '_ {
        self.beepers.iter().map(|(&corner, &count)| (corner, count))
    }

    /// Set the beeper count at a corner. A count of zero removes the entry.
    pub fn set_beepers(&mut self, corner: Corner, count: u32) {
        if count == 0 {
            self.beepers.remove(&corner);
        } else {
            self.beepers.insert(corner, count);
        }
    }

    /// Add one beeper to a corner.
    pub fn add_beeper(&mut self, corner: Corner) {
        *self.beepers.entry(corner).or_insert(0) += 1;
    }

    // -- walls --------------------------------------------------------------

    /// All wall segments, in insertion order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Add a wall segment. Exact duplicates are skipped.
    pub fn add_wall(&mut self, wall: Wall) {
        if self.walls.contains(&wall) {
            tracing::debug!(?wall, "skipping duplicate wall");
            return;
        }
        self.walls.push(wall);
    }

    // -- corner colors ------------------------------------------------------

    /// The paint color of a corner, if any.
    pub fn corner_color(&self, corner: Corner) -> Option<Color> {
        self.corner_colors.get(&corner).copied()
    }

    /// Paint a corner, or erase its paint with `None`.
    pub fn paint_corner(&mut self, corner: Corner, color: Option<Color>) {
        match color {
            Some(color) => {
                self.corner_colors.insert(corner, color);
            }
            None => {
                self.corner_colors.remove(&corner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_is_one_based_inclusive() {
        let world = World::new(5, 3);
        assert!(world.in_bounds(Corner::new(1, 1)));
        assert!(world.in_bounds(Corner::new(5, 3)));
        assert!(!world.in_bounds(Corner::new(0, 1)));
        assert!(!world.in_bounds(Corner::new(6, 3)));
        assert!(!world.in_bounds(Corner::new(5, 4)));
    }

    #[test]
    fn set_beepers_zero_removes_the_entry() {
        let mut world = World::new(2, 2);
        world.set_beepers(Corner::new(1, 2), 3);
        assert_eq!(world.beepers().count(), 1);
        world.set_beepers(Corner::new(1, 2), 0);
        assert_eq!(world.beepers().count(), 0);
    }

    #[test]
    fn wall_equality_distinguishes_sides() {
        // Same grid boundary, different owning corner.
        let north_of_low = Wall::new(2, 2, Direction::North);
        let south_of_high = Wall::new(2, 3, Direction::South);
        assert_ne!(north_of_low, south_of_high);
    }
}
