//! Karel World -- immutable world and agent snapshots for the canvas renderer.
//!
//! This crate holds the data the renderer reads each frame: grid dimensions,
//! beeper counts, wall segments, corner colors, and the agent's position and
//! facing. It contains no drawing logic and no simulation logic -- a host
//! (program runner, test, demo) assembles a [`World`] and a [`Karel`], and the
//! `karel-canvas` crate turns snapshots of them into drawing primitives.
//!
//! # Coordinate Conventions
//!
//! Avenues index the horizontal axis, 1-based, increasing left-to-right.
//! Streets index the vertical axis, 1-based, increasing bottom-to-top. A
//! [`Corner`] is one (avenue, street) intersection. These are Cartesian grid
//! semantics; the pixel-space inversion of the vertical axis is the
//! renderer's problem, not this crate's.
//!
//! # Quick Start
//!
//! ```
//! use karel_world::prelude::*;
//!
//! let mut world = World::new(5, 4);
//! world.set_beepers(Corner::new(2, 3), 2);
//! world.add_wall(Wall::new(3, 1, Direction::North));
//! world.paint_corner(Corner::new(5, 4), Some([0.2, 0.4, 1.0, 1.0]));
//!
//! let karel = Karel::new(1, 1, Direction::East);
//!
//! assert_eq!(world.beeper_count(Corner::new(2, 3)), 2);
//! assert_eq!(karel.corner(), Corner::new(1, 1));
//! ```

#![deny(unsafe_code)]

pub mod direction;
pub mod karel;
pub mod world;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by world-type operations.
///
/// The snapshot types are plain data, so the only fallible surface is
/// parsing direction keywords (e.g. from a world description file owned by
/// the host).
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A direction keyword did not match any cardinal direction.
    #[error("unknown direction keyword '{token}' (expected north, south, east, or west)")]
    UnknownDirection { token: String },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::karel::Karel;
    pub use crate::world::{Color, Corner, Wall, World};
    pub use crate::WorldError;
}

// ---------------------------------------------------------------------------
// Integration Tests
// ---------------------------------------------------------------------------
