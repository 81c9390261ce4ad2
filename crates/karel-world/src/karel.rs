//! The agent snapshot: where Karel stands and which way it faces.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::world::Corner;

/// An immutable snapshot of the agent for one draw call.
///
/// Movement and turning belong to the simulation loop that owns the live
/// agent; the renderer only ever reads one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Karel {
    /// Avenue the agent stands on (1-based).
    pub avenue: u32,
    /// Street the agent stands on (1-based).
    pub street: u32,
    /// Facing direction.
    pub facing: Direction,
}

impl Karel {
    pub fn new(avenue: u32, street: u32, facing: Direction) -> Self {
        Self {
            avenue,
            street,
            facing,
        }
    }

    /// The corner the agent currently occupies.
    pub fn corner(&self) -> Corner {
        Corner::new(self.avenue, self.street)
    }
}

impl Default for Karel {
    /// The conventional starting pose: corner (1, 1), facing East.
    fn default() -> Self {
        Self::new(1, 1, Direction::East)
    }
}
