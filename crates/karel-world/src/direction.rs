//! Cardinal directions with angle and grid-step semantics.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::WorldError;

/// A cardinal facing direction.
///
/// Each direction carries two interpretations:
///
/// - an angle in radians, counterclockwise-positive with East at 0, in a
///   y-up mathematical frame ([`angle`](Self::angle));
/// - a unit step on the grid as an (avenue, street) delta
///   ([`delta`](Self::delta)).
///
/// North increases street, East increases avenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in a fixed order (useful for table-driven tests).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The facing angle in radians: East = 0, North = pi/2, West = pi,
    /// South = -pi/2. Counterclockwise-positive in a y-up frame.
    pub fn angle(self) -> f32 {
        match self {
            Direction::East => 0.0,
            Direction::North => FRAC_PI_2,
            Direction::West => PI,
            Direction::South => -FRAC_PI_2,
        }
    }

    /// The (avenue, street) delta of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction 180 degrees away.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The direction one quarter turn counterclockwise.
    pub fn left(self) -> Direction {
        match self {
            Direction::East => Direction::North,
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
        }
    }

    /// The direction one quarter turn clockwise.
    pub fn right(self) -> Direction {
        self.left().opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(keyword)
    }
}

impl FromStr for Direction {
    type Err = WorldError;

    /// Parse a direction keyword, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            _ => Err(WorldError::UnknownDirection {
                token: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_are_quarter_turns_apart() {
        assert_eq!(Direction::East.angle(), 0.0);
        assert_eq!(Direction::North.angle(), FRAC_PI_2);
        assert_eq!(Direction::West.angle(), PI);
        assert_eq!(Direction::South.angle(), -FRAC_PI_2);
    }

    #[test]
    fn delta_matches_cartesian_axes() {
        // North is +street, East is +avenue.
        assert_eq!(Direction::North.delta(), (0, 1));
        assert_eq!(Direction::East.delta(), (1, 0));
        assert_eq!(Direction::South.delta(), (0, -1));
        assert_eq!(Direction::West.delta(), (-1, 0));
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn four_left_turns_return_home() {
        for dir in Direction::ALL {
            assert_eq!(dir.left().left().left().left(), dir);
            assert_eq!(dir.left().right(), dir);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("NORTH".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("West".parse::<Direction>().unwrap(), Direction::West);
    }
}
