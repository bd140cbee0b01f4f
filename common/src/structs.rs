//! Basic structures such as Heading

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{CARDINAL_SECTOR, FULL_CIRCLE};

mod heading;
pub use heading::*;

mod range;
pub use range::HeadingRange;

/// The sense of a turn. Holding patterns are flown with either all right or all left turns.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    #[serde(alias = "left", alias = "L")]
    Left,
    #[serde(alias = "right", alias = "R")]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "Left",
            Self::Right => "Right",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(format!("{s:?} is not a turn direction (expected left or right)")),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        if rng.gen() {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Eight-point compass rose
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CardinalDirection {
    const ROSE: [Self; 8] = [
        Self::North,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::South,
        Self::Southwest,
        Self::West,
        Self::Northwest,
    ];

    /// Each point owns the 45 degree sector centred on it, e.g. Northeast is `(22.5, 67.5]`.
    pub fn of(heading: Heading) -> Self {
        // Whole degrees never land on a .5 boundary, so rounding down after a
        // 22 degree shift picks the same sector as the exact half-open rule.
        let shifted = heading.degrees() + CARDINAL_SECTOR / 2;
        Self::ROSE[usize::from(shifted % FULL_CIRCLE / CARDINAL_SECTOR)]
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
