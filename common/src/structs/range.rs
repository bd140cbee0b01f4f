use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Direction, Heading};

/// An arc of the compass, swept from `from` to `to` while turning in `direction`.
///
/// The arc is half-open: `from` itself is excluded and `to` is included. An arc
/// whose ends coincide covers the whole circle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct HeadingRange {
    pub from: Heading,
    pub to: Heading,
    pub direction: Direction,
}

impl HeadingRange {
    pub fn new(from: Heading, to: Heading, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
        }
    }

    /// Degrees swept by the arc, in `(0, 360]`
    pub fn width(self) -> u16 {
        match self.direction {
            Direction::Right => (self.to - self.from).degrees(),
            Direction::Left => (self.from - self.to).degrees(),
        }
    }

    /// Does `heading` lie on the arc?
    pub fn contains(self, heading: Heading) -> bool {
        match self.direction {
            Direction::Right => heading - self.from <= self.to - self.from,
            Direction::Left => self.from - heading <= self.from - self.to,
        }
    }
}

impl fmt::Display for HeadingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} turn, {} deg)",
            self.from,
            self.to,
            self.direction,
            self.width()
        )
    }
}
