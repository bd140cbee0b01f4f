//! Heading arithmetic on the `(0, 360]` circle

use crate::constants::HALF_CIRCLE;
use crate::structs::*;

/// `(a + b) mod 360`, with 360 in place of 0
pub fn add_headings(a: Heading, b: Heading) -> Heading {
    a + b
}

/// Clockwise distance walking from `b` to `a`, with 360 in place of 0.
///
/// The argument order matters: this is not `a - b` on the number line.
pub fn subtract_headings(a: Heading, b: Heading) -> Heading {
    a - b
}

/// The reciprocal course
pub fn reverse_course(heading: Heading) -> Heading {
    heading + Heading::SOUTH
}

/// The turn that keeps the two courses apart by at most 180 degrees of clockwise arc.
///
/// Returns `None` for an exact course reversal, where either way is as good.
pub fn direction_for_turn(from: Heading, to: Heading) -> Option<Direction> {
    if from.is_reciprocal_of(to) {
        None
    } else if (from - to).degrees() > HALF_CIRCLE {
        Some(Direction::Right)
    } else {
        Some(Direction::Left)
    }
}

/// Degrees of turn between two courses, folded into `[0, 180]`.
///
/// Computed from the clockwise distance walking from `to` back to `from`, which
/// is exact for left turns; a course reversal stays at 180 and no change is 0.
pub fn heading_change_amount(from: Heading, to: Heading) -> u16 {
    match (from - to).degrees() {
        HALF_CIRCLE => HALF_CIRCLE,
        raw => raw % HALF_CIRCLE,
    }
}
