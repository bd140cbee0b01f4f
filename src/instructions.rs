//! Text shown to the pilot: the clearance, the assumed course, and the answer.

use std::collections::BTreeSet;
use std::fmt;

use common::maths::reverse_course;
use common::structs::{CardinalDirection, Heading};

use crate::entry::HoldEntry;
use crate::hold::Hold;

/// The ATC holding clearance for a hold.
///
/// The hold lies on the reciprocal of the inbound course, so the clearance names
/// that radial and the compass side of the fix it points to.
pub struct Instructions<'a>(pub &'a Hold);

impl fmt::Display for Instructions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hold = self.0;
        let radial = reverse_course(hold.inbound_course);
        write!(
            f,
            "Hold {} of {} on the {} radial, {} turns, {} legs, expect further clearance in {} minutes.",
            CardinalDirection::of(radial),
            hold.fix,
            radial,
            hold.direction,
            hold.leg,
            hold.efc_minutes,
        )
    }
}

/// What the pilot is told to assume about their own position.
pub struct Assumption(pub Heading);

impl fmt::Display for Assumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assume you are direct to the fix on a heading of {}.",
            self.0
        )
    }
}

/// A classification result as words, e.g. "Teardrop Entry".
pub struct Solution<'a>(pub &'a BTreeSet<HoldEntry>);

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("No standard entry");
        }
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(entry.label())?;
        }
        Ok(())
    }
}
