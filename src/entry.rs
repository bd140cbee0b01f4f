//! Picks the entry procedure for a hold.
//!
//! The circle of possible courses to the fix is cut into three sectors by the
//! inbound course, its reciprocal, and a line 70 degrees off the inbound course
//! on the holding side. Each sector maps to one entry:
//!
//! ```text
//! Direct:   parallel_direct   -> teardrop_direct    (180 deg)
//! Teardrop: teardrop_direct   -> teardrop_parallel  (70 deg)
//! Parallel: teardrop_parallel -> parallel_direct    (110 deg)
//! ```
//!
//! All three arcs are swept in the hold's own turn direction and are half-open,
//! so together they cover every course exactly once.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::maths::reverse_course;
use common::structs::{Direction, Heading, HeadingRange};

use crate::constants::DIRECT_SECTOR_OFFSET;
use crate::hold::Hold;

/// One of the three standard entry procedures
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HoldEntry {
    DirectEntry,
    TeardropEntry,
    ParallelEntry,
}

impl HoldEntry {
    pub const ALL: [Self; 3] = [Self::DirectEntry, Self::TeardropEntry, Self::ParallelEntry];

    /// Human-readable name, e.g. "Teardrop Entry"
    pub fn label(self) -> &'static str {
        match self {
            Self::DirectEntry => "Direct Entry",
            Self::TeardropEntry => "Teardrop Entry",
            Self::ParallelEntry => "Parallel Entry",
        }
    }
}

impl fmt::Display for HoldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `d`/`t`/`p`, the bare names, or the full labels, ignoring case.
impl FromStr for HoldEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        let bare = normalized.strip_suffix("entry").unwrap_or(&normalized);
        match bare {
            "d" | "direct" => Ok(Self::DirectEntry),
            "t" | "teardrop" => Ok(Self::TeardropEntry),
            "p" | "parallel" => Ok(Self::ParallelEntry),
            _ => Err(format!("{s:?} is not an entry (expected direct, teardrop or parallel)")),
        }
    }
}

/// The three headings that separate the entry sectors
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct EntryBoundaries {
    pub parallel_direct: Heading,
    pub teardrop_direct: Heading,
    pub teardrop_parallel: Heading,
}

impl EntryBoundaries {
    pub fn new(inbound_course: Heading, direction: Direction) -> Self {
        let parallel_direct = match direction {
            Direction::Right => inbound_course - DIRECT_SECTOR_OFFSET,
            Direction::Left => inbound_course + DIRECT_SECTOR_OFFSET,
        };
        Self {
            parallel_direct,
            teardrop_direct: reverse_course(parallel_direct),
            teardrop_parallel: reverse_course(inbound_course),
        }
    }

    pub fn of(hold: &Hold) -> Self {
        Self::new(hold.inbound_course, hold.direction)
    }

    /// Each entry together with the arc of courses it covers
    pub fn sectors(self, direction: Direction) -> [(HoldEntry, HeadingRange); 3] {
        [
            (
                HoldEntry::DirectEntry,
                HeadingRange::new(self.parallel_direct, self.teardrop_direct, direction),
            ),
            (
                HoldEntry::TeardropEntry,
                HeadingRange::new(self.teardrop_direct, self.teardrop_parallel, direction),
            ),
            (
                HoldEntry::ParallelEntry,
                HeadingRange::new(self.teardrop_parallel, self.parallel_direct, direction),
            ),
        ]
    }
}

/// Entries whose sector contains `course_to_fix`, for a hold on `inbound_course`
/// turning `direction`.
pub fn classify_course(
    inbound_course: Heading,
    direction: Direction,
    course_to_fix: Heading,
) -> BTreeSet<HoldEntry> {
    EntryBoundaries::new(inbound_course, direction)
        .sectors(direction)
        .into_iter()
        .filter(|(_, sector)| sector.contains(course_to_fix))
        .map(|(entry, _)| entry)
        .collect()
}

/// Entry procedure(s) for an aircraft flying `course_to_fix` towards the holding fix.
///
/// Normally a single entry; the set type leaves room for boundary cases.
pub fn classify(hold: &Hold, course_to_fix: Heading) -> BTreeSet<HoldEntry> {
    let entries = classify_course(hold.inbound_course, hold.direction, course_to_fix);
    debug!(
        fix = %hold.fix,
        inbound = hold.inbound_course.degrees(),
        direction = %hold.direction,
        course = course_to_fix.degrees(),
        ?entries,
        "classified hold entry"
    );
    entries
}
