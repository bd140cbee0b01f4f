//! Useful constants to have

use common::structs::Heading;

/// Angle between the inbound course and the edge of the Direct sector, on the
/// side the pattern turns towards.
pub const DIRECT_SECTOR_OFFSET: Heading = Heading::const_new(70);

pub const SECONDS_PER_MINUTE: u32 = 60;

pub const DECIMILES_PER_MILE: u32 = 10;

/// Leg timings handed out by ATC, in seconds, with their relative frequency
pub const DEFAULT_LEG_DURATIONS: [(u32, u32); 3] = [(60, 6), (90, 2), (120, 1)];

/// Leg lengths for distance-based holds, in decimiles, with their relative frequency
pub const DEFAULT_LEG_DISTANCES: [(u32, u32); 3] = [(40, 5), (50, 1), (100, 1)];

pub const DEFAULT_EFC_MINUTES: (u32, u32) = (5, 45);

pub const DEFAULT_QUIZ_ROUNDS: usize = 5;

/// Five-letter names for intersections
pub const DEFAULT_INTERSECTIONS: &[&str] = &[
    "ACORN", "BADGE", "CABIN", "DAISY", "EAGLE", "FABLE", "GLOBE", "HAVEN", "IVORY", "JOLLY",
    "KNOLL", "LEMON", "MAPLE", "NOBLE", "OCEAN", "PIANO", "QUILT", "RIVER", "SABLE", "TIGER",
    "UNCLE", "VAPOR", "WHEAT", "YACHT", "ZEBRA",
];

/// Names used for VOR stations; rendered as "<name> VOR"
pub const DEFAULT_VORS: &[&str] = &[
    "Albany", "Beacon", "Cedar", "Dover", "Elmira", "Falcon", "Granite", "Harbor", "Juniper",
    "Liberty", "Meadow", "Newport", "Orchard", "Prairie", "Raleigh", "Summit", "Trinity",
    "Valley", "Willow",
];
