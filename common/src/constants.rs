//! Useful constants to have

/// Degrees in a full turn. Also the value used for due north.
pub const FULL_CIRCLE: u16 = 360;

/// Degrees in a course reversal
pub const HALF_CIRCLE: u16 = 180;

/// Width of one sector of the eight-point compass rose
pub const CARDINAL_SECTOR: u16 = 45;

/// Unicode's degree symbol
pub const DEGREE_SYM: char = '\u{00b0}';
