//! Error types for hold construction and decoding.
//!
//! Every validation failure is reported when a value is built; nothing
//! downstream of a successfully constructed [`Hold`](crate::hold::Hold) can fail.

use common::structs::HeadingError;
use thiserror::Error;

/// Why a raw number was rejected as a leg measure or a clearance time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    #[error("{0} is not a whole number")]
    NotInteger(f64),
    #[error("{0} is negative")]
    Negative(f64),
    #[error("{0} is too large")]
    TooLarge(f64),
}

/// The top-level error for building holds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoldError {
    /// A leg duration in seconds was rejected.
    #[error("invalid duration: {0}")]
    InvalidDuration(MeasureError),

    /// A leg distance in decimiles was rejected.
    #[error("invalid distance: {0}")]
    InvalidDistance(MeasureError),

    /// A hold record could not be decoded.
    #[error("invalid hold: {0}")]
    InvalidHold(InvalidHold),
}

/// The first problem found while decoding a hold record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidHold {
    /// Wrong tag, missing or unexpected field, or a document that does not parse.
    #[error("{0}")]
    Malformed(String),

    #[error("inbound course: {0}")]
    InboundCourse(HeadingError),

    #[error("EFC minutes: {0}")]
    EfcMinutes(MeasureError),

    #[error("leg duration: {0}")]
    Duration(MeasureError),

    #[error("leg distance: {0}")]
    Distance(MeasureError),
}

// Inner errors are formatted into each message and are not exposed as a source.
impl From<InvalidHold> for HoldError {
    fn from(err: InvalidHold) -> Self {
        Self::InvalidHold(err)
    }
}

impl HoldError {
    /// Name of the offending field, when the failure points at one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidDuration(_) => Some("duration_seconds"),
            Self::InvalidDistance(_) => Some("distance_decimiles"),
            Self::InvalidHold(InvalidHold::Malformed(_)) => None,
            Self::InvalidHold(InvalidHold::InboundCourse(_)) => Some("inbound_course"),
            Self::InvalidHold(InvalidHold::EfcMinutes(_)) => Some("efc_minutes"),
            Self::InvalidHold(InvalidHold::Duration(_)) => Some("duration_seconds"),
            Self::InvalidHold(InvalidHold::Distance(_)) => Some("distance_decimiles"),
        }
    }
}

/// Result type alias using HoldError.
pub type HoldResult<T> = Result<T, HoldError>;
