//! Published holds and the records they are decoded from

use std::fmt;

use serde::{Deserialize, Serialize};

use common::structs::{Direction, Heading};

use crate::constants::{DECIMILES_PER_MILE, SECONDS_PER_MINUTE};
use crate::error::{HoldError, HoldResult, InvalidHold, MeasureError};

/// Outbound leg timing for time-based holds
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DurationSeconds(u32);

/// Leg length for distance-based holds, in tenths of a nautical mile
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DistanceDecimiles(u32);

/// Accept only finite, whole, non-negative numbers that fit a `u32`.
fn whole_non_negative(raw: f64) -> Result<u32, MeasureError> {
    if !raw.is_finite() || raw.fract() != 0.0 {
        Err(MeasureError::NotInteger(raw))
    } else if raw < 0.0 {
        Err(MeasureError::Negative(raw))
    } else if raw > f64::from(u32::MAX) {
        Err(MeasureError::TooLarge(raw))
    } else {
        Ok(raw as u32)
    }
}

impl DurationSeconds {
    pub const fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for DurationSeconds {
    type Error = HoldError;

    fn try_from(raw: f64) -> HoldResult<Self> {
        whole_non_negative(raw)
            .map(Self)
            .map_err(HoldError::InvalidDuration)
    }
}

impl TryFrom<i64> for DurationSeconds {
    type Error = HoldError;

    fn try_from(raw: i64) -> HoldResult<Self> {
        Self::try_from(raw as f64)
    }
}

impl DistanceDecimiles {
    pub const fn new(decimiles: u32) -> Self {
        Self(decimiles)
    }

    pub fn decimiles(self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for DistanceDecimiles {
    type Error = HoldError;

    fn try_from(raw: f64) -> HoldResult<Self> {
        whole_non_negative(raw)
            .map(Self)
            .map_err(HoldError::InvalidDistance)
    }
}

impl TryFrom<i64> for DistanceDecimiles {
    type Error = HoldError;

    fn try_from(raw: i64) -> HoldResult<Self> {
        Self::try_from(raw as f64)
    }
}

/// `amount / per`, printed without trailing zeros: `1`, `1.5`, `1.67`
fn fmt_ratio(f: &mut fmt::Formatter<'_>, amount: u32, per: u32) -> fmt::Result {
    if amount % per == 0 {
        write!(f, "{}", amount / per)
    } else {
        let text = format!("{:.2}", f64::from(amount) / f64::from(per));
        f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// As minutes
impl fmt::Display for DurationSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_ratio(f, self.0, SECONDS_PER_MINUTE)?;
        f.write_str(" minute")
    }
}

/// As nautical miles
impl fmt::Display for DistanceDecimiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_ratio(f, self.0, DECIMILES_PER_MILE)?;
        f.write_str(" mile")
    }
}

/// How the outbound leg is measured. Exactly one of the two.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LegMeasure {
    TimeBasedLeg(DurationSeconds),
    DistanceBasedLeg(DistanceDecimiles),
}

impl fmt::Display for LegMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeBasedLeg(duration) => fmt::Display::fmt(duration, f),
            Self::DistanceBasedLeg(distance) => fmt::Display::fmt(distance, f),
        }
    }
}

/// A published holding pattern
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "RawHold", into = "HoldRecord")]
pub struct Hold {
    pub fix: String,
    pub inbound_course: Heading,
    pub direction: Direction,
    pub efc_minutes: u32,
    pub leg: LegMeasure,
}

impl Hold {
    pub fn time_based(
        fix: impl Into<String>,
        inbound_course: Heading,
        direction: Direction,
        efc_minutes: u32,
        duration: DurationSeconds,
    ) -> Self {
        Self {
            fix: fix.into(),
            inbound_course,
            direction,
            efc_minutes,
            leg: LegMeasure::TimeBasedLeg(duration),
        }
    }

    pub fn distance_based(
        fix: impl Into<String>,
        inbound_course: Heading,
        direction: Direction,
        efc_minutes: u32,
        distance: DistanceDecimiles,
    ) -> Self {
        Self {
            fix: fix.into(),
            inbound_course,
            direction,
            efc_minutes,
            leg: LegMeasure::DistanceBasedLeg(distance),
        }
    }

    /// Decode a hold from a TOML document
    pub fn from_toml_str(s: &str) -> HoldResult<Self> {
        let raw: RawHold =
            toml::from_str(s).map_err(|e| InvalidHold::Malformed(e.to_string()))?;
        raw.decode()
    }

    /// Decode a hold from a JSON document
    pub fn from_json_str(s: &str) -> HoldResult<Self> {
        let raw: RawHold =
            serde_json::from_str(s).map_err(|e| InvalidHold::Malformed(e.to_string()))?;
        raw.decode()
    }
}

/// Discriminates the two kinds of hold record
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LegKind {
    TimeBasedLeg,
    DistanceBasedLeg,
}

/// A hold as it is written in a file. Numbers are kept raw so that each field
/// can be validated and reported on its own.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawHold {
    pub kind: LegKind,
    pub fix: String,
    pub inbound_course: f64,
    pub direction: Direction,
    pub efc_minutes: f64,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub distance_decimiles: Option<f64>,
}

impl RawHold {
    /// Validate every field, stopping at the first bad one
    pub fn decode(self) -> HoldResult<Hold> {
        let inbound_course =
            Heading::from_degrees(self.inbound_course).map_err(InvalidHold::InboundCourse)?;
        let efc_minutes = whole_non_negative(self.efc_minutes).map_err(InvalidHold::EfcMinutes)?;

        let leg = match self.kind {
            LegKind::TimeBasedLeg => {
                reject_extra(self.distance_decimiles, "distance_decimiles", self.kind)?;
                let raw = require(self.duration_seconds, "duration_seconds", self.kind)?;
                let seconds = whole_non_negative(raw).map_err(InvalidHold::Duration)?;
                LegMeasure::TimeBasedLeg(DurationSeconds(seconds))
            }
            LegKind::DistanceBasedLeg => {
                reject_extra(self.duration_seconds, "duration_seconds", self.kind)?;
                let raw = require(self.distance_decimiles, "distance_decimiles", self.kind)?;
                let decimiles = whole_non_negative(raw).map_err(InvalidHold::Distance)?;
                LegMeasure::DistanceBasedLeg(DistanceDecimiles(decimiles))
            }
        };

        Ok(Hold {
            fix: self.fix,
            inbound_course,
            direction: self.direction,
            efc_minutes,
            leg,
        })
    }
}

fn require(value: Option<f64>, field: &str, kind: LegKind) -> Result<f64, InvalidHold> {
    value.ok_or_else(|| InvalidHold::Malformed(format!("missing field `{field}` for {kind:?}")))
}

fn reject_extra(value: Option<f64>, field: &str, kind: LegKind) -> Result<(), InvalidHold> {
    match value {
        Some(_) => Err(InvalidHold::Malformed(format!(
            "field `{field}` is not allowed for {kind:?}"
        ))),
        None => Ok(()),
    }
}

impl TryFrom<RawHold> for Hold {
    type Error = HoldError;

    fn try_from(raw: RawHold) -> HoldResult<Self> {
        raw.decode()
    }
}

/// The shape a [`Hold`] is written out in: the same fields as [`RawHold`], but
/// already validated, so every number is whole.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HoldRecord {
    pub kind: LegKind,
    pub fix: String,
    pub inbound_course: u16,
    pub direction: Direction,
    pub efc_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_decimiles: Option<u32>,
}

impl From<Hold> for HoldRecord {
    fn from(hold: Hold) -> Self {
        let (kind, duration_seconds, distance_decimiles) = match hold.leg {
            LegMeasure::TimeBasedLeg(d) => (LegKind::TimeBasedLeg, Some(d.0), None),
            LegMeasure::DistanceBasedLeg(d) => (LegKind::DistanceBasedLeg, None, Some(d.0)),
        };
        Self {
            kind,
            fix: hold.fix,
            inbound_course: hold.inbound_course.degrees(),
            direction: hold.direction,
            efc_minutes: hold.efc_minutes,
            duration_seconds,
            distance_decimiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures() {
        assert_eq!(DurationSeconds::try_from(30i64), Ok(DurationSeconds::new(30)));
        assert_eq!(
            DurationSeconds::try_from(-1i64),
            Err(HoldError::InvalidDuration(MeasureError::Negative(-1.0)))
        );
        assert_eq!(
            DurationSeconds::try_from(1.5),
            Err(HoldError::InvalidDuration(MeasureError::NotInteger(1.5)))
        );
        assert_eq!(DistanceDecimiles::try_from(10i64), Ok(DistanceDecimiles::new(10)));
        assert_eq!(
            DistanceDecimiles::try_from(-5i64),
            Err(HoldError::InvalidDistance(MeasureError::Negative(-5.0)))
        );
        assert!(matches!(
            DistanceDecimiles::try_from(1e12),
            Err(HoldError::InvalidDistance(MeasureError::TooLarge(_)))
        ));
    }

    #[test]
    fn leg_display() {
        assert_eq!(DurationSeconds::new(60).to_string(), "1 minute");
        assert_eq!(DurationSeconds::new(90).to_string(), "1.5 minute");
        assert_eq!(DurationSeconds::new(100).to_string(), "1.67 minute");
        assert_eq!(DistanceDecimiles::new(40).to_string(), "4 mile");
        assert_eq!(DistanceDecimiles::new(15).to_string(), "1.5 mile");
    }

    #[test]
    fn decode_time_based() {
        let hold = Hold::from_json_str(
            r#"{"kind": "TimeBasedLeg", "fix": "RDU", "inbound_course": 180,
                "duration_seconds": 5, "direction": "Left", "efc_minutes": 33}"#,
        )
        .unwrap();
        assert_eq!(
            hold,
            Hold::time_based("RDU", Heading::SOUTH, Direction::Left, 33, DurationSeconds::new(5))
        );
    }

    #[test]
    fn decode_distance_based() {
        let hold = Hold::from_toml_str(
            r#"
            kind = "DistanceBasedLeg"
            distance_decimiles = 15
            fix = "GSO"
            inbound_course = 360
            direction = "Right"
            efc_minutes = 18
            "#,
        )
        .unwrap();
        assert_eq!(hold.leg, LegMeasure::DistanceBasedLeg(DistanceDecimiles::new(15)));
        assert_eq!(hold.inbound_course, Heading::NORTH);
    }

    #[test]
    fn reject_bad_course() {
        let err = Hold::from_json_str(
            r#"{"kind": "DistanceBasedLeg", "fix": "GSO", "inbound_course": 361,
                "distance_decimiles": 20, "direction": "Right", "efc_minutes": 0}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HoldError::InvalidHold(InvalidHold::InboundCourse(_))
        ));
    }

    #[test]
    fn reject_structural_problems() {
        // Unknown tag
        let err = Hold::from_json_str(
            r#"{"kind": "DecimileBasedLeg", "fix": "GSO", "inbound_course": 90,
                "distance_decimiles": 20, "direction": "Right", "efc_minutes": 0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, HoldError::InvalidHold(InvalidHold::Malformed(_))));

        // Leg measure of the other kind
        let err = Hold::from_json_str(
            r#"{"kind": "TimeBasedLeg", "fix": "GSO", "inbound_course": 90,
                "distance_decimiles": 20, "direction": "Right", "efc_minutes": 0}"#,
        )
        .unwrap_err();
        assert!(matches!(err, HoldError::InvalidHold(InvalidHold::Malformed(_))));

        // Missing fix
        let err = Hold::from_json_str(
            r#"{"kind": "TimeBasedLeg", "inbound_course": 90,
                "duration_seconds": 60, "direction": "Right", "efc_minutes": 0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("fix"));
    }

    #[test]
    fn first_invalid_field_wins() {
        let err = Hold::from_json_str(
            r#"{"kind": "TimeBasedLeg", "fix": "RDU", "inbound_course": 90,
                "duration_seconds": -60, "direction": "Left", "efc_minutes": 1.5}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            HoldError::InvalidHold(InvalidHold::EfcMinutes(MeasureError::NotInteger(1.5)))
        );
    }

    #[test]
    fn serde_round_trip_keeps_the_tag() {
        let hold = Hold::distance_based(
            "ACORN",
            Heading::EAST,
            Direction::Right,
            12,
            DistanceDecimiles::new(40),
        );
        let json = serde_json::to_value(&hold).unwrap();
        assert_eq!(json["kind"], "DistanceBasedLeg");
        assert_eq!(json["distance_decimiles"], 40);
        assert!(json.get("duration_seconds").is_none());
        assert!(json["inbound_course"].is_u64());
        assert!(json["efc_minutes"].is_u64());
        let back: Hold = serde_json::from_value(json).unwrap();
        assert_eq!(back, hold);
    }

    #[test]
    fn written_numbers_are_whole() {
        let hold = Hold::time_based(
            "RDU",
            Heading::WEST,
            Direction::Left,
            11,
            DurationSeconds::new(60),
        );
        assert_eq!(
            serde_json::to_string(&hold).unwrap(),
            r#"{"kind":"TimeBasedLeg","fix":"RDU","inbound_course":270,"direction":"Left","efc_minutes":11,"duration_seconds":60}"#
        );

        let toml = toml::to_string(&hold).unwrap();
        assert!(toml.contains("inbound_course = 270\n"));
        assert!(toml.contains("duration_seconds = 60\n"));
        assert_eq!(Hold::from_toml_str(&toml).unwrap(), hold);
    }
}
