use std::fmt;
use std::ops;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEGREE_SYM, FULL_CIRCLE, HALF_CIRCLE};

/// A course or heading in whole degrees, always within `(0, 360]`.
///
/// The only way to get one is through a validating constructor, so any
/// `Heading` in hand is already known to be in range.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "f64", into = "u16")]
pub struct Heading(u16);

/// Why a raw value was rejected as a heading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeadingError {
    #[error("{0} is not a whole number of degrees")]
    NotInteger(f64),
    #[error("{0} is outside of (0, 360]")]
    OutOfRange(f64),
    #[error("{0:?} is not a number")]
    Malformed(String),
}

impl HeadingError {
    /// Short machine-readable tag for the failure
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NotInteger(_) => "not-integer",
            Self::OutOfRange(_) => "out-of-range",
            Self::Malformed(_) => "not-a-number",
        }
    }
}

impl Heading {
    pub const NORTH: Self = Self::const_new(360);
    pub const EAST: Self = Self::const_new(90);
    pub const SOUTH: Self = Self::const_new(180);
    pub const WEST: Self = Self::const_new(270);

    /// For constants; an out-of-range value fails to compile when used in a const context.
    ///
    /// # Panics
    ///
    /// Panics if `degrees` is not in `1..=360` when called at runtime. Use
    /// [`Heading::new`] for values that are not known up front.
    pub const fn const_new(degrees: u16) -> Self {
        assert!(degrees > 0 && degrees <= FULL_CIRCLE, "heading out of range");
        Self(degrees)
    }

    /// Validate a whole number of degrees
    pub fn new(degrees: u16) -> Result<Self, HeadingError> {
        if degrees == 0 || degrees > FULL_CIRCLE {
            Err(HeadingError::OutOfRange(f64::from(degrees)))
        } else {
            Ok(Self(degrees))
        }
    }

    /// Validate an arbitrary number, rejecting fractions before checking the range
    pub fn from_degrees(degrees: f64) -> Result<Self, HeadingError> {
        if !degrees.is_finite() || degrees.fract() != 0.0 {
            return Err(HeadingError::NotInteger(degrees));
        }
        if degrees <= 0.0 || degrees > f64::from(FULL_CIRCLE) {
            return Err(HeadingError::OutOfRange(degrees));
        }
        Ok(Self(degrees as u16))
    }

    /// Reduce any number of degrees onto the circle, mapping a zero remainder to 360.
    pub(crate) fn wrap(degrees: u32) -> Self {
        match (degrees % u32::from(FULL_CIRCLE)) as u16 {
            0 => Self::NORTH,
            d => Self(d),
        }
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Every heading, 001 through 360
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (1..=FULL_CIRCLE).map(Self)
    }

    /// Is this exactly the reciprocal of `other`?
    pub fn is_reciprocal_of(self, other: Self) -> bool {
        self == other + Self(HALF_CIRCLE)
    }
}

/// `a + b` wraps around north.
impl ops::Add for Heading {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::wrap(u32::from(self.0) + u32::from(rhs.0))
    }
}

/// `a - b` is the clockwise distance walking from `b` to `a`, in `(0, 360]`.
///
/// It is not symmetric: `90 - 300` is 150 while `300 - 90` is 210.
impl ops::Sub for Heading {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::wrap(u32::from(self.0) + u32::from(FULL_CIRCLE) - u32::from(rhs.0))
    }
}

impl TryFrom<f64> for Heading {
    type Error = HeadingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_degrees(value)
    }
}

impl TryFrom<i64> for Heading {
    type Error = HeadingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map_err(|_| HeadingError::OutOfRange(value as f64))
            .and_then(Self::new)
    }
}

impl From<Heading> for u16 {
    fn from(value: Heading) -> Self {
        value.0
    }
}

impl FromStr for Heading {
    type Err = HeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(DEGREE_SYM);
        let degrees: f64 = trimmed
            .parse()
            .map_err(|_| HeadingError::Malformed(s.to_owned()))?;
        Self::from_degrees(degrees)
    }
}

/// Three digits and a degree sign, the way courses are read out: `090°`
impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}{DEGREE_SYM}", self.0)
    }
}

/// Uniform over all 360 headings
impl Distribution<Heading> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        Heading(rng.gen_range(1..=FULL_CIRCLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn h(degrees: u16) -> Heading {
        Heading::new(degrees).unwrap()
    }

    #[test]
    fn validation() {
        assert!(Heading::new(350).is_ok());
        assert!(Heading::new(360).is_ok());
        assert!(Heading::new(1).is_ok());
        assert_eq!(Heading::new(0), Err(HeadingError::OutOfRange(0.0)));
        assert_eq!(Heading::new(365), Err(HeadingError::OutOfRange(365.0)));
        assert_eq!(Heading::try_from(-1i64), Err(HeadingError::OutOfRange(-1.0)));
        assert_eq!(
            Heading::from_degrees(100.1),
            Err(HeadingError::NotInteger(100.1))
        );
        assert_eq!(Heading::from_degrees(100.1).unwrap_err().reason(), "not-integer");
        assert_eq!(Heading::from_degrees(365.0).unwrap_err().reason(), "out-of-range");
        assert!(Heading::from_degrees(f64::NAN).is_err());
        assert_eq!(Heading::from_degrees(270.0), Ok(Heading::WEST));
    }

    #[test]
    fn add() {
        assert_eq!(h(180) + h(100), h(280));
        assert_eq!(h(300) + h(90), h(30));
        assert_eq!(h(360) + h(360), h(360));
        assert_eq!(h(270) + h(90), Heading::NORTH);
    }

    #[test]
    fn sub() {
        assert_eq!(h(180) - h(100), h(80));
        assert_eq!(h(90) - h(300), h(150));
        assert_eq!(h(360) - h(90), h(270));
        assert_eq!(h(90) - h(90), h(360));
    }

    #[test]
    fn reciprocal() {
        assert!(h(90).is_reciprocal_of(h(270)));
        assert!(h(360).is_reciprocal_of(h(180)));
        assert!(!h(90).is_reciprocal_of(h(90)));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("270".parse::<Heading>(), Ok(Heading::WEST));
        assert_eq!(" 90\u{00b0}".parse::<Heading>(), Ok(Heading::EAST));
        assert_eq!("north".parse::<Heading>().unwrap_err().reason(), "not-a-number");
        assert_eq!("0".parse::<Heading>().unwrap_err().reason(), "out-of-range");
        assert_eq!(h(90).to_string(), "090\u{00b0}");
        assert_eq!(h(360).to_string(), "360\u{00b0}");
    }

    #[test]
    fn serde_validates() {
        let ok: Heading = serde_json::from_str("340").unwrap();
        assert_eq!(ok, h(340));
        assert!(serde_json::from_str::<Heading>("361").is_err());
        assert!(serde_json::from_str::<Heading>("12.5").is_err());
        assert_eq!(serde_json::to_string(&h(5)).unwrap(), "5");
    }

    #[test]
    fn random_in_domain() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let heading: Heading = rng.gen();
            assert!((1..=360).contains(&heading.degrees()));
        }
    }

    #[test]
    fn all_headings() {
        let all: Vec<_> = Heading::all().collect();
        assert_eq!(all.len(), 360);
        assert_eq!(all[0], h(1));
        assert_eq!(all[359], Heading::NORTH);
    }

    #[test]
    fn const_new_accepts_the_domain() {
        const EDGE: Heading = Heading::const_new(1);
        assert_eq!(EDGE, h(1));
        assert_eq!(Heading::const_new(360), Heading::NORTH);
    }

    #[test]
    #[should_panic(expected = "heading out of range")]
    fn const_new_panics_at_runtime() {
        let degrees = std::hint::black_box(0);
        let _ = Heading::const_new(degrees);
    }
}
