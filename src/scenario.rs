//! Random holding problems for practice.
//!
//! All randomness comes from the `Rng` handed in, so a seeded generator always
//! produces the same problems.

use std::collections::BTreeSet;

use common::rand::distributions::WeightedIndex;
use common::rand::prelude::*;
use serde::Serialize;
use tracing::debug;

use common::structs::{Direction, Heading};

use crate::config::{ConfigError, ScenarioConfig, Weighted};
use crate::entry::{classify, HoldEntry};
use crate::hold::{DistanceDecimiles, DurationSeconds, Hold, LegMeasure};

/// A hold, the course the aircraft is flying to the fix, and the correct entry
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HoldingScenario {
    pub hold: Hold,
    pub course_to_fix: Heading,
    pub solution: BTreeSet<HoldEntry>,
}

impl HoldingScenario {
    pub fn new(hold: Hold, course_to_fix: Heading) -> Self {
        let solution = classify(&hold, course_to_fix);
        Self {
            hold,
            course_to_fix,
            solution,
        }
    }

    /// Is `answer` one of the correct entries?
    pub fn accepts(&self, answer: HoldEntry) -> bool {
        self.solution.contains(&answer)
    }
}

/// Turns a [`ScenarioConfig`] into holding problems
#[derive(Debug, Clone)]
pub struct ScenarioGenerator {
    legs: Vec<LegMeasure>,
    leg_index: WeightedIndex<f64>,
    efc_minutes: (u32, u32),
    intersections: Vec<String>,
    vors: Vec<String>,
}

impl ScenarioGenerator {
    pub fn new(config: &ScenarioConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // One flat table of leg options: the odds of the leg kind times the odds
        // of the value within its own table.
        let mut legs = Vec::new();
        let mut weights = Vec::new();
        let mut add_table = |kind_weight: u32, table: &[Weighted], make: fn(u32) -> LegMeasure| {
            let total: f64 = table.iter().map(|w| f64::from(w.weight)).sum();
            if kind_weight == 0 || total == 0.0 {
                return;
            }
            for w in table {
                legs.push(make(w.value));
                weights.push(f64::from(kind_weight) * f64::from(w.weight) / total);
            }
        };
        add_table(config.time_leg_weight, &config.leg_durations, |s| {
            LegMeasure::TimeBasedLeg(DurationSeconds::new(s))
        });
        add_table(config.distance_leg_weight, &config.leg_distances, |d| {
            LegMeasure::DistanceBasedLeg(DistanceDecimiles::new(d))
        });
        let leg_index = WeightedIndex::new(&weights)
            .map_err(|e| ConfigError::Invalid(format!("leg tables: {e}")))?;

        Ok(Self {
            legs,
            leg_index,
            efc_minutes: (config.efc_minutes_min, config.efc_minutes_max),
            intersections: config.intersections.iter().map(|n| n.to_uppercase()).collect(),
            vors: config
                .vors
                .iter()
                .map(|n| format!("{} VOR", title_case(n)))
                .collect(),
        })
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> HoldingScenario {
        let fix = self.fix_name(rng);
        let inbound_course: Heading = rng.gen();
        let course_to_fix: Heading = rng.gen();
        let direction: Direction = rng.gen();
        let efc_minutes = rng.gen_range(self.efc_minutes.0..=self.efc_minutes.1);
        let leg = self.legs[self.leg_index.sample(rng)];

        debug!(%fix, %inbound_course, %course_to_fix, %direction, %leg, "generated scenario");

        HoldingScenario::new(
            Hold {
                fix,
                inbound_course,
                direction,
                efc_minutes,
                leg,
            },
            course_to_fix,
        )
    }

    /// Intersections and VORs are equally likely, whatever the length of each list.
    fn fix_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let pool = match (self.intersections.is_empty(), self.vors.is_empty()) {
            (true, _) => &self.vors,
            (_, true) => &self.intersections,
            _ if rng.gen() => &self.vors,
            _ => &self.intersections,
        };
        pool.choose(rng).cloned().unwrap_or_default()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::rand::rngs::SmallRng;

    fn generator(config: &ScenarioConfig) -> ScenarioGenerator {
        ScenarioGenerator::new(config).unwrap()
    }

    #[test]
    fn deterministic_with_seed() {
        let generator = generator(&ScenarioConfig::default());
        let a: Vec<_> = {
            let mut rng = SmallRng::seed_from_u64(42);
            (0..20).map(|_| generator.generate(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = SmallRng::seed_from_u64(42);
            (0..20).map(|_| generator.generate(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn solution_matches_classifier() {
        let generator = generator(&ScenarioConfig::default());
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let scenario = generator.generate(&mut rng);
            assert_eq!(scenario.solution, classify(&scenario.hold, scenario.course_to_fix));
            assert_eq!(scenario.solution.len(), 1);
            let efc = scenario.hold.efc_minutes;
            assert!((5..=45).contains(&efc));
        }
    }

    #[test]
    fn respects_tables() {
        let config = ScenarioConfig {
            distance_leg_weight: 0,
            leg_durations: vec![Weighted { value: 90, weight: 1 }, Weighted { value: 60, weight: 0 }],
            intersections: vec!["woody".into()],
            vors: vec![],
            efc_minutes_min: 7,
            efc_minutes_max: 7,
            ..ScenarioConfig::default()
        };
        let generator = generator(&config);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..200 {
            let scenario = generator.generate(&mut rng);
            assert_eq!(scenario.hold.fix, "WOODY");
            assert_eq!(scenario.hold.efc_minutes, 7);
            assert_eq!(scenario.hold.leg, LegMeasure::TimeBasedLeg(DurationSeconds::new(90)));
        }
    }

    #[test]
    fn vor_names() {
        let config = ScenarioConfig {
            time_leg_weight: 0,
            leg_distances: vec![Weighted { value: 40, weight: 1 }],
            intersections: vec![],
            vors: vec!["rALEIGH".into()],
            ..ScenarioConfig::default()
        };
        let generator = generator(&config);
        let mut rng = SmallRng::seed_from_u64(9);
        let scenario = generator.generate(&mut rng);
        assert_eq!(scenario.hold.fix, "Raleigh VOR");
        assert_eq!(
            scenario.hold.leg,
            LegMeasure::DistanceBasedLeg(DistanceDecimiles::new(40))
        );
    }

    #[test]
    fn both_kinds_of_fix_and_leg_show_up() {
        let generator = generator(&ScenarioConfig::default());
        let mut rng = SmallRng::seed_from_u64(5);
        let scenarios: Vec<_> = (0..500).map(|_| generator.generate(&mut rng)).collect();
        assert!(scenarios.iter().any(|s| s.hold.fix.ends_with(" VOR")));
        assert!(scenarios.iter().any(|s| !s.hold.fix.ends_with(" VOR")));
        assert!(scenarios
            .iter()
            .any(|s| matches!(s.hold.leg, LegMeasure::TimeBasedLeg(_))));
        assert!(scenarios
            .iter()
            .any(|s| matches!(s.hold.leg, LegMeasure::DistanceBasedLeg(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ScenarioConfig {
            leg_durations: vec![],
            ..ScenarioConfig::default()
        };
        assert!(ScenarioGenerator::new(&config).is_err());
    }

    #[test]
    fn title_case_names() {
        assert_eq!(title_case("harbor"), "Harbor");
        assert_eq!(title_case("NEWPORT"), "Newport");
        assert_eq!(title_case(""), "");
    }
}
