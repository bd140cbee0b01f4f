//! Settings for scenario generation and the quiz, read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct HoldingConfig {
    pub scenario: ScenarioConfig,
    pub quiz: QuizConfig,
}

/// A value and its relative odds of being picked
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Weighted {
    pub value: u32,
    pub weight: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Relative odds of a time-based leg
    pub time_leg_weight: u32,
    /// Relative odds of a distance-based leg
    pub distance_leg_weight: u32,
    /// Seconds
    pub leg_durations: Vec<Weighted>,
    /// Decimiles
    pub leg_distances: Vec<Weighted>,
    pub efc_minutes_min: u32,
    pub efc_minutes_max: u32,
    pub intersections: Vec<String>,
    pub vors: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    pub rounds: usize,
    pub color: bool,
}

fn weighted(table: &[(u32, u32)]) -> Vec<Weighted> {
    table
        .iter()
        .map(|&(value, weight)| Weighted { value, weight })
        .collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            time_leg_weight: 1,
            distance_leg_weight: 1,
            leg_durations: weighted(&DEFAULT_LEG_DURATIONS),
            leg_distances: weighted(&DEFAULT_LEG_DISTANCES),
            efc_minutes_min: DEFAULT_EFC_MINUTES.0,
            efc_minutes_max: DEFAULT_EFC_MINUTES.1,
            intersections: names(DEFAULT_INTERSECTIONS),
            vors: names(DEFAULT_VORS),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_QUIZ_ROUNDS,
            color: true,
        }
    }
}

impl HoldingConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Use the file if one is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scenario.validate()
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_owned()));

        match self.time_leg_weight.checked_add(self.distance_leg_weight) {
            None => return invalid("time_leg_weight and distance_leg_weight are too large"),
            Some(0) => return invalid("time_leg_weight and distance_leg_weight are both zero"),
            Some(_) => {}
        }
        if self.time_leg_weight > 0 && !has_positive_weight(&self.leg_durations) {
            return invalid("leg_durations needs at least one entry with a positive weight");
        }
        if self.distance_leg_weight > 0 && !has_positive_weight(&self.leg_distances) {
            return invalid("leg_distances needs at least one entry with a positive weight");
        }
        if self.efc_minutes_min > self.efc_minutes_max {
            return invalid("efc_minutes_min is greater than efc_minutes_max");
        }
        if self.intersections.is_empty() && self.vors.is_empty() {
            return invalid("intersections and vors are both empty");
        }
        Ok(())
    }
}

fn has_positive_weight(table: &[Weighted]) -> bool {
    table.iter().any(|w| w.weight > 0)
}
