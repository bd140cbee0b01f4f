//! Exhaustive sweep of the classifier over every hold and every course to the fix.
//!
//! Each inbound course is an independent chunk of work, so the sweep is spread
//! over rayon's thread pool and the partial tallies are merged at the end.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use common::structs::{Direction, Heading};

use crate::entry::{classify_course, HoldEntry};

/// A classification that did not give exactly one entry
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub inbound_course: Heading,
    pub direction: Direction,
    pub course_to_fix: Heading,
    pub entries: Vec<HoldEntry>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Survey {
    /// `by_count[n]` is how many cases produced `n` entries
    pub by_count: [u64; 4],
    /// Indexed like [`HoldEntry::ALL`]
    pub by_entry: [u64; 3],
    pub anomalies: Vec<Anomaly>,
}

impl Survey {
    /// Classify every course for every hold.
    pub fn run() -> Self {
        Heading::all()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(Self::of_inbound)
            .reduce(Self::default, Self::merge)
    }

    /// Both turn directions, all 360 courses, for one inbound course.
    pub fn of_inbound(inbound_course: Heading) -> Self {
        let mut survey = Self::default();
        for direction in [Direction::Left, Direction::Right] {
            for course_to_fix in Heading::all() {
                let entries = classify_course(inbound_course, direction, course_to_fix);
                survey.by_count[entries.len().min(3)] += 1;
                for entry in &entries {
                    survey.by_entry[entry_index(*entry)] += 1;
                }
                if entries.len() != 1 {
                    survey.anomalies.push(Anomaly {
                        inbound_course,
                        direction,
                        course_to_fix,
                        entries: entries.into_iter().collect(),
                    });
                }
            }
        }
        survey
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.by_count.iter_mut().zip(other.by_count) {
            *a += b;
        }
        for (a, b) in self.by_entry.iter_mut().zip(other.by_entry) {
            *a += b;
        }
        self.anomalies.extend(other.anomalies);
        self
    }

    pub fn cases(&self) -> u64 {
        self.by_count.iter().sum()
    }

    /// Fraction of all cases that resolve to `entry`
    pub fn share(&self, entry: HoldEntry) -> f64 {
        match self.cases() {
            0 => 0.0,
            cases => self.by_entry[entry_index(entry)] as f64 / cases as f64,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

fn entry_index(entry: HoldEntry) -> usize {
    match entry {
        HoldEntry::DirectEntry => 0,
        HoldEntry::TeardropEntry => 1,
        HoldEntry::ParallelEntry => 2,
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cases: {}", self.cases())?;
        for (n, count) in self.by_count.iter().enumerate() {
            writeln!(f, "  {n} entries: {count}")?;
        }
        for entry in HoldEntry::ALL {
            writeln!(
                f,
                "  {:<15} {:>6} ({:.2}%)",
                entry.label(),
                self.by_entry[entry_index(entry)],
                self.share(entry) * 100.0
            )?;
        }
        for anomaly in self.anomalies.iter().take(10) {
            writeln!(
                f,
                "  anomaly: inbound {} {} turns, course {} -> {:?}",
                anomaly.inbound_course, anomaly.direction, anomaly.course_to_fix, anomaly.entries
            )?;
        }
        if self.anomalies.len() > 10 {
            writeln!(f, "  ... and {} more", self.anomalies.len() - 10)?;
        }
        Ok(())
    }
}
