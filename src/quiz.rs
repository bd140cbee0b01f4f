//! Interactive drill: show a clearance, ask for the entry, reveal the answer.

use std::io::{self, BufRead, Write};

use common::rand::Rng;
use tracing::debug;
use yansi::Paint;

use crate::entry::HoldEntry;
use crate::instructions::{Assumption, Instructions, Solution};
use crate::scenario::{HoldingScenario, ScenarioGenerator};

/// Answers so far
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub asked: usize,
}

impl Score {
    pub fn percent(self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.correct as f64 * 100.0 / self.asked as f64
        }
    }
}

pub struct Quiz<'a, I, O> {
    generator: &'a ScenarioGenerator,
    input: I,
    output: O,
}

impl<'a, I: BufRead, O: Write> Quiz<'a, I, O> {
    pub fn new(generator: &'a ScenarioGenerator, input: I, output: O) -> Self {
        Self {
            generator,
            input,
            output,
        }
    }

    /// Ask up to `rounds` questions. Stops early when the input runs out.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R, rounds: usize) -> io::Result<Score> {
        let mut score = Score::default();
        for round in 1..=rounds {
            let scenario = self.generator.generate(rng);
            writeln!(self.output, "{}", Paint::new(format!("Round {round}/{rounds}")).bold())?;
            match self.ask(&scenario)? {
                Some(correct) => {
                    score.asked += 1;
                    if correct {
                        score.correct += 1;
                    }
                }
                None => break,
            }
        }
        writeln!(
            self.output,
            "Score: {}/{} ({:.0}%)",
            score.correct,
            score.asked,
            score.percent()
        )?;
        Ok(score)
    }

    /// `Some(correct?)` once an answer is read, `None` at end of input
    fn ask(&mut self, scenario: &HoldingScenario) -> io::Result<Option<bool>> {
        writeln!(self.output, "{}", Instructions(&scenario.hold))?;
        writeln!(self.output, "{}", Assumption(scenario.course_to_fix))?;

        let answer = loop {
            write!(self.output, "Entry? [d]irect, [t]eardrop, [p]arallel: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            match line.trim().parse::<HoldEntry>() {
                Ok(answer) => break answer,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        };

        let correct = scenario.accepts(answer);
        debug!(%answer, correct, "quiz answer");
        let solution = Solution(&scenario.solution);
        if correct {
            writeln!(self.output, "{} {solution}", Paint::green("Correct:"))?;
        } else {
            writeln!(self.output, "{} it is {solution}", Paint::red("Wrong:"))?;
        }
        writeln!(self.output)?;
        Ok(Some(correct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use common::rand::rngs::SmallRng;
    use common::rand::SeedableRng;

    fn answers_for(generator: &ScenarioGenerator, seed: u64, rounds: usize) -> Vec<HoldEntry> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..rounds)
            .filter_map(|_| generator.generate(&mut rng).solution.first().copied())
            .collect()
    }

    #[test]
    fn all_correct() {
        Paint::disable();
        let generator = ScenarioGenerator::new(&ScenarioConfig::default()).unwrap();
        let input: String = answers_for(&generator, 11, 4)
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect();

        let mut output = Vec::new();
        let mut rng = SmallRng::seed_from_u64(11);
        let score = Quiz::new(&generator, input.as_bytes(), &mut output)
            .run(&mut rng, 4)
            .unwrap();

        assert_eq!(score, Score { correct: 4, asked: 4 });
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Score: 4/4 (100%)"));
        assert!(text.contains("expect further clearance"));
    }

    #[test]
    fn retries_garbage_and_stops_at_eof() {
        Paint::disable();
        let generator = ScenarioGenerator::new(&ScenarioConfig::default()).unwrap();
        let first = answers_for(&generator, 3, 1)[0];
        let wrong = HoldEntry::ALL
            .into_iter()
            .find(|entry| *entry != first)
            .unwrap();
        let input = format!("racetrack\n{wrong}\n");

        let mut output = Vec::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let score = Quiz::new(&generator, input.as_bytes(), &mut output)
            .run(&mut rng, 5)
            .unwrap();

        assert_eq!(score, Score { correct: 0, asked: 1 });
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"racetrack\" is not an entry"));
        assert!(text.contains(&format!("it is {first}")));
    }

    #[test]
    fn percent() {
        assert_eq!(Score::default().percent(), 0.0);
        assert_eq!(Score { correct: 1, asked: 4 }.percent(), 25.0);
    }
}
