//! Work out and practise holding pattern entries.
//!
//! Run:
//! ```bash
//! $ holding -h
//! ```
//! to see the available commands. Set `RUST_LOG=debug` to trace each classification.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yansi::Paint;

use common::rand::prelude::*;
use common::rand::rngs::SmallRng;
use common::structs::{Direction, Heading};

use holding::config::HoldingConfig;
use holding::entry::{classify, EntryBoundaries};
use holding::hold::{DurationSeconds, Hold};
use holding::instructions::{Assumption, Instructions, Solution};
use holding::quiz::Quiz;
use holding::scenario::ScenarioGenerator;
use holding::survey::Survey;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with scenario and quiz settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the entry for one course to the fix
    Classify(ClassifyArgs),
    /// Print the three entry sectors of a hold
    Boundaries(HoldArgs),
    /// Generate a random holding problem
    Scenario {
        #[arg(long)]
        seed: Option<u64>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Practise entries interactively
    Quiz {
        /// Number of questions (default from config)
        #[arg(long)]
        rounds: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify every course for every hold and report the distribution
    Survey,
}

#[derive(Args, Debug)]
struct HoldArgs {
    /// Read the hold from a TOML file instead
    #[arg(long, conflicts_with_all = ["inbound", "turns"])]
    hold: Option<PathBuf>,
    /// Inbound course, 1..=360
    #[arg(long, required_unless_present = "hold")]
    inbound: Option<Heading>,
    /// Turn direction: left or right
    #[arg(long, required_unless_present = "hold")]
    turns: Option<Direction>,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    #[command(flatten)]
    hold: HoldArgs,
    /// Course being flown to the fix, 1..=360
    #[arg(long)]
    course: Heading,
}

impl HoldArgs {
    fn into_hold(self) -> anyhow::Result<Hold> {
        match (self.hold, self.inbound, self.turns) {
            (Some(path), _, _) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("read {}", path.display()))?;
                Hold::from_toml_str(&contents).with_context(|| format!("decode {}", path.display()))
            }
            (None, Some(inbound), Some(turns)) => Ok(Hold::time_based(
                "FIX",
                inbound,
                turns,
                0,
                DurationSeconds::new(60),
            )),
            _ => bail!("either --hold or both --inbound and --turns are required"),
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{e:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HoldingConfig::load_or_default(cli.config.as_deref()).context("load config")?;
    if !config.quiz.color {
        Paint::disable();
    }

    match cli.cmd {
        Command::Classify(args) => cmd_classify(args),
        Command::Boundaries(args) => cmd_boundaries(args),
        Command::Scenario { seed, json } => cmd_scenario(&config, seed, json),
        Command::Quiz { rounds, seed } => {
            cmd_quiz(&config, rounds.unwrap_or(config.quiz.rounds), seed)
        }
        Command::Survey => cmd_survey(),
    }
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let course = args.course;
    let hold = args.hold.into_hold()?;
    let entries = classify(&hold, course);

    println!("{}", Solution(&entries));
    print_sectors(&hold);
    Ok(())
}

fn cmd_boundaries(args: HoldArgs) -> anyhow::Result<()> {
    let hold = args.into_hold()?;
    print_sectors(&hold);
    Ok(())
}

fn print_sectors(hold: &Hold) {
    let boundaries = EntryBoundaries::of(hold);
    for (entry, sector) in boundaries.sectors(hold.direction) {
        println!("  {:<15} {sector} ({}\u{00b0})", entry.label(), sector.width());
    }
}

fn cmd_scenario(config: &HoldingConfig, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let generator = ScenarioGenerator::new(&config.scenario)?;
    let scenario = generator.generate(&mut rng(seed));

    if json {
        println!("{}", serde_json::to_string_pretty(&scenario)?);
    } else {
        println!("{}", Instructions(&scenario.hold));
        println!("{}", Assumption(scenario.course_to_fix));
        println!("Answer: {}", Solution(&scenario.solution));
    }
    Ok(())
}

fn cmd_quiz(config: &HoldingConfig, rounds: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let generator = ScenarioGenerator::new(&config.scenario)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let score = Quiz::new(&generator, stdin.lock(), stdout.lock())
        .run(&mut rng(seed), rounds)
        .context("quiz i/o")?;
    info!(correct = score.correct, asked = score.asked, "quiz finished");
    Ok(())
}

fn cmd_survey() -> anyhow::Result<()> {
    let survey = Survey::run();
    print!("{survey}");
    if !survey.is_clean() {
        bail!(
            "{} classifications did not yield exactly one entry",
            survey.anomalies.len()
        );
    }
    Ok(())
}
