//! Salvo command-line runner.
//!
//! # Usage
//!
//! ```bash
//! # One traced episode of the reference raid with the rule controller
//! salvo run --policy nearest --trace
//!
//! # Score a trained network over 1000 seeds
//! salvo trials --policy network --network best.json --count 1000
//!
//! # Custom raid
//! salvo run --config raid.json --seed 7 --json
//! ```
//!
//! Results go to stdout; logs go to stderr (`-v` or `RUST_LOG` to raise).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use salvo_cli::controller::{Controller, ControllerKind};
use salvo_cli::trials::run_trials;
use salvo_core::config::EpisodeConfig;
use salvo_sim::run_episode_seeded;

#[derive(Parser)]
#[command(name = "salvo")]
#[command(about = "Score missile-defense controllers against an inbound raid")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single episode and print its outcome
    Run {
        #[command(flatten)]
        setup: Setup,

        /// RNG seed (defaults to the config's seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Print per-event trace lines
        #[arg(long)]
        trace: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score one controller over many seeds
    Trials {
        #[command(flatten)]
        setup: Setup,

        /// Number of episodes
        #[arg(short = 'n', long, default_value = "100")]
        count: u32,

        /// First seed; episodes use consecutive seeds
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct Setup {
    /// Episode config JSON (defaults to the reference raid)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Controller to evaluate
    #[arg(short, long, value_enum, default_value = "nearest")]
    policy: ControllerKind,

    /// Network weights JSON for `--policy network`
    #[arg(long)]
    network: Option<PathBuf>,
}

impl Setup {
    fn load(&self) -> Result<(EpisodeConfig, Controller)> {
        let config = match &self.config {
            Some(path) => EpisodeConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => EpisodeConfig::default(),
        };
        let controller = Controller::build(self.policy, self.network.as_deref(), &config)?;
        Ok((config, controller))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Run {
            setup,
            seed,
            trace,
            json,
        } => {
            let (mut config, mut controller) = setup.load()?;
            config.trace |= trace;
            let seed = seed.unwrap_or(config.seed);
            let report = run_episode_seeded(&mut controller, &config, seed)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for event in &report.events {
                    println!("{event}");
                }
                println!(
                    "outcome: {:?}  fitness: {}  ticks: {}",
                    report.outcome, report.fitness, report.ticks
                );
                println!(
                    "  shots: {}  intercepts: {}  invalid: {}  ammo left: {}",
                    report.shots_fired,
                    report.intercepts,
                    report.invalid_launches,
                    report.ammo_remaining
                );
            }
        }
        Commands::Trials {
            setup,
            count,
            seed,
            json,
        } => {
            let (config, controller) = setup.load()?;
            let summary = run_trials(&controller, &config, seed, count)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{}: {} trials from seed {}",
                    summary.controller, summary.trials, summary.first_seed
                );
                println!(
                    "  fitness mean {:.2}  min {}  max {}",
                    summary.mean_fitness, summary.min_fitness, summary.max_fitness
                );
                println!(
                    "  intercepts/episode {:.2}  destroyed {}  swept {}  tick limit {}",
                    summary.mean_intercepts,
                    summary.ship_destroyed,
                    summary.all_intercepted,
                    summary.tick_limit
                );
            }
        }
    }

    Ok(())
}
