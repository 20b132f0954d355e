//! Monte-Carlo scoring of one controller over consecutive seeds.

use anyhow::{ensure, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use salvo_core::config::EpisodeConfig;
use salvo_core::enums::EpisodeOutcome;
use salvo_core::policy::Policy;
use salvo_sim::{run_episode_seeded, EpisodeReport};

use crate::controller::Controller;

/// Aggregate results of a batch of seeded episodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSummary {
    pub controller: String,
    pub trials: u32,
    pub first_seed: u64,
    pub mean_fitness: f64,
    pub min_fitness: f64,
    pub max_fitness: f64,
    pub mean_intercepts: f64,
    pub ship_destroyed: u32,
    pub all_intercepted: u32,
    pub tick_limit: u32,
}

/// Run `count` episodes with seeds `first_seed..first_seed + count` in
/// parallel. Each episode gets a fresh clone of the controller.
pub fn run_trials(
    controller: &Controller,
    config: &EpisodeConfig,
    first_seed: u64,
    count: u32,
) -> Result<TrialSummary> {
    ensure!(count > 0, "trial count must be > 0");
    info!(controller = controller.name(), count, first_seed, "running trials");

    let reports = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let mut policy = controller.clone();
            run_episode_seeded(&mut policy, config, first_seed.wrapping_add(i))
        })
        .collect::<salvo_core::Result<Vec<EpisodeReport>>>()?;

    Ok(summarize(controller.name(), first_seed, &reports))
}

fn summarize(controller: &str, first_seed: u64, reports: &[EpisodeReport]) -> TrialSummary {
    let trials = reports.len() as u32;
    let n = reports.len() as f64;
    let count_outcome = |outcome: EpisodeOutcome| {
        reports.iter().filter(|r| r.outcome == outcome).count() as u32
    };

    TrialSummary {
        controller: controller.to_string(),
        trials,
        first_seed,
        mean_fitness: reports.iter().map(|r| r.fitness).sum::<f64>() / n,
        min_fitness: reports.iter().map(|r| r.fitness).fold(f64::INFINITY, f64::min),
        max_fitness: reports.iter().map(|r| r.fitness).fold(f64::NEG_INFINITY, f64::max),
        mean_intercepts: reports.iter().map(|r| r.intercepts as f64).sum::<f64>() / n,
        ship_destroyed: count_outcome(EpisodeOutcome::ShipDestroyed),
        all_intercepted: count_outcome(EpisodeOutcome::AllIntercepted),
        tick_limit: count_outcome(EpisodeOutcome::TickLimit),
    }
}
