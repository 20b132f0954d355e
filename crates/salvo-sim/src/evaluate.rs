//! Episode evaluation entry points.
//!
//! These are the only surface a training system needs: hand in a
//! controller and initial conditions, get a fitness back.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use salvo_core::config::EpisodeConfig;
use salvo_core::error::Result;
use salvo_core::policy::Policy;

use crate::engine::Episode;
use crate::report::EpisodeReport;

/// Run one episode with the supplied random source and return the full report.
pub fn run_episode<P, R>(
    policy: &mut P,
    config: &EpisodeConfig,
    rng: &mut R,
) -> Result<EpisodeReport>
where
    P: Policy + ?Sized,
    R: Rng,
{
    Episode::new(config.clone())?.run(policy, rng)
}

/// Run one episode with a `ChaCha8Rng` seeded from `seed`.
pub fn run_episode_seeded<P>(
    policy: &mut P,
    config: &EpisodeConfig,
    seed: u64,
) -> Result<EpisodeReport>
where
    P: Policy + ?Sized,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    run_episode(policy, config, &mut rng)
}

/// Score a controller using the seed stored in the config.
pub fn evaluate<P>(policy: &mut P, config: &EpisodeConfig) -> Result<f64>
where
    P: Policy + ?Sized,
{
    evaluate_seeded(policy, config, config.seed)
}

/// Score a controller with a `ChaCha8Rng` seeded from `seed`.
/// Same seed = same fitness.
pub fn evaluate_seeded<P>(policy: &mut P, config: &EpisodeConfig, seed: u64) -> Result<f64>
where
    P: Policy + ?Sized,
{
    run_episode_seeded(policy, config, seed).map(|report| report.fitness)
}

/// Score a controller against any random source.
pub fn evaluate_with_rng<P, R>(policy: &mut P, config: &EpisodeConfig, rng: &mut R) -> Result<f64>
where
    P: Policy + ?Sized,
    R: Rng,
{
    run_episode(policy, config, rng).map(|report| report.fitness)
}
