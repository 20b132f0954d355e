//! Fitness accounting: what each phase of a tick is worth.

use salvo_core::config::Scoring;
use salvo_core::enums::{EpisodeOutcome, InterceptResult, LaunchOutcome};

/// Fitness change from the fire-decision phase.
pub fn launch_reward(scoring: &Scoring, outcome: &LaunchOutcome) -> f64 {
    match outcome {
        LaunchOutcome::Held => 0.0,
        LaunchOutcome::Invalid { .. } => scoring.invalid_launch_penalty,
        LaunchOutcome::Fired {
            result: InterceptResult::Hit,
            ..
        } => scoring.intercept_hit_reward,
        LaunchOutcome::Fired {
            result: InterceptResult::Miss,
            ..
        } => scoring.intercept_miss_reward,
    }
}

/// Fitness change applied once when the episode terminates.
pub fn terminal_adjustment(scoring: &Scoring, outcome: EpisodeOutcome) -> f64 {
    match outcome {
        EpisodeOutcome::ShipDestroyed => scoring.ship_destroyed_penalty,
        EpisodeOutcome::AllIntercepted => scoring.clean_sweep_bonus,
        EpisodeOutcome::TickLimit => 0.0,
    }
}
