//! Simulation engine for salvo.
//!
//! Owns the episode state, runs the per-tick systems, and scores a
//! controller. Completely headless and deterministic for a given
//! random source.

pub mod engine;
pub mod evaluate;
pub mod report;
pub mod scenario;
pub mod systems;

pub use engine::Episode;
pub use evaluate::{evaluate, evaluate_seeded, evaluate_with_rng, run_episode, run_episode_seeded};
pub use report::{EpisodeReport, EpisodeStats};
pub use salvo_core as core;
