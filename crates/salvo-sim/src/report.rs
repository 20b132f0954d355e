//! Episode results handed back to callers.

use serde::{Deserialize, Serialize};

use salvo_core::enums::EpisodeOutcome;
use salvo_core::events::EpisodeEvent;

/// Running counters tracked by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub shots_fired: u32,
    pub intercepts: u32,
    pub invalid_launches: u32,
}

/// Final state of a finished episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReport {
    /// Fitness after terminal adjustment.
    pub fitness: f64,
    pub outcome: EpisodeOutcome,
    /// Ticks simulated.
    pub ticks: u64,
    pub ammo_remaining: u32,
    pub shots_fired: u32,
    pub intercepts: u32,
    pub invalid_launches: u32,
    pub missiles_remaining: usize,
    /// Trace events, empty unless tracing was enabled.
    pub events: Vec<EpisodeEvent>,
}
