//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// A missile reached the ship.
    ShipDestroyed,
    /// Every missile was intercepted and the ship survived.
    AllIntercepted,
    /// The tick cap was reached with the ship and at least one missile alive.
    TickLimit,
}

/// Result of a valid launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterceptResult {
    Hit,
    Miss,
}

/// What the fire-decision phase did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LaunchOutcome {
    /// Fire intent was at or below the threshold.
    Held,
    /// Fire was requested at `target` but the launch checks failed. No
    /// round spent.
    Invalid { target: usize },
    /// A round was fired at `target`, which was `distance` from the ship.
    Fired {
        target: usize,
        distance: f64,
        result: InterceptResult,
    },
}
