//! Trace events emitted by the simulation for diagnostic output.
//!
//! Events are recorded only when tracing is enabled in the episode config
//! and are never read back by the engine. A launch that fails its checks
//! does not produce an event.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EpisodeOutcome;

/// One human-readable engagement event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EpisodeEvent {
    /// A missile reached the ship.
    ShipHit { tick: u64, missile: usize },
    /// An interceptor destroyed its target.
    Intercepted {
        tick: u64,
        missile: usize,
        distance: f64,
    },
    /// An interceptor was fired and missed.
    Missed { tick: u64, missile: usize },
    /// The episode terminated.
    Finished { tick: u64, outcome: EpisodeOutcome },
}

impl fmt::Display for EpisodeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeEvent::ShipHit { tick, missile } => {
                write!(f, "[tick {tick}] missile {missile} hit the ship")
            }
            EpisodeEvent::Intercepted {
                tick,
                missile,
                distance,
            } => write!(
                f,
                "[tick {tick}] intercepted missile {missile} at distance {distance:.2}"
            ),
            EpisodeEvent::Missed { tick, missile } => {
                write!(f, "[tick {tick}] fired at missile {missile} but missed")
            }
            EpisodeEvent::Finished { tick, outcome } => {
                let text = match outcome {
                    EpisodeOutcome::ShipDestroyed => "the ship was destroyed",
                    EpisodeOutcome::AllIntercepted => "all missiles intercepted",
                    EpisodeOutcome::TickLimit => "tick limit reached",
                };
                write!(f, "[tick {tick}] {text}")
            }
        }
    }
}
