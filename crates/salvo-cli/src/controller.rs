//! Controller selection for the command line.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use salvo_core::config::EpisodeConfig;
use salvo_core::policy::Policy;
use salvo_policy::{FeedForward, HoldFire, NearestThreat};

/// Controllers selectable with `--policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ControllerKind {
    /// Never fire.
    Hold,
    /// Fire at the closest missile inside the intercept window.
    Nearest,
    /// Fixed-weight network loaded from `--network`.
    Network,
}

/// A concrete controller. Cheap to clone so each trial gets its own.
#[derive(Debug, Clone)]
pub enum Controller {
    Hold(HoldFire),
    Nearest(NearestThreat),
    Network(FeedForward),
}

impl Controller {
    /// Build the requested controller for `config`'s raid.
    pub fn build(
        kind: ControllerKind,
        network: Option<&Path>,
        config: &EpisodeConfig,
    ) -> Result<Self> {
        match kind {
            ControllerKind::Hold => Ok(Controller::Hold(HoldFire)),
            ControllerKind::Nearest => Ok(Controller::Nearest(NearestThreat::for_config(config))),
            ControllerKind::Network => {
                let Some(path) = network else {
                    bail!("--policy network requires --network <FILE>");
                };
                let net = FeedForward::from_json_file(path)
                    .with_context(|| format!("loading network {}", path.display()))?;
                net.check_fits(config.missile_count())?;
                Ok(Controller::Network(net))
            }
        }
    }
}

impl Policy for Controller {
    fn name(&self) -> &str {
        match self {
            Controller::Hold(p) => p.name(),
            Controller::Nearest(p) => p.name(),
            Controller::Network(p) => p.name(),
        }
    }

    fn decide(&mut self, observation: &[f64]) -> Vec<f64> {
        match self {
            Controller::Hold(p) => p.decide(observation),
            Controller::Nearest(p) => p.decide(observation),
            Controller::Network(p) => p.decide(observation),
        }
    }
}
