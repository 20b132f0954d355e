//! Nearest-threat rule policy.
//!
//! Observed distances are one motion step old by the time the launch is
//! checked, so the policy leads each missile by its closing speed before
//! testing the intercept window.

use serde::{Deserialize, Serialize};

use salvo_core::config::EpisodeConfig;
use salvo_core::policy::{action_len, ObservationView, Policy};

/// Fires at the closest missile whose predicted distance is inside the
/// intercept window, whenever the battery is ready.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestThreat {
    /// Exclusive lower bound of the window.
    pub min_range: f64,
    /// Exclusive upper bound of the window.
    pub max_range: f64,
    /// Distance a missile closes before the launch is checked.
    pub closing_speed: f64,
}

impl NearestThreat {
    /// Match the window and missile speed of an episode config.
    pub fn for_config(config: &EpisodeConfig) -> Self {
        Self {
            min_range: config.min_intercept_dist,
            max_range: config.max_intercept_dist,
            closing_speed: config.missile_speed,
        }
    }

    fn predicted(&self, distance: f64) -> f64 {
        distance - self.closing_speed
    }

    fn in_window(&self, distance: f64) -> bool {
        self.min_range < distance && distance < self.max_range
    }
}

impl Policy for NearestThreat {
    fn name(&self) -> &str {
        "nearest-threat"
    }

    /// Returns an empty action for a malformed observation, which the
    /// engine rejects.
    fn decide(&mut self, observation: &[f64]) -> Vec<f64> {
        let Some(view) = ObservationView::parse(observation) else {
            return Vec::new();
        };
        let mut action = vec![0.0; action_len(view.missile_count())];

        let ready = view.ammo() > 0.0 && view.cooldown() == 0.0;
        if !ready {
            return action;
        }

        let target = view
            .alive_missiles()
            .map(|(index, distance)| (index, self.predicted(distance)))
            .filter(|&(_, predicted)| self.in_window(predicted))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((index, _)) = target {
            action[0] = 1.0;
            action[index + 1] = 1.0;
        }
        action
    }
}
