//! A controller that never fires.

use salvo_core::policy::{action_len, ObservationView, Policy};

/// Never requests a launch. Baseline for scoring comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldFire;

impl Policy for HoldFire {
    fn name(&self) -> &str {
        "hold-fire"
    }

    fn decide(&mut self, observation: &[f64]) -> Vec<f64> {
        match ObservationView::parse(observation) {
            Some(view) => vec![0.0; action_len(view.missile_count())],
            None => Vec::new(),
        }
    }
}
