//! Scripted controller: replays a fixed sequence of actions.

use serde::{Deserialize, Serialize};

use salvo_core::policy::{action_len, ObservationView, Policy};

/// Plays back `actions` one per tick, then holds fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scripted {
    pub actions: Vec<Vec<f64>>,
    #[serde(skip)]
    cursor: usize,
}

impl Scripted {
    pub fn new(actions: Vec<Vec<f64>>) -> Self {
        Self { actions, cursor: 0 }
    }

    /// Rewind to the first action.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of actions already played.
    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl Policy for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn decide(&mut self, observation: &[f64]) -> Vec<f64> {
        if let Some(action) = self.actions.get(self.cursor) {
            self.cursor += 1;
            return action.clone();
        }
        match ObservationView::parse(observation) {
            Some(view) => vec![0.0; action_len(view.missile_count())],
            None => Vec::new(),
        }
    }
}
