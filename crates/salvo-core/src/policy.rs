//! Controller interface and the observation/action vector layouts.
//!
//! Observation (length `2 * missile_count + 2`):
//! `[d_0, alive_0, d_1, alive_1, ..., ammo, cooldown]`, where `d_i` is the
//! distance to the ship for an alive missile and `0.0` otherwise.
//!
//! Action (length `missile_count + 1`):
//! `[fire_intent, preference_0, ..., preference_{n-1}]`.

use crate::error::{Result, SalvoError};

/// A decision policy mapping an observation to an action vector.
///
/// The engine calls [`Policy::decide`] exactly once per tick and never
/// inspects the controller otherwise. Controllers are expected to behave as
/// pure functions of their parameters and the observation.
pub trait Policy {
    /// Short label for logs and reports.
    fn name(&self) -> &str {
        "anonymous"
    }

    /// Produce the action vector for this observation.
    fn decide(&mut self, observation: &[f64]) -> Vec<f64>;
}

impl<F> Policy for F
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    fn decide(&mut self, observation: &[f64]) -> Vec<f64> {
        self(observation)
    }
}

/// Observation length for a raid of `missile_count` missiles.
pub fn observation_len(missile_count: usize) -> usize {
    2 * missile_count + 2
}

/// Action length for a raid of `missile_count` missiles.
pub fn action_len(missile_count: usize) -> usize {
    missile_count + 1
}

/// Borrowed, structured view over an observation vector.
#[derive(Debug, Clone, Copy)]
pub struct ObservationView<'a> {
    raw: &'a [f64],
}

impl<'a> ObservationView<'a> {
    /// Returns `None` unless the length is `2n + 2` for some `n >= 1`.
    pub fn parse(raw: &'a [f64]) -> Option<Self> {
        if raw.len() < 4 || raw.len() % 2 != 0 {
            return None;
        }
        Some(Self { raw })
    }

    pub fn missile_count(&self) -> usize {
        (self.raw.len() - 2) / 2
    }

    /// Distance to the ship for missile `index` (`0.0` when dead).
    pub fn distance(&self, index: usize) -> f64 {
        self.raw[2 * index]
    }

    pub fn is_alive(&self, index: usize) -> bool {
        self.raw[2 * index + 1] > 0.5
    }

    pub fn ammo(&self) -> f64 {
        self.raw[self.raw.len() - 2]
    }

    pub fn cooldown(&self) -> f64 {
        self.raw[self.raw.len() - 1]
    }

    /// `(index, distance)` for every alive missile, in index order.
    pub fn alive_missiles(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.missile_count())
            .filter(|&i| self.is_alive(i))
            .map(|i| (i, self.distance(i)))
    }
}

/// A checked action vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Compared against the fire threshold.
    pub fire_intent: f64,
    /// One target-preference score per missile, in index order.
    pub preferences: Vec<f64>,
}

impl Action {
    /// Validate a raw controller output. Wrong lengths and non-finite
    /// scores are rejected rather than truncated or padded.
    pub fn from_raw(raw: Vec<f64>, missile_count: usize, tick: u64) -> Result<Self> {
        let expected = action_len(missile_count);
        if raw.len() != expected {
            return Err(SalvoError::ActionLength {
                tick,
                expected,
                actual: raw.len(),
            });
        }
        if let Some((index, &value)) = raw.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SalvoError::NonFiniteAction { tick, index, value });
        }
        let mut raw = raw;
        let preferences = raw.split_off(1);
        Ok(Self {
            fire_intent: raw[0],
            preferences,
        })
    }
}
