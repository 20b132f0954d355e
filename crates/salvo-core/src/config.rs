//! Episode configuration: the explicit initial conditions for one evaluation.
//!
//! Every field has a default taken from [`crate::constants`], so a JSON file
//! only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, SalvoError};
use crate::types::Position;

/// Fitness weights and the fire-intent threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub fire_threshold: f64,
    pub survival_reward: f64,
    pub intercept_hit_reward: f64,
    pub intercept_miss_reward: f64,
    pub invalid_launch_penalty: f64,
    pub ship_destroyed_penalty: f64,
    pub clean_sweep_bonus: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            fire_threshold: FIRE_THRESHOLD,
            survival_reward: SURVIVAL_REWARD,
            intercept_hit_reward: INTERCEPT_HIT_REWARD,
            intercept_miss_reward: INTERCEPT_MISS_REWARD,
            invalid_launch_penalty: INVALID_LAUNCH_PENALTY,
            ship_destroyed_penalty: SHIP_DESTROYED_PENALTY,
            clean_sweep_bonus: CLEAN_SWEEP_BONUS,
        }
    }
}

impl Scoring {
    fn values(&self) -> [(&'static str, f64); 7] {
        [
            ("fire_threshold", self.fire_threshold),
            ("survival_reward", self.survival_reward),
            ("intercept_hit_reward", self.intercept_hit_reward),
            ("intercept_miss_reward", self.intercept_miss_reward),
            ("invalid_launch_penalty", self.invalid_launch_penalty),
            ("ship_destroyed_penalty", self.ship_destroyed_penalty),
            ("clean_sweep_bonus", self.clean_sweep_bonus),
        ]
    }
}

/// Initial conditions and rules for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    /// Missile starting positions. Index order is the stable missile order
    /// used for observations, motion, and targeting.
    pub missiles: Vec<Position>,
    pub ship_position: Position,
    pub ship_hit_radius: f64,
    /// Distance each missile closes per tick.
    pub missile_speed: f64,
    /// Exclusive lower bound of the intercept window.
    pub min_intercept_dist: f64,
    /// Exclusive upper bound of the intercept window.
    pub max_intercept_dist: f64,
    pub initial_ammo: u32,
    /// Probability that a valid launch kills its target.
    pub hit_probability: f64,
    /// Ticks the battery is blocked after each launch.
    pub cooldown_ticks: u32,
    /// Episode is cut off after this many ticks.
    pub max_ticks: u64,
    /// RNG seed used by the seeded evaluation entry points.
    pub seed: u64,
    /// Record human-readable trace events. Never affects scoring.
    pub trace: bool,
    pub scoring: Scoring,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            missiles: REFERENCE_MISSILES
                .iter()
                .map(|&p| Position::from_array(p))
                .collect(),
            ship_position: Position::from_array(REFERENCE_SHIP_POSITION),
            ship_hit_radius: SHIP_HIT_RADIUS,
            missile_speed: MISSILE_SPEED,
            min_intercept_dist: MIN_INTERCEPT_DIST,
            max_intercept_dist: MAX_INTERCEPT_DIST,
            initial_ammo: INITIAL_AMMO,
            hit_probability: SAM_HIT_PROBABILITY,
            cooldown_ticks: LAUNCH_COOLDOWN_TICKS,
            max_ticks: DEFAULT_MAX_TICKS,
            seed: DEFAULT_SEED,
            trace: false,
            scoring: Scoring::default(),
        }
    }
}

impl EpisodeConfig {
    /// Number of missiles in the raid.
    pub fn missile_count(&self) -> usize {
        self.missiles.len()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Whether a missile can step clean over the hit circle and oscillate
    /// around the ship without ever registering a hit.
    pub fn allows_overshoot(&self) -> bool {
        self.missile_speed > 2.0 * self.ship_hit_radius
    }

    /// Reject configurations the engine cannot score meaningfully.
    ///
    /// An empty raid is valid: it ends before the first tick as a clean sweep.
    pub fn validate(&self) -> Result<()> {
        for (index, missile) in self.missiles.iter().enumerate() {
            if !missile.is_finite() {
                return Err(invalid(format!(
                    "missile {index} has a non-finite position"
                )));
            }
        }
        if !self.ship_position.is_finite() {
            return Err(invalid("ship position is not finite"));
        }
        if !self.ship_hit_radius.is_finite() || self.ship_hit_radius < 0.0 {
            return Err(invalid(format!(
                "ship_hit_radius must be finite and >= 0, got {}",
                self.ship_hit_radius
            )));
        }
        if !self.missile_speed.is_finite() || self.missile_speed <= 0.0 {
            return Err(invalid(format!(
                "missile_speed must be finite and > 0, got {}",
                self.missile_speed
            )));
        }
        if !self.min_intercept_dist.is_finite() || !self.max_intercept_dist.is_finite() {
            return Err(invalid("intercept window bounds must be finite"));
        }
        if self.min_intercept_dist >= self.max_intercept_dist {
            return Err(invalid(format!(
                "intercept window ({}, {}) is empty",
                self.min_intercept_dist, self.max_intercept_dist
            )));
        }
        if !(0.0..=1.0).contains(&self.hit_probability) {
            return Err(invalid(format!(
                "hit_probability must be within [0, 1], got {}",
                self.hit_probability
            )));
        }
        if self.max_ticks == 0 {
            return Err(invalid("max_ticks must be > 0"));
        }
        for (name, value) in self.scoring.values() {
            if !value.is_finite() {
                return Err(invalid(format!("scoring.{name} is not finite")));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> SalvoError {
    SalvoError::InvalidConfig(message.into())
}
