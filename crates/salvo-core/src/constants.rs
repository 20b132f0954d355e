//! Simulation constants and tuning parameters.
//!
//! The defaults describe the reference engagement: three inbound missiles
//! against a ship sitting at (100, 60) with a seven-round battery.

// --- Reference geometry ---

/// Starting positions of the reference raid, in index order.
pub const REFERENCE_MISSILES: [[f64; 2]; 3] = [[0.0, 0.0], [-40.0, 30.0], [20.0, -50.0]];

/// Ship position in the reference engagement.
pub const REFERENCE_SHIP_POSITION: [f64; 2] = [100.0, 60.0];

/// Distance at or below which a missile destroys the ship.
pub const SHIP_HIT_RADIUS: f64 = 5.0;

/// Distance a missile closes per tick.
pub const MISSILE_SPEED: f64 = 5.0;

// --- Interceptor battery ---

/// Lower (exclusive) bound of the intercept window.
pub const MIN_INTERCEPT_DIST: f64 = 10.0;

/// Upper (exclusive) bound of the intercept window.
pub const MAX_INTERCEPT_DIST: f64 = 60.0;

/// Rounds loaded at episode start.
pub const INITIAL_AMMO: u32 = 7;

/// Probability that a valid launch destroys its target.
pub const SAM_HIT_PROBABILITY: f64 = 0.60;

/// Ticks the battery is blocked after a launch.
pub const LAUNCH_COOLDOWN_TICKS: u32 = 1;

// --- Scoring ---

/// Fire-intent score above which the controller is considered to be firing.
pub const FIRE_THRESHOLD: f64 = 0.5;

/// Fitness added for every completed tick.
pub const SURVIVAL_REWARD: f64 = 1.0;

/// Fitness added when an interceptor destroys its target.
pub const INTERCEPT_HIT_REWARD: f64 = 100.0;

/// Fitness added when a valid launch misses.
pub const INTERCEPT_MISS_REWARD: f64 = 10.0;

/// Fitness added (negative) for a launch request that fails the launch checks.
pub const INVALID_LAUNCH_PENALTY: f64 = -20.0;

/// Fitness added (negative) when the episode ends with the ship destroyed.
pub const SHIP_DESTROYED_PENALTY: f64 = -300.0;

/// Fitness added when every missile has been intercepted.
pub const CLEAN_SWEEP_BONUS: f64 = 100.0;

// --- Episode limits ---

/// Hard cap on episode length.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Default RNG seed. Same seed = same episode.
pub const DEFAULT_SEED: u64 = 42;
