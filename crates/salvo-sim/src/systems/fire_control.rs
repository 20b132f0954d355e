//! Fire control system: turns the controller's action into a launch.
//!
//! Runs after motion, so the controller has decided on distances that are
//! one step stale. The launch checks use the current distance.

use rand::Rng;

use salvo_core::components::{Battery, Missile, Ship};
use salvo_core::config::EpisodeConfig;
use salvo_core::enums::{InterceptResult, LaunchOutcome};
use salvo_core::policy::Action;
use salvo_core::types::range;

/// Run the fire decision for one tick.
///
/// Draws from `rng` exactly once per valid launch and never otherwise.
pub fn run<R: Rng>(
    action: &Action,
    missiles: &mut [Missile],
    ship: &Ship,
    battery: &mut Battery,
    config: &EpisodeConfig,
    rng: &mut R,
) -> LaunchOutcome {
    if action.fire_intent <= config.scoring.fire_threshold {
        return LaunchOutcome::Held;
    }

    // An empty raid has nothing to aim at. The engine never gets here with
    // one, since it terminates before the first tick.
    let Some(target) = select_target(missiles, &action.preferences) else {
        return LaunchOutcome::Held;
    };

    // The target may be a wreck if nothing is alive after motion. It keeps
    // its frozen position and goes through the same checks.
    let distance = range(ship.position, missiles[target].position);
    if !battery.is_ready() || !in_window(distance, config) {
        return LaunchOutcome::Invalid { target };
    }

    battery.ammo -= 1;
    battery.cooldown = config.cooldown_ticks;

    let roll: f64 = rng.gen();
    let result = if roll < config.hit_probability {
        missiles[target].alive = false;
        InterceptResult::Hit
    } else {
        InterceptResult::Miss
    };

    LaunchOutcome::Fired {
        target,
        distance,
        result,
    }
}

/// Pick the missile with the highest preference score.
///
/// Dead missiles are masked with negative infinity, so any alive missile
/// beats them. Ties go to the lowest index, which means index 0 when every
/// missile is dead. Returns `None` only for an empty raid.
pub fn select_target(missiles: &[Missile], preferences: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, (missile, &preference)) in missiles.iter().zip(preferences).enumerate() {
        let score = if missile.alive {
            preference
        } else {
            f64::NEG_INFINITY
        };
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Whether `distance` lies strictly inside the intercept window.
pub fn in_window(distance: f64, config: &EpisodeConfig) -> bool {
    config.min_intercept_dist < distance && distance < config.max_intercept_dist
}
