//! Observation builder: encodes the pre-motion state for the controller.
//!
//! This system is read-only.

use salvo_core::components::{Battery, Missile, Ship};
use salvo_core::policy::observation_len;
use salvo_core::types::range;

/// Build the observation vector: `(distance, alive)` per missile in index
/// order, then `(ammo, cooldown)`. Dead missiles report `(0.0, 0.0)`.
pub fn build(missiles: &[Missile], ship: &Ship, battery: &Battery) -> Vec<f64> {
    let mut observation = Vec::with_capacity(observation_len(missiles.len()));
    for missile in missiles {
        if missile.alive {
            observation.push(range(missile.position, ship.position));
            observation.push(1.0);
        } else {
            observation.push(0.0);
            observation.push(0.0);
        }
    }
    observation.push(battery.ammo as f64);
    observation.push(battery.cooldown as f64);
    observation
}
