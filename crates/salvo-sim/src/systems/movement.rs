//! Motion system: closes every alive missile on the ship.
//!
//! Missiles are processed in index order and the first one to end its
//! step inside the hit radius destroys the ship. Processing stops there,
//! so later missiles do not move on that tick and at most one hit is
//! registered per tick.

use salvo_core::components::{Missile, Ship};
use salvo_core::types::range;

/// Advance alive missiles by `speed` toward the ship.
///
/// Returns the index of the missile that hit the ship, if any. A missile
/// already sitting on the ship has no direction to travel in and counts
/// as an immediate hit.
pub fn run(missiles: &mut [Missile], ship: &mut Ship, speed: f64) -> Option<usize> {
    for (index, missile) in missiles.iter_mut().enumerate() {
        if !missile.alive {
            continue;
        }

        let offset = ship.position - missile.position;
        let distance = offset.length();
        if distance > 0.0 {
            missile.position += offset / distance * speed;
        }

        if range(missile.position, ship.position) <= ship.hit_radius {
            missile.alive = false;
            ship.alive = false;
            return Some(index);
        }
    }
    None
}
