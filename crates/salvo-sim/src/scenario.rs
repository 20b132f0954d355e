//! Scenario definitions: built-in raid geometries.

use std::f64::consts::TAU;

use salvo_core::config::EpisodeConfig;
use salvo_core::types::Position;

/// The reference raid: three missiles against a ship at (100, 60).
pub fn reference() -> EpisodeConfig {
    EpisodeConfig::default()
}

/// One missile due west of a ship at the origin, `distance` away,
/// closing at `speed` per tick. Other parameters keep their defaults.
pub fn single_inbound(distance: f64, speed: f64) -> EpisodeConfig {
    EpisodeConfig {
        missiles: vec![Position::new(-distance, 0.0)],
        ship_position: Position::ZERO,
        missile_speed: speed,
        ..Default::default()
    }
}

/// `count` missiles on a ring of `radius` around a ship at the origin,
/// starting due east and spaced evenly counter-clockwise.
pub fn saturation(count: usize, radius: f64) -> EpisodeConfig {
    let missiles = (0..count)
        .map(|i| {
            let bearing = TAU * i as f64 / count as f64;
            Position::new(radius * bearing.cos(), radius * bearing.sin())
        })
        .collect();

    EpisodeConfig {
        missiles,
        ship_position: Position::ZERO,
        initial_ammo: count as u32 * 2,
        ..Default::default()
    }
}
