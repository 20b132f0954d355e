//! State model for one engagement.
//!
//! Components are plain data structs. Episode logic lives in the
//! simulation systems, not here.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// An inbound threat. Its position only changes while it is alive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub position: Position,
    pub alive: bool,
}

impl Missile {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            alive: true,
        }
    }
}

/// The defended asset. Never moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub position: Position,
    pub alive: bool,
    /// Missiles at or inside this distance destroy the ship.
    pub hit_radius: f64,
}

impl Ship {
    pub fn new(position: Position, hit_radius: f64) -> Self {
        Self {
            position,
            alive: true,
            hit_radius,
        }
    }
}

/// Ship-side interceptor battery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    /// Rounds remaining.
    pub ammo: u32,
    /// Ticks remaining before another launch is allowed.
    pub cooldown: u32,
}

impl Battery {
    pub fn new(ammo: u32) -> Self {
        Self { ammo, cooldown: 0 }
    }

    /// A launch needs a round and an idle launcher.
    pub fn is_ready(&self) -> bool {
        self.ammo > 0 && self.cooldown == 0
    }
}
