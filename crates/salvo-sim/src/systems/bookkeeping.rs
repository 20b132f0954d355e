//! End-of-tick bookkeeping: launcher cooldown and the survival reward.

use salvo_core::components::Battery;
use salvo_core::config::Scoring;
use salvo_core::types::SimTime;

/// Tick the cooldown down, advance time, and return the survival reward.
pub fn run(battery: &mut Battery, time: &mut SimTime, scoring: &Scoring) -> f64 {
    battery.cooldown = battery.cooldown.saturating_sub(1);
    time.advance();
    scoring.survival_reward
}
