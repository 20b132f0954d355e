//! Per-tick systems that operate on the episode state.
//!
//! Systems are free functions over borrowed state. They do not own
//! anything; the `Episode` holds all state and calls them in order.

pub mod bookkeeping;
pub mod fire_control;
pub mod movement;
pub mod observation;
pub mod scoring;
