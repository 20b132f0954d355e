//! Controllers for salvo.
//!
//! Rule-based, scripted, and fixed-weight network policies implementing
//! [`salvo_core::policy::Policy`]. Pure functions over plain data; no
//! simulation dependency.

pub mod hold;
pub mod nearest;
pub mod network;
pub mod scripted;

pub use hold::HoldFire;
pub use nearest::NearestThreat;
pub use network::{Activation, FeedForward, Layer};
pub use salvo_core as core;
pub use scripted::Scripted;
