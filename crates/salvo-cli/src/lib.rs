//! Command-line front end for salvo.
//!
//! Wires the simulation and controller crates together: pick a
//! controller, run one traced episode, or score it over many seeds.

pub mod controller;
pub mod trials;

pub use salvo_core as core;
