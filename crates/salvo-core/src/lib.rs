//! Core types and definitions for the salvo engagement simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the ship/missile/battery state model, episode configuration,
//! trace events, errors, and the controller interface.
//! It has no randomness and no runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod policy;
pub mod types;

pub use error::{Result, SalvoError};

#[cfg(test)]
mod tests;
