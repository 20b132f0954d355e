//! Error types for episode setup and evaluation.

use thiserror::Error;

/// Result type alias using [`SalvoError`].
pub type Result<T> = std::result::Result<T, SalvoError>;

/// Fatal errors. Scored outcomes such as invalid launches are not errors.
#[derive(Debug, Error)]
pub enum SalvoError {
    /// The episode configuration cannot be simulated.
    #[error("Invalid episode config: {0}")]
    InvalidConfig(String),

    /// The controller returned an action vector of the wrong length.
    #[error("Action at tick {tick} has {actual} entries, expected {expected}")]
    ActionLength {
        /// Tick at which the action was requested.
        tick: u64,
        /// Required length (`missile_count + 1`).
        expected: usize,
        /// Length actually returned.
        actual: usize,
    },

    /// The controller returned NaN or an infinite score.
    #[error("Action at tick {tick} has non-finite entry {index}: {value}")]
    NonFiniteAction {
        /// Tick at which the action was requested.
        tick: u64,
        /// Offending entry.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// A controller definition is malformed.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Failed to read a config or policy file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a config or policy file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
