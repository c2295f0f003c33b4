//! Error types for the TAMAGO core library.
//!
//! Pet operations themselves never fail: a refused action is reported as
//! [`crate::ActionOutcome::Rejected`]. These errors cover the ambient
//! concerns around the model (configuration and I/O).

use thiserror::Error;

/// Top-level error type for all TAMAGO operations.
#[derive(Error, Debug)]
pub enum TamagoError {
    /// Configuration could not be parsed or holds an out-of-range value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A timer period was configured as zero.
    #[error("Invalid timing: {name} must be greater than zero (got {value_ms}ms)")]
    InvalidTiming {
        /// Which timer was misconfigured.
        name: &'static str,
        /// The rejected value in milliseconds.
        value_ms: u64,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, TamagoError>;
