//! Error types for drishti-mcl.

use thiserror::Error;

/// Errors raised by sensor model construction and scoring rounds.
#[derive(Error, Debug)]
pub enum DrishtiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Measurement dimension mismatch: expected {expected} rays, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, DrishtiError>;
