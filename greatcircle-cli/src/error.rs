//! CLI error types.

use thiserror::Error;

use greatcircle::CoordError;

use crate::config::ConfigError;

/// Errors surfaced to the user by the `greatcircle` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A coordinate argument was malformed or out of range.
    #[error(transparent)]
    Coordinate(#[from] CoordError),

    /// The configuration file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A numeric argument was outside its accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output could not be produced.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
