//! CLI error type.

use photon_rng::launch::{ConfigError, LaunchError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Launch configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The launch grid could not be built or driven.
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    /// A command-line argument was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
