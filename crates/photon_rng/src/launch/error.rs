//! Error types for launch configuration and execution.

use thiserror::Error;

use crate::rng::WorkerIndex;

/// Configuration error for a launch grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Worker count outside `[1, MAX_WORKERS]`.
    #[error("Invalid worker count {0}: must be in range [1, {max}]", max = super::config::MAX_WORKERS)]
    InvalidWorkerCount(u32),

    /// Thread count above `MAX_THREADS`.
    #[error("Invalid thread count {0}: must be in range [0, {max}] (0 selects one per CPU)", max = super::config::MAX_THREADS)]
    InvalidThreadCount(usize),

    /// Environment variable present but unparsable.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Variable name.
        name: &'static str,
        /// Raw value found.
        value: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Error raised when building or driving a launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The worker thread pool could not be created.
    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A single-worker replay named an index outside the grid.
    #[error("Worker index {index} out of range for a grid of {workers} workers")]
    WorkerOutOfRange {
        /// Requested worker.
        index: WorkerIndex,
        /// Grid size.
        workers: u32,
    },
}
