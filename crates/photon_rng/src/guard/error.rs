//! Error type reported by the sequential-context stubs.

use thiserror::Error;

use crate::rng::{Seed, WorkerIndex};

/// A stream operation was invoked through the sequential-context surface.
///
/// This error is never returned to the caller. The [`host`](super::host)
/// stubs log it at `error` level and hand back a sentinel so the run
/// continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextMisuseError {
    /// `init` was called outside a launch worker.
    #[error(
        "init(seed={seed}, worker_index={worker_index}) called from the sequential context; \
         streams can only be seeded by a launch worker"
    )]
    Init {
        /// Seed the caller asked for.
        seed: Seed,
        /// Worker index the caller asked for.
        worker_index: WorkerIndex,
    },

    /// `next` was called through the sequential surface.
    #[error("next() called from the sequential context; returned sentinel 0.0")]
    Next,
}

impl ContextMisuseError {
    /// Name of the misused operation.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Next => "next",
        }
    }
}
