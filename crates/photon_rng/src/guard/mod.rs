//! Context guard: the parallel and sequential call surfaces.
//!
//! Every stream operation exists twice:
//!
//! - [`device`]: the real initialiser and sampler, usable only by code
//!   running as a launch worker. They require a [`Worker`] token or a
//!   [`Stream`](crate::rng::Stream), neither of which can be obtained
//!   outside a [`Launch`](crate::launch::Launch).
//! - [`host`]: stubs with the same operation names for the orchestrating
//!   context. They never touch stream state; each call emits one
//!   `error`-level diagnostic on [`DIAGNOSTIC_TARGET`] and returns a
//!   sentinel.
//!
//! # Compile-time guarantees
//!
//! A worker token cannot be forged:
//!
//! ```compile_fail
//! use photon_rng::{Worker, WorkerIndex};
//!
//! let worker = Worker::new(WorkerIndex::new(0));
//! ```
//!
//! and a stream cannot leave the worker that seeded it:
//!
//! ```compile_fail
//! use photon_rng::guard::device;
//! use photon_rng::launch::{Launch, LaunchConfig};
//!
//! let launch = Launch::new(LaunchConfig::default()).unwrap();
//! let streams = launch.run(|seed, worker| device::init(seed, worker));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::rng::{Brand, WorkerIndex};

pub mod device;
mod error;
pub mod host;

pub use error::ContextMisuseError;

/// `tracing` target of guard diagnostics.
pub const DIAGNOSTIC_TARGET: &str = "photon_rng::guard";

/// Parallel-context token handed to each worker by a launch.
///
/// The token names the worker's [`WorkerIndex`] and is consumed by
/// [`device::init`], so a worker seeds its stream at most once. Its lifetime
/// brand `'w` is fresh for every worker, which keeps the resulting stream
/// confined to that worker's kernel call.
pub struct Worker<'w> {
    index: WorkerIndex,
    _brand: Brand<'w>,
}

impl<'w> Worker<'w> {
    #[inline]
    pub(crate) fn new(index: WorkerIndex) -> Self {
        Self {
            index,
            _brand: PhantomData,
        }
    }

    /// Returns this worker's index within the launch.
    #[inline]
    pub fn index(&self) -> WorkerIndex {
        self.index
    }
}

impl fmt::Debug for Worker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Worker").field("index", &self.index).finish()
    }
}
