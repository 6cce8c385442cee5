//! Parallel launch grid.
//!
//! A [`Launch`] owns a rayon thread pool and runs a kernel once per worker.
//! Each kernel call receives the run [`Seed`] by value and a fresh
//! [`Worker`] token; the token is the only way to seed a stream, so the
//! parallel context begins and ends inside the kernel call.
//!
//! # Memory Contention Avoidance
//!
//! Streams live on the worker's own stack for the duration of its kernel
//! call. Nothing is shared between workers and nothing is locked, so the
//! cost of random-number generation does not grow with the worker count.
//!
//! # Example
//!
//! ```rust
//! use photon_rng::guard::device;
//! use photon_rng::launch::{Launch, LaunchConfig};
//!
//! let config = LaunchConfig::builder().seed(2024).workers(256).threads(4).build().unwrap();
//! let launch = Launch::new(config).unwrap();
//!
//! // Each worker reports its first draw
//! let first: Vec<f64> = launch.run(|seed, worker| {
//!     let mut stream = device::init(seed, worker);
//!     device::next(&mut stream)
//! });
//! assert_eq!(first.len(), 256);
//! ```

mod config;
mod error;

pub use config::{
    LaunchConfig, LaunchConfigBuilder, DEFAULT_WORKERS, ENV_SEED, ENV_THREADS, ENV_WORKERS,
    MAX_THREADS, MAX_WORKERS,
};
pub use error::{ConfigError, LaunchError};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::guard::Worker;
use crate::rng::{Seed, WorkerIndex};

/// A configured parallel grid with its own worker thread pool.
pub struct Launch {
    config: LaunchConfig,
    pool: ThreadPool,
}

impl Launch {
    /// Validates `config` and builds the worker thread pool.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Config`] for an invalid configuration and
    /// [`LaunchError::ThreadPool`] if rayon cannot spawn the pool.
    pub fn new(config: LaunchConfig) -> Result<Self, LaunchError> {
        config.validate()?;

        let mut builder =
            ThreadPoolBuilder::new().thread_name(|i| format!("photon-worker-{}", i));
        if config.threads() > 0 {
            builder = builder.num_threads(config.threads());
        }
        let pool = builder.build()?;

        info!(
            seed = %config.seed(),
            workers = config.workers(),
            threads = pool.current_num_threads(),
            "launch grid ready"
        );

        Ok(Self { config, pool })
    }

    /// Returns the launch configuration.
    #[inline]
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Returns the number of threads in the worker pool.
    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `kernel` once for every worker in the grid.
    ///
    /// Workers execute concurrently with no ordering between them; results
    /// are returned in worker-index order. The lifetime brand on the
    /// [`Worker`] token prevents a kernel from returning or smuggling out
    /// its stream.
    pub fn run<K, R>(&self, kernel: K) -> Vec<R>
    where
        K: for<'w> Fn(Seed, Worker<'w>) -> R + Sync,
        R: Send,
    {
        let seed = self.config.seed();
        let workers = self.config.workers();
        debug!(%seed, workers, "launch started");

        let results: Vec<R> = self.pool.install(|| {
            (0..workers)
                .into_par_iter()
                .map(|index| kernel(seed, Worker::new(WorkerIndex::new(index))))
                .collect()
        });

        debug!(%seed, workers, "launch complete");
        results
    }

    /// Runs `kernel` once for every worker and folds the results with `op`.
    ///
    /// Results are combined inside the pool as workers finish, so memory
    /// stays proportional to the thread count rather than the grid size.
    /// `identity` must be a neutral element of `op`, and `op` should be
    /// associative: the grouping of the combination is unspecified, so a
    /// floating-point `op` may differ in its last bits between runs.
    pub fn run_reduce<K, R, ID, OP>(&self, kernel: K, identity: ID, op: OP) -> R
    where
        K: for<'w> Fn(Seed, Worker<'w>) -> R + Sync,
        ID: Fn() -> R + Sync + Send,
        OP: Fn(R, R) -> R + Sync + Send,
        R: Send,
    {
        let seed = self.config.seed();
        let workers = self.config.workers();
        debug!(%seed, workers, "reducing launch started");

        let result = self.pool.install(|| {
            (0..workers)
                .into_par_iter()
                .map(|index| kernel(seed, Worker::new(WorkerIndex::new(index))))
                .reduce(identity, op)
        });

        debug!(%seed, workers, "reducing launch complete");
        result
    }

    /// Replays a single worker of the grid on its own.
    ///
    /// The worker sees exactly the seed and index it would see inside
    /// [`run`](Self::run), so its stream, and therefore its result, is the
    /// same. Useful for reproducing one lane of a large launch.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::WorkerOutOfRange`] if `index` is not in the grid.
    pub fn run_worker<K, R>(&self, index: WorkerIndex, kernel: K) -> Result<R, LaunchError>
    where
        K: for<'w> FnOnce(Seed, Worker<'w>) -> R + Send,
        R: Send,
    {
        let workers = self.config.workers();
        if index.value() >= workers {
            return Err(LaunchError::WorkerOutOfRange { index, workers });
        }

        let seed = self.config.seed();
        debug!(%seed, worker_index = %index, "replaying single worker");
        Ok(self.pool.install(|| kernel(seed, Worker::new(index))))
    }

    /// Replays worker `index` of any grid run under `seed`, on the calling
    /// thread.
    ///
    /// A stream depends only on the seed and the worker index, so no grid
    /// or thread pool is needed, and every `u32` index can be replayed,
    /// including those beyond [`MAX_WORKERS`].
    pub fn replay<K, R>(seed: Seed, index: WorkerIndex, kernel: K) -> R
    where
        K: for<'w> FnOnce(Seed, Worker<'w>) -> R,
    {
        debug!(%seed, worker_index = %index, "replaying worker outside a grid");
        kernel(seed, Worker::new(index))
    }
}
