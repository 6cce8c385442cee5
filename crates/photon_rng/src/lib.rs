//! # Photon RNG (Per-Worker Random Streams)
//!
//! Reproducible, independent random-number streams for massively parallel
//! photon-transport Monte Carlo.
//!
//! This crate provides:
//! - [`rng`]: the opaque per-worker [`Stream`](rng::Stream) and its
//!   ChaCha8 backing generator
//! - [`guard`]: the two call surfaces. [`guard::device`] is the real
//!   parallel-context implementation; [`guard::host`] is the
//!   sequential-context stub that only reports misuse
//! - [`launch`]: the parallel grid that hands each worker its seed and
//!   parallel-context token
//!
//! ## Context Guard
//!
//! A [`Stream`](rng::Stream) can only be created from a
//! [`Worker`](guard::Worker) token, and tokens only exist inside a running
//! [`Launch`](launch::Launch). Calling the real initialiser or sampler from
//! the orchestrating context is therefore a compile error rather than a
//! silent wrong answer.
//!
//! ```rust
//! use photon_rng::guard::device;
//! use photon_rng::launch::{Launch, LaunchConfig};
//!
//! let config = LaunchConfig::builder().seed(42).workers(64).build().unwrap();
//! let launch = Launch::new(config).unwrap();
//!
//! let means: Vec<f64> = launch.run(|seed, worker| {
//!     let mut stream = device::init(seed, worker);
//!     let sum: f64 = (0..100).map(|_| device::next(&mut stream)).sum();
//!     sum / 100.0
//! });
//!
//! assert_eq!(means.len(), 64);
//! ```

#![warn(missing_docs)]

pub mod guard;
pub mod launch;
pub mod rng;

pub use guard::{device, host, ContextMisuseError, Worker};
pub use launch::{Launch, LaunchConfig, LaunchError};
pub use rng::{ParseSeedError, Seed, Stream, WorkerIndex};
