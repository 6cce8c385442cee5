//! Parallel-context surface: the real initialiser and sampler.
//!
//! These functions can only be reached from inside a launch kernel, since
//! they need a [`Worker`] token or a [`Stream`] and both are created by the
//! launch for the worker that owns them. None of them can fail.
//!
//! # Examples
//!
//! ```rust
//! use photon_rng::guard::device;
//! use photon_rng::launch::{Launch, LaunchConfig};
//!
//! let launch = Launch::new(LaunchConfig::builder().seed(7).workers(8).build().unwrap()).unwrap();
//!
//! let draws = launch.run(|seed, worker| {
//!     let mut stream = device::init(seed, worker);
//!     let mut buffer = [0.0; 16];
//!     device::fill_uniform(&mut stream, &mut buffer);
//!     buffer
//! });
//!
//! for buffer in &draws {
//!     assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
//! }
//! ```

use rand::Rng;
use tracing::trace;

use super::{Worker, DIAGNOSTIC_TARGET};
use crate::rng::{Seed, Stream};

/// Seeds the stream of `worker`.
///
/// The stream state is a deterministic function of `seed`, the worker's
/// index and a zero sequence offset. The token is consumed, so each worker
/// seeds exactly one stream.
#[inline]
pub fn init<'w>(seed: Seed, worker: Worker<'w>) -> Stream<'w> {
    let worker_index = worker.index();
    trace!(target: DIAGNOSTIC_TARGET, %seed, %worker_index, "stream seeded");
    Stream::seeded(seed, worker_index)
}

/// Draws the next uniform value in `[0, 1)` and advances the stream.
///
/// The value carries 53 random bits, the full precision of an `f64`
/// mantissa.
#[inline]
pub fn next(stream: &mut Stream<'_>) -> f64 {
    stream.gen::<f64>()
}

/// Draws the next uniform value in the open interval `(0, 1)`.
///
/// A draw of exactly zero is discarded and redrawn, so the result is safe to
/// pass to `ln` when sampling exponential step lengths.
#[inline]
pub fn next_nonzero(stream: &mut Stream<'_>) -> f64 {
    loop {
        let u = next(stream);
        if u > 0.0 {
            return u;
        }
    }
}

/// Fills `buffer` with consecutive [`next`] draws.
///
/// Zero allocation; an empty buffer leaves the stream untouched.
#[inline]
pub fn fill_uniform(stream: &mut Stream<'_>, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = next(stream);
    }
}
