//! # Random Number Stream Infrastructure
//!
//! This module provides the per-worker random-number state used by photon
//! transport kernels.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a stream is a pure function of `(seed, worker
//!   index)`; the same pair always yields the same sequence, bit for bit,
//!   whatever the thread count
//! - **Independence**: each worker owns its own ChaCha8 stream under the
//!   run's key, so no two streams ever overlap
//! - **Isolation**: streams are move-only and branded with their worker's
//!   lifetime; nothing is shared and nothing needs a lock
//!
//! ## Module Structure
//!
//! - `stream`: [`Stream`], [`Seed`] and [`WorkerIndex`]
//! - `error`: [`ParseSeedError`]
//!
//! Streams are created and sampled only through
//! [`guard::device`](crate::guard::device).

mod error;
mod stream;

pub use error::ParseSeedError;
pub(crate) use stream::Brand;
pub use stream::{Seed, Stream, WorkerIndex};
