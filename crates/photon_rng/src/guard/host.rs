//! Sequential-context surface: diagnostic stubs.
//!
//! The orchestrating context has no business seeding or sampling streams.
//! These stubs share the device operation names so a misrouted call still
//! resolves, but they perform no work: each call logs one
//! [`ContextMisuseError`] at `error` level on
//! [`DIAGNOSTIC_TARGET`](super::DIAGNOSTIC_TARGET) and returns a sentinel.
//! They never panic and never report failure to the caller, so a misuse is
//! only visible in the logs.

use tracing::error;

use super::{ContextMisuseError, DIAGNOSTIC_TARGET};
use crate::rng::{Seed, Stream, WorkerIndex};

/// Value returned by [`next`] in place of a real draw.
pub const NEXT_SENTINEL: f64 = 0.0;

/// Stub initialiser. Logs the misuse and does nothing else.
pub fn init(seed: Seed, worker_index: WorkerIndex) {
    report(ContextMisuseError::Init { seed, worker_index });
}

/// Stub sampler. Logs the misuse and returns [`NEXT_SENTINEL`].
///
/// The stream is not read or advanced.
pub fn next(_stream: &mut Stream<'_>) -> f64 {
    report(ContextMisuseError::Next);
    NEXT_SENTINEL
}

fn report(misuse: ContextMisuseError) {
    error!(
        target: DIAGNOSTIC_TARGET,
        operation = misuse.operation(),
        "{}",
        misuse
    );
}
