//! Fixture command implementation
//!
//! Replays one worker's stream and prints its leading draws with their bit
//! patterns, suitable for pinning as regression fixtures.

use photon_rng::guard::device;
use photon_rng::launch::Launch;
use photon_rng::{Seed, WorkerIndex};
use tracing::info;

use crate::{CliError, Result};

/// Run the fixture command
pub fn run(seed: Seed, worker: u32, count: usize) -> Result<()> {
    let values = leading_draws(seed, worker, count)?;

    println!("init(seed={}, worker_index={})", seed, worker);
    for (i, value) in values.iter().enumerate() {
        println!("  next #{:<3} {:<22} 0x{:016x}", i + 1, value, value.to_bits());
    }
    Ok(())
}

/// First `count` draws of `worker` under `seed`. Any `u32` index may be
/// replayed; no grid is built.
fn leading_draws(seed: Seed, worker: u32, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    info!("Replaying worker {} under seed {}", worker, seed);

    let values = Launch::replay(seed, WorkerIndex::new(worker), |seed, worker| {
        let mut stream = device::init(seed, worker);
        (0..count)
            .map(|_| device::next(&mut stream))
            .collect::<Vec<f64>>()
    });
    Ok(values)
}
