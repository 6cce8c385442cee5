//! Sample command implementation
//!
//! Launches a grid in which every worker draws from its own stream, then
//! merges per-worker summaries into one report inside the worker pool.

use photon_rng::guard::device;
use photon_rng::launch::{Launch, LaunchConfig};
use tracing::info;

use crate::{CliError, Result};

/// Histogram bins used for the chi-square statistic.
const BINS: usize = 100;

/// Per-worker summary of its draws.
#[derive(Clone, Debug)]
struct Summary {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
    bins: [u64; BINS],
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            bins: [0; BINS],
        }
    }
}

impl Summary {
    fn observe(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.bins[(value * BINS as f64) as usize] += 1;
    }

    fn merge(mut self, other: Summary) -> Summary {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        for (bin, extra) in self.bins.iter_mut().zip(other.bins) {
            *bin += extra;
        }
        self
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    fn chi_square(&self) -> f64 {
        let expected = self.count as f64 / BINS as f64;
        self.bins
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}

/// Run the sample command
pub fn run(launch_config: LaunchConfig, draws: usize) -> Result<()> {
    if draws == 0 {
        return Err(CliError::InvalidArgument(
            "draws must be at least 1".to_string(),
        ));
    }

    info!("Starting sampling launch...");
    info!("  Seed: {}", launch_config.seed());
    info!("  Workers: {}", launch_config.workers());
    info!("  Draws per worker: {}", draws);

    let launch = Launch::new(launch_config)?;
    let total = launch.run_reduce(
        |seed, worker| {
            let mut stream = device::init(seed, worker);
            let mut summary = Summary::default();
            for _ in 0..draws {
                summary.observe(device::next(&mut stream));
            }
            summary
        },
        Summary::default,
        Summary::merge,
    );

    println!("\n┌──────────────┬──────────────────────┐");
    println!("│ Draws        │ {:>20} │", total.count);
    println!("│ Mean         │ {:>20.6} │", total.mean());
    println!("│ Min          │ {:>20.6e} │", total.min);
    println!("│ Max          │ {:>20.6} │", total.max);
    println!("│ Chi² (99 df) │ {:>20.2} │", total.chi_square());
    println!("└──────────────┴──────────────────────┘");

    info!("Sampling complete on {} threads", launch.threads());
    Ok(())
}
