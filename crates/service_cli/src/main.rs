//! Photon RNG CLI - Worker Stream Diagnostics
//!
//! Operational entry point for inspecting the per-worker random streams used
//! by photon-transport kernels.
//!
//! # Commands
//!
//! - `photon-rng sample --draws <n>` - Launch a grid and summarise every draw
//! - `photon-rng fixture` - Print the leading draws of one worker's stream
//! - `photon-rng check` - Load and validate the launch configuration

use clap::{Parser, Subcommand};
use photon_rng::Seed;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Photon RNG worker stream diagnostics
#[derive(Parser, Debug)]
#[command(name = "photon-rng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Launch configuration file (TOML); PHOTON_RNG_* variables are used when absent
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch a grid where every worker draws from its stream
    Sample {
        /// Draws per worker
        #[arg(short, long, default_value = "1000")]
        draws: usize,

        /// Run seed (overrides configuration); negative values are sign-extended
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<Seed>,

        /// Number of workers (overrides configuration)
        #[arg(short, long)]
        workers: Option<u32>,

        /// Thread pool size, 0 for one per CPU (overrides configuration)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Print the leading draws of one worker's stream
    Fixture {
        /// Run seed; negative values are sign-extended
        #[arg(short, long, default_value = "42", allow_negative_numbers = true)]
        seed: Seed,

        /// Worker index (any u32; no grid is built)
        #[arg(short, long, default_value = "7")]
        worker: u32,

        /// Number of draws to print
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,
    },

    /// Load, validate and print the launch configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sample {
            draws,
            seed,
            workers,
            threads,
        } => {
            let overrides = config::Overrides {
                seed,
                workers,
                threads,
            };
            let launch_config = config::resolve(cli.config.as_deref(), &overrides)?;
            commands::sample::run(launch_config, draws)
        }
        Commands::Fixture {
            seed,
            worker,
            count,
        } => commands::fixture::run(seed, worker, count),
        Commands::Check => commands::check::run(cli.config.as_deref()),
    }
}
