//! Launch configuration resolution for the CLI.
//!
//! Precedence, lowest first: built-in defaults, then the TOML file given by
//! `--config` or, when absent, the `PHOTON_RNG_*` environment variables,
//! then command-line overrides.

use photon_rng::launch::LaunchConfig;
use photon_rng::Seed;
use tracing::debug;

use crate::Result;

/// Command-line overrides for individual fields.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub seed: Option<Seed>,
    pub workers: Option<u32>,
    pub threads: Option<usize>,
}

/// Loads the base configuration from a file or the environment.
pub fn load(path: Option<&str>) -> Result<LaunchConfig> {
    let config = match path {
        Some(path) => {
            debug!("Loading launch configuration from {}", path);
            LaunchConfig::from_file(path)?
        }
        None => {
            debug!("Loading launch configuration from environment");
            LaunchConfig::from_env()?
        }
    };
    Ok(config)
}

/// Loads the base configuration and applies `overrides`.
pub fn resolve(path: Option<&str>, overrides: &Overrides) -> Result<LaunchConfig> {
    let base = load(path)?;

    let config = LaunchConfig::builder()
        .seed(overrides.seed.unwrap_or(base.seed()))
        .workers(overrides.workers.unwrap_or(base.workers()))
        .threads(overrides.threads.unwrap_or(base.threads()))
        .build()?;
    Ok(config)
}
