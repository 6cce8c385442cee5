//! Launch grid configuration.
//!
//! This module provides [`LaunchConfig`], the validated description of one
//! simulation run's grid: the seed shared by value with every worker, the
//! number of workers, and the size of the thread pool that executes them.
//! Configurations are built fluently, read from `PHOTON_RNG_*` environment
//! variables, or parsed from TOML.

use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;
use crate::rng::Seed;

/// Maximum number of workers in one launch.
pub const MAX_WORKERS: u32 = 1 << 24;

/// Maximum size of the worker thread pool.
pub const MAX_THREADS: usize = 1024;

/// Default number of workers.
pub const DEFAULT_WORKERS: u32 = 1024;

/// Environment variable holding the run seed.
pub const ENV_SEED: &str = "PHOTON_RNG_SEED";

/// Environment variable holding the worker count.
pub const ENV_WORKERS: &str = "PHOTON_RNG_WORKERS";

/// Environment variable holding the thread pool size.
pub const ENV_THREADS: &str = "PHOTON_RNG_THREADS";

/// Launch grid configuration.
///
/// Use [`LaunchConfig::builder`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use photon_rng::launch::LaunchConfig;
///
/// let config = LaunchConfig::builder()
///     .seed(42)
///     .workers(4096)
///     .threads(8)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed().value(), 42);
/// assert_eq!(config.workers(), 4096);
/// assert_eq!(config.threads(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Run seed, passed by value to every worker.
    seed: Seed,
    /// Number of workers in the grid.
    workers: u32,
    /// Thread pool size; 0 selects one thread per CPU.
    threads: usize,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            seed: Seed::default(),
            workers: DEFAULT_WORKERS,
            threads: 0,
        }
    }
}

impl LaunchConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> LaunchConfigBuilder {
        LaunchConfigBuilder::default()
    }

    /// Returns the run seed.
    #[inline]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Returns the number of workers.
    #[inline]
    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Returns the requested thread pool size (0 means one per CPU).
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `workers` is 0 or greater than [`MAX_WORKERS`]
    /// - `threads` is greater than [`MAX_THREADS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount(self.workers));
        }
        if self.threads > MAX_THREADS {
            return Err(ConfigError::InvalidThreadCount(self.threads));
        }
        Ok(())
    }

    /// Loads configuration from `PHOTON_RNG_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from a TOML file.
    ///
    /// ```toml
    /// seed = 42
    /// workers = 65536
    /// threads = 16
    /// ```
    ///
    /// Seeds follow the same rules as `PHOTON_RNG_SEED`: negative integers
    /// are sign-extended, and seeds above `i64::MAX` may be quoted.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LaunchConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_SEED) {
            config.seed = value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: ENV_SEED,
                value,
            })?;
        }

        if let Some(value) = lookup(ENV_WORKERS) {
            config.workers = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: ENV_WORKERS,
                    value,
                })?;
        }

        if let Some(value) = lookup(ENV_THREADS) {
            config.threads = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: ENV_THREADS,
                    value,
                })?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`LaunchConfig`].
///
/// Unset fields fall back to the [`LaunchConfig::default`] values;
/// validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct LaunchConfigBuilder {
    seed: Option<Seed>,
    workers: Option<u32>,
    threads: Option<usize>,
}

impl LaunchConfigBuilder {
    /// Sets the run seed.
    #[inline]
    pub fn seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Sets the number of workers, in `[1, MAX_WORKERS]`.
    #[inline]
    pub fn workers(mut self, workers: u32) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the thread pool size, in `[0, MAX_THREADS]`.
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builds the configuration, validating all parameters.
    pub fn build(self) -> Result<LaunchConfig, ConfigError> {
        let defaults = LaunchConfig::default();
        let config = LaunchConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            workers: self.workers.unwrap_or(defaults.workers),
            threads: self.threads.unwrap_or(defaults.threads),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LaunchConfig::default();
        assert_eq!(config.seed(), Seed::new(0));
        assert_eq!(config.workers(), DEFAULT_WORKERS);
        assert_eq!(config.threads(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LaunchConfig::builder()
            .seed(-3i32)
            .workers(10)
            .build()
            .unwrap();
        assert_eq!(config.seed().value(), (-3i64) as u64);
        assert_eq!(config.workers(), 10);
        assert_eq!(config.threads(), 0);
    }

    #[test]
    fn test_builder_rejects_zero_workers() {
        let result = LaunchConfig::builder().workers(0).build();
        assert_eq!(result, Err(ConfigError::InvalidWorkerCount(0)));
    }

    #[test]
    fn test_builder_rejects_too_many_workers() {
        let result = LaunchConfig::builder().workers(MAX_WORKERS + 1).build();
        assert_eq!(result, Err(ConfigError::InvalidWorkerCount(MAX_WORKERS + 1)));
    }

    #[test]
    fn test_builder_rejects_too_many_threads() {
        let result = LaunchConfig::builder().threads(MAX_THREADS + 1).build();
        assert_eq!(result, Err(ConfigError::InvalidThreadCount(MAX_THREADS + 1)));
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = LaunchConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LaunchConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let config = LaunchConfig::from_lookup(lookup_from(&[
            (ENV_SEED, "42"),
            (ENV_WORKERS, " 2048 "),
            (ENV_THREADS, "4"),
        ]))
        .unwrap();
        assert_eq!(config.seed(), Seed::new(42));
        assert_eq!(config.workers(), 2048);
        assert_eq!(config.threads(), 4);
    }

    #[test]
    fn test_from_lookup_negative_seed() {
        let config = LaunchConfig::from_lookup(lookup_from(&[(ENV_SEED, "-1")])).unwrap();
        assert_eq!(config.seed().value(), u64::MAX);
    }

    #[test]
    fn test_from_lookup_invalid_value() {
        let err = LaunchConfig::from_lookup(lookup_from(&[(ENV_WORKERS, "many")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar {
                name: ENV_WORKERS,
                value: "many".to_string()
            }
        );
    }

    #[test]
    fn test_from_lookup_validates() {
        let err = LaunchConfig::from_lookup(lookup_from(&[(ENV_WORKERS, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWorkerCount(0));
    }

    #[test]
    fn test_from_toml_str() {
        let config = LaunchConfig::from_toml_str("seed = 7\nworkers = 128\n").unwrap();
        assert_eq!(config.seed(), Seed::new(7));
        assert_eq!(config.workers(), 128);
        assert_eq!(config.threads(), 0);
    }

    #[test]
    fn test_from_toml_str_negative_seed_matches_env() {
        let from_toml = LaunchConfig::from_toml_str("seed = -1").unwrap();
        let from_env = LaunchConfig::from_lookup(lookup_from(&[(ENV_SEED, "-1")])).unwrap();
        assert_eq!(from_toml.seed(), Seed::new(u64::MAX));
        assert_eq!(from_toml, from_env);
    }

    #[test]
    fn test_from_toml_str_quoted_large_seed() {
        let config = LaunchConfig::from_toml_str("seed = \"18446744073709551615\"").unwrap();
        assert_eq!(config.seed(), Seed::new(u64::MAX));
    }

    #[test]
    fn test_from_lookup_invalid_seed() {
        let err = LaunchConfig::from_lookup(lookup_from(&[(ENV_SEED, "1e3")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar {
                name: ENV_SEED,
                value: "1e3".to_string()
            }
        );
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_field() {
        let err = LaunchConfig::from_toml_str("seeds = 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = LaunchConfig::from_file("/nonexistent/photon_rng.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("photon_rng_config_{}.toml", std::process::id()));
        std::fs::write(&path, "seed = 9\nworkers = 16\nthreads = 2\n").unwrap();

        let config = LaunchConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.seed(), Seed::new(9));
        assert_eq!(config.workers(), 16);
        assert_eq!(config.threads(), 2);
    }
}
