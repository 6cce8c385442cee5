//! Error types for seed parsing.

use thiserror::Error;

/// A seed string that is neither an unsigned nor a signed 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid seed '{0}': expected a 64-bit integer")]
pub struct ParseSeedError(pub(crate) String);
