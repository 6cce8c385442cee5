//! Per-worker stream state and the integers that seed it.
//!
//! This module provides [`Stream`], the opaque generator state owned by one
//! worker, together with the [`Seed`] and [`WorkerIndex`] newtypes that
//! determine it.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::de::{self, Deserialize, Deserializer, Visitor};

use super::error::ParseSeedError;

/// Invariant lifetime brand tying a value to the worker that created it.
///
/// `fn(&'w ()) -> &'w ()` is invariant in `'w`, so a branded value can
/// neither be widened to `'static` nor unified with another worker's brand.
pub(crate) type Brand<'w> = PhantomData<fn(&'w ()) -> &'w ()>;

/// Run-wide seed, shared by value with every worker.
///
/// # Examples
///
/// ```rust
/// use photon_rng::Seed;
///
/// assert_eq!(Seed::from(42u32).value(), 42);
/// // Negative C-style seeds are sign-extended
/// assert_eq!(Seed::from(-1i32).value(), u64::MAX);
/// assert_eq!("-1".parse::<Seed>().unwrap(), Seed::new(u64::MAX));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    /// Creates a seed from a raw 64-bit value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value as u64)
    }
}

impl FromStr for Seed {
    type Err = ParseSeedError;

    /// Parses an unsigned 64-bit seed, or a negative one in two's complement.
    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        let trimmed = s.trim();
        trimmed
            .parse::<u64>()
            .map(Self)
            .or_else(|_| trimmed.parse::<i64>().map(Self::from))
            .map_err(|_| ParseSeedError(s.to_string()))
    }
}

// TOML integers are signed 64-bit, so seeds above `i64::MAX` arrive either
// negative or as strings.
impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeedVisitor;

        impl Visitor<'_> for SeedVisitor {
            type Value = Seed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 64-bit integer seed or a string holding one")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Seed, E> {
                Ok(Seed(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Seed, E> {
                Ok(Seed::from(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Seed, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SeedVisitor)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a worker within a launch grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerIndex(u32);

impl WorkerIndex {
    /// Creates a worker index.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the index as a `usize`, for slot addressing.
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for WorkerIndex {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for WorkerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque random-number stream owned by exactly one worker.
///
/// The state is a deterministic function of `(seed, worker index, 0)`: a
/// ChaCha8 generator is keyed from the seed, the worker index selects its
/// stream (one of 2^64 disjoint sequences under that key), and sampling
/// starts at word position zero.
///
/// A stream is move-only and carries the lifetime brand `'w` of the worker
/// that created it, so it cannot outlive that worker's kernel call or be
/// handed to another worker. It is created by
/// [`device::init`](crate::guard::device::init) and dropped when the worker
/// retires.
///
/// `Stream` implements [`RngCore`], so kernels may draw from any `rand`
/// distribution as well as through [`device::next`](crate::guard::device::next).
pub struct Stream<'w> {
    core: ChaCha8Rng,
    _brand: Brand<'w>,
}

impl<'w> Stream<'w> {
    /// Seeds a stream. Only the guard's device surface and tests call this.
    #[inline]
    pub(crate) fn seeded(seed: Seed, worker_index: WorkerIndex) -> Self {
        let mut core = ChaCha8Rng::seed_from_u64(seed.value());
        core.set_stream(u64::from(worker_index.value()));
        Self {
            core,
            _brand: PhantomData,
        }
    }
}

impl fmt::Debug for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

impl RngCore for Stream<'_> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.core.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.core.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.core.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.core.try_fill_bytes(dest)
    }
}
