//! The 64-bit seed that drives every generation.
//!
//! A [`Seed`] is either passed in directly or derived by folding arbitrary
//! inputs with [`scramble_all`]. It is immutable; every downstream value is
//! derived from it, never written back.

use crate::error::IconError;
use crate::scramble::{scramble, scramble_all};
use crate::seed_hash::SeedHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A reproducible 64-bit generation seed.
///
/// Stored as the unsigned bit pattern; [`Seed::as_signed`] gives the signed
/// view. Two equal seeds fed to the same profile and catalog produce the
/// same icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn from_signed(value: i64) -> Self {
        Self(value as u64)
    }

    /// Folds `inputs` left to right into a seed. No inputs gives seed 0.
    pub fn from_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: SeedHash,
    {
        Self(scramble_all(inputs))
    }

    /// Derives a seed from the current wall-clock time in nanoseconds.
    ///
    /// Not reproducible; intended for "surprise me" front ends.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self(scramble(nanos))
    }

    /// Parses unsigned decimal, negative decimal or `0x` hex.
    ///
    /// Underscores are ignored, so `0xDEAD_BEEF` and `1_000` are accepted.
    /// Returns `IconError::InvalidSeed` for anything else.
    pub fn parse(text: &str) -> Result<Self, IconError> {
        let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
        let invalid = |e: std::num::ParseIntError| IconError::InvalidSeed(format!("{text:?}: {e}"));

        if let Some(hex) = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            return u64::from_str_radix(hex, 16).map(Self).map_err(invalid);
        }
        if cleaned.starts_with('-') {
            return cleaned.parse::<i64>().map(Self::from_signed).map_err(invalid);
        }
        cleaned.parse::<u64>().map(Self).map_err(invalid)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn as_signed(self) -> i64 {
        self.0 as i64
    }

    /// The scrambled form of this seed, used for index selection.
    pub fn scrambled(self) -> u64 {
        scramble(self.0)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
