//! Seed scrambling: the MX3 unary hash with a zero-guard prefix.
//!
//! Same input always produces the same output on every platform (pure
//! wrapping integer arithmetic, no floating point). Shifts are logical
//! shifts on `u64`; callers holding a signed seed can cast with `as u64`.

use crate::seed_hash::SeedHash;

/// XORed into the input first so that 0 does not map close to 0.
const ZERO_GUARD: u64 = 0xBBE0_5633_03A4_615F;

/// Odd multiplier shared by all three multiply rounds.
const MX3_MULTIPLIER: u64 = 0xBEA2_25F9_EB34_556D;

/// Scrambles `x` into a well-diffused 64-bit value.
///
/// Approximates a random bijection over `u64`: every output bit depends on
/// every input bit. Any `u64` is a valid input and any `u64` can be returned.
pub fn scramble(x: u64) -> u64 {
    let mut x = x ^ ZERO_GUARD;
    x ^= x >> 32;
    x = x.wrapping_mul(MX3_MULTIPLIER);
    x ^= x >> 29;
    x = x.wrapping_mul(MX3_MULTIPLIER);
    x ^= x >> 32;
    x = x.wrapping_mul(MX3_MULTIPLIER);
    x ^ (x >> 29)
}

/// Sign-extends a 32-bit content hash to a 64-bit word.
fn widen(hash: i32) -> u64 {
    i64::from(hash) as u64
}

/// Hashes `value` with [`SeedHash`] and scrambles the hash.
pub fn scramble_value<T: SeedHash + ?Sized>(value: &T) -> u64 {
    scramble(widen(value.seed_hash()))
}

/// Scrambles two values together. Order matters.
///
/// Reaches far more of the 64-bit range than scrambling a single combined
/// 32-bit hash would.
pub fn scramble_pair<A, B>(first: &A, second: &B) -> u64
where
    A: SeedHash + ?Sized,
    B: SeedHash + ?Sized,
{
    scramble(scramble(widen(first.seed_hash())).wrapping_add(widen(second.seed_hash())))
}

/// Folds any number of values into one seed, left to right.
///
/// Each step scrambles the item's hash plus the running total. Returns 0
/// for an empty sequence. Three or four distinct inputs are usually enough
/// to reach the whole 64-bit output range.
pub fn scramble_all<I>(values: I) -> u64
where
    I: IntoIterator,
    I::Item: SeedHash,
{
    values
        .into_iter()
        .fold(0u64, |acc, v| scramble(widen(v.seed_hash()).wrapping_add(acc)))
}
