//! Bounded index derivation from one half of a scrambled value.
//!
//! Uses multiply-shift range reduction instead of modulo, so there is no
//! division and the bias is negligible for 32-bit inputs. The low and high
//! halves of the same scrambled word give two independent draws.
//!
//! These functions do not mix their input. Pass a value from
//! [`scramble`](crate::scramble::scramble) or the draws will be correlated.

/// Reduces 32 input bits into `[0, bound)`, or `(bound, 0]` for a negative bound.
fn confine(bits: u64, bound: i32) -> i32 {
    let r = ((i64::from(bound) * bits as i64) >> 32) as i32;
    // Negative bounds floor one step too far; the sign bit corrects it.
    r + ((r as u32) >> 31) as i32
}

/// Maps the low 32 bits of `x` into `[0, bound)`.
///
/// A negative `bound` is still exclusive: the result is in `(bound, 0]`.
/// A `bound` of 0 always yields 0.
pub fn confine_lower_half(x: u64, bound: i32) -> i32 {
    confine(x & 0xFFFF_FFFF, bound)
}

/// Maps the high 32 bits of `x` into `[0, bound)`.
///
/// Pair with [`confine_lower_half`] on the same `x` for a second,
/// independent draw.
pub fn confine_upper_half(x: u64, bound: i32) -> i32 {
    confine(x >> 32, bound)
}

/// Draws one index from each half of a range of `2 * half` entries.
///
/// Returns `(lower, upper)` with `lower` in `[0, half)` and `upper` in
/// `[half, 2 * half)` for a positive `half`.
pub fn confine_halves(scrambled: u64, half: i32) -> (i32, i32) {
    (
        confine_lower_half(scrambled, half),
        confine_upper_half(scrambled, half).wrapping_add(half),
    )
}
