//! Stable 32-bit content hashing for arbitrary seed inputs.
//!
//! [`SeedHash`] is deliberately not `std::hash::Hash`: the std hashers are
//! randomly keyed per process and write integers in native byte order, so
//! the same input could scramble differently across runs or targets. Every
//! impl here is defined purely in terms of the value.

/// A value that can contribute to a seed.
///
/// The trait is object-safe, so heterogeneous inputs can be folded together
/// as `&[&dyn SeedHash]`.
pub trait SeedHash {
    /// Returns the 32-bit content hash of this value.
    fn seed_hash(&self) -> i32;
}

/// Folds a 64-bit pattern down to 32 bits by xoring the halves.
fn fold_u64(v: u64) -> i32 {
    (v ^ (v >> 32)) as i32
}

macro_rules! impl_seed_hash_narrow {
    ($($t:ty),*) => {
        $(
            impl SeedHash for $t {
                fn seed_hash(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! impl_seed_hash_wide {
    ($($t:ty),*) => {
        $(
            impl SeedHash for $t {
                fn seed_hash(&self) -> i32 {
                    fold_u64(*self as u64)
                }
            }
        )*
    };
}

impl_seed_hash_narrow!(i8, i16, i32, u8, u16, u32);
// Pointer-width types are widened to 64 bits first so 32-bit targets agree.
impl_seed_hash_wide!(i64, u64, isize, usize);

impl SeedHash for bool {
    fn seed_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl SeedHash for char {
    fn seed_hash(&self) -> i32 {
        *self as i32
    }
}

impl SeedHash for f32 {
    fn seed_hash(&self) -> i32 {
        if self.is_nan() {
            0x7fc0_0000
        } else {
            self.to_bits() as i32
        }
    }
}

impl SeedHash for f64 {
    fn seed_hash(&self) -> i32 {
        if self.is_nan() {
            fold_u64(0x7ff8_0000_0000_0000)
        } else {
            fold_u64(self.to_bits())
        }
    }
}

/// Polynomial hash over UTF-16 code units.
impl SeedHash for str {
    fn seed_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl SeedHash for String {
    fn seed_hash(&self) -> i32 {
        self.as_str().seed_hash()
    }
}

/// `None` is the absent value and hashes to 0.
impl<T: SeedHash> SeedHash for Option<T> {
    fn seed_hash(&self) -> i32 {
        self.as_ref().map_or(0, SeedHash::seed_hash)
    }
}

impl<T: SeedHash> SeedHash for [T] {
    fn seed_hash(&self) -> i32 {
        self.iter()
            .fold(1i32, |h, e| h.wrapping_mul(31).wrapping_add(e.seed_hash()))
    }
}

impl<T: SeedHash, const N: usize> SeedHash for [T; N] {
    fn seed_hash(&self) -> i32 {
        self.as_slice().seed_hash()
    }
}

impl<T: SeedHash> SeedHash for Vec<T> {
    fn seed_hash(&self) -> i32 {
        self.as_slice().seed_hash()
    }
}

impl<T: SeedHash + ?Sized> SeedHash for &T {
    fn seed_hash(&self) -> i32 {
        (**self).seed_hash()
    }
}

impl<T: SeedHash + ?Sized> SeedHash for Box<T> {
    fn seed_hash(&self) -> i32 {
        (**self).seed_hash()
    }
}
