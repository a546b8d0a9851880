#![deny(unsafe_code)]
//! Core of iconseed: deterministic icon selection and palette synthesis.
//!
//! Any set of seed inputs is folded by [`scramble_all`] into a 64-bit
//! [`Seed`]. The scrambled seed is split by [`confine_lower_half`] and
//! [`confine_upper_half`] into two catalog indices, and a [`Profile`] reads
//! bit windows of the seed as HSL colors, converted by [`hsl_to_rgba`].
//! Everything here is pure: no I/O, no shared state, no failure paths in
//! the generation functions themselves.

pub mod color;
pub mod confine;
pub mod error;
pub mod generator;
pub mod palette;
pub mod pixel;
pub mod scramble;
pub mod seed;
pub mod seed_hash;

pub use color::{hsl_to_rgba, primaries_to_official, rgba_to_hsl, Hsl, Rgba8};
pub use confine::{confine_halves, confine_lower_half, confine_upper_half};
pub use error::IconError;
pub use generator::{Generator, IconPlan, Pick, MAX_CATALOG_LEN};
pub use palette::{IconPalette, Profile, RgbaPalette, MAX_HUE_BITS};
pub use scramble::{scramble, scramble_all, scramble_pair, scramble_value};
pub use seed::Seed;
pub use seed_hash::SeedHash;
