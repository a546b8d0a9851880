//! Catalog-driven icon planning.
//!
//! A [`Generator`] borrows a caller-owned catalog and a [`Profile`]. For each
//! seed it picks one entry from the first half of the catalog, one from the
//! second half, and a palette. It draws nothing; the front end composes the
//! two picks with the colors however it renders.

use crate::confine::confine_halves;
use crate::error::IconError;
use crate::palette::{IconPalette, Profile};
use crate::seed::Seed;
use crate::seed_hash::SeedHash;
use serde::Serialize;
use tracing::debug;

/// One selected catalog entry and its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pick<'c, T> {
    pub index: usize,
    pub item: &'c T,
}

/// Everything a front end needs to draw one icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconPlan<'c, T> {
    pub seed: Seed,
    pub scrambled: u64,
    /// Drawn from `[0, len / 2)`.
    pub left: Pick<'c, T>,
    /// Drawn from `[len / 2, 2 * (len / 2))`.
    pub right: Pick<'c, T>,
    pub palette: IconPalette,
}

/// Longest catalog whose upper-half indices, `upper + len / 2`, still fit
/// in an `i32`.
pub const MAX_CATALOG_LEN: usize = i32::MAX as usize;

/// The `i32` half-length bound for a catalog of `len` entries.
fn half_bound(len: usize) -> Result<i32, IconError> {
    if len < 2 {
        return Err(IconError::CatalogTooSmall { len });
    }
    if len > MAX_CATALOG_LEN {
        return Err(IconError::CatalogTooLarge { len });
    }
    i32::try_from(len / 2).map_err(|_| IconError::CatalogTooLarge { len })
}

/// Plans icons over a borrowed, read-only catalog.
#[derive(Debug, Clone)]
pub struct Generator<'c, T> {
    catalog: &'c [T],
    half: i32,
    profile: Profile,
}

impl<'c, T> Generator<'c, T> {
    /// Creates a generator over `catalog`.
    ///
    /// Returns `IconError::CatalogTooSmall` if the catalog cannot be split
    /// into two non-empty halves, `IconError::CatalogTooLarge` if it holds
    /// more than [`MAX_CATALOG_LEN`] entries, or the profile's validation
    /// error.
    pub fn new(catalog: &'c [T], profile: Profile) -> Result<Self, IconError> {
        let half = half_bound(catalog.len())?;
        profile.validate()?;
        Ok(Self {
            catalog,
            half,
            profile,
        })
    }

    pub fn catalog(&self) -> &'c [T] {
        self.catalog
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Plans the icon for `seed`.
    ///
    /// The palette reads the seed directly; the two picks come from the low
    /// and high halves of the scrambled seed. With an odd catalog length the
    /// last entry is never picked.
    pub fn plan(&self, seed: Seed) -> IconPlan<'c, T> {
        let scrambled = seed.scrambled();
        let (lower, upper) = confine_halves(scrambled, self.half);
        // 2 * half <= i32::MAX, so both draws are in [0, 2 * half).
        let (left, right) = (lower as usize, upper as usize);
        debug!(%seed, scrambled, left, right, "planned icon");
        IconPlan {
            seed,
            scrambled,
            left: Pick {
                index: left,
                item: &self.catalog[left],
            },
            right: Pick {
                index: right,
                item: &self.catalog[right],
            },
            palette: self.profile.synthesize(seed.value()),
        }
    }

    /// Folds `inputs` into a seed and plans its icon.
    pub fn plan_from_inputs<I>(&self, inputs: I) -> IconPlan<'c, T>
    where
        I: IntoIterator,
        I::Item: SeedHash,
    {
        self.plan(Seed::from_inputs(inputs))
    }
}
