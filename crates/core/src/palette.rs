//! Seed-driven palette synthesis.
//!
//! A [`Profile`] reads disjoint bit windows of a seed as independent color
//! parameters: one background and one or two foreground colors in HSL.
//! Hues are quantized to `2^hue_bits` steps and foreground hues are offset
//! from the background hue, so a foreground never shares the background's
//! hue. The canonical layout is [`Profile::default`].

use crate::color::{Hsl, Rgba8};
use crate::error::IconError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A bit window of the seed scaled into a float: `((seed >> shift) & mask) / divisor`.
///
/// A shift of 64 or more reads nothing and samples as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub shift: u32,
    pub mask: u64,
    pub divisor: f32,
}

impl Window {
    pub const fn new(shift: u32, mask: u64, divisor: f32) -> Self {
        Self {
            shift,
            mask,
            divisor,
        }
    }

    pub fn sample(&self, seed: u64) -> f32 {
        read_bits(seed, self.shift, self.mask) as f32 / self.divisor
    }
}

/// A raw integer bit window of the seed, added to a hue step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jitter {
    pub shift: u32,
    pub mask: u64,
}

impl Jitter {
    pub const fn new(shift: u32, mask: u64) -> Self {
        Self { shift, mask }
    }

    pub fn raw(&self, seed: u64) -> u64 {
        read_bits(seed, self.shift, self.mask)
    }
}

fn read_bits(seed: u64, shift: u32, mask: u64) -> u64 {
    seed.checked_shr(shift).unwrap_or(0) & mask
}

/// A saturation or lightness channel: constant offsets plus a sum of windows.
///
/// Evaluated in `f32` as `windows[0] + offsets[0] + offsets[1] + ... +
/// windows[1] + ...`, left to right. Offsets are added one at a time, so
/// `w + 0.85 - 0.035` rounds after each step and can differ from `w + 0.815`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub offsets: Vec<f32>,
    #[serde(default)]
    pub windows: Vec<Window>,
}

impl Channel {
    pub fn new(offsets: Vec<f32>, windows: Vec<Window>) -> Self {
        Self { offsets, windows }
    }

    pub fn sample(&self, seed: u64) -> f32 {
        let (first, rest) = match self.windows.split_first() {
            Some((first, rest)) => (first.sample(seed), rest),
            None => (0.0, &[][..]),
        };
        let base = self.offsets.iter().fold(first, |acc, o| acc + o);
        rest.iter().fold(base, |acc, w| acc + w.sample(seed))
    }
}

/// Hue step relative to the background: `(seed + offset + jitter...) & hue_mask`.
///
/// An offset of 0 with no jitter reads the background hue itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HueRule {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub jitter: Vec<Jitter>,
}

impl HueRule {
    pub fn new(offset: u64, jitter: Vec<Jitter>) -> Self {
        Self { offset, jitter }
    }

    pub fn step(&self, seed: u64, hue_mask: u64) -> u64 {
        self.jitter
            .iter()
            .fold((seed & hue_mask).wrapping_add(self.offset), |acc, j| {
                acc.wrapping_add(j.raw(seed))
            })
            & hue_mask
    }

    /// Largest total the jitter windows can add on top of the offset.
    fn jitter_span(&self) -> u64 {
        self.jitter
            .iter()
            .fold(0u64, |acc, j| acc.saturating_add(j.mask))
    }
}

/// How one color's hue, saturation and lightness are read from the seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLayout {
    #[serde(default)]
    pub hue: HueRule,
    pub saturation: Channel,
    pub lightness: Channel,
}

/// Upper limit on [`Profile::hue_bits`].
pub const MAX_HUE_BITS: u32 = 16;

/// A complete bit-field layout for one generation profile.
///
/// Deserializing fills any omitted top-level field from the canonical
/// layout, so a JSON override only needs the parts it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Hues are quantized to `2^hue_bits` steps.
    pub hue_bits: u32,
    /// Pass every hue through [`primaries_to_official`](crate::color::primaries_to_official).
    pub remap_primaries: bool,
    pub alpha: f32,
    pub background: ColorLayout,
    pub foreground: ColorLayout,
    pub second_foreground: Option<ColorLayout>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            hue_bits: 6,
            remap_primaries: false,
            alpha: 1.0,
            background: ColorLayout {
                hue: HueRule::default(),
                saturation: Channel::new(vec![0.7], vec![Window::new(6, 15, 64.0)]),
                lightness: Channel::new(vec![0.2], vec![Window::new(10, 63, 150.0)]),
            },
            foreground: ColorLayout {
                hue: HueRule::new(24, vec![Jitter::new(11, 16)]),
                saturation: Channel::new(vec![0.85], vec![Window::new(17, 15, 100.0)]),
                lightness: Channel::new(vec![0.7], vec![Window::new(21, 63, 256.0)]),
            },
            second_foreground: Some(ColorLayout {
                hue: HueRule::new(24, vec![Jitter::new(11, 16), Jitter::new(17, 3)]),
                saturation: Channel::new(
                    vec![0.85, -0.035],
                    vec![Window::new(20, 15, 150.0), Window::new(19, 7, 100.0)],
                ),
                lightness: Channel::new(
                    vec![0.65, -0.05],
                    vec![Window::new(24, 63, 256.0), Window::new(22, 15, 150.0)],
                ),
            }),
        }
    }
}

impl Profile {
    /// Parses a profile from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        let profile: Profile =
            serde_json::from_str(json).map_err(|e| IconError::InvalidProfile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that every window is readable and that foreground hues can
    /// never land on the background hue.
    pub fn validate(&self) -> Result<(), IconError> {
        if !(1..=MAX_HUE_BITS).contains(&self.hue_bits) {
            return Err(IconError::InvalidProfile(format!(
                "hue_bits must be in 1..={MAX_HUE_BITS}, got {}",
                self.hue_bits
            )));
        }
        let steps = 1u64 << self.hue_bits;
        for (name, layout) in self.layouts() {
            for j in &layout.hue.jitter {
                check_shift(name, j.shift)?;
            }
            for w in layout.saturation.windows.iter().chain(&layout.lightness.windows) {
                check_shift(name, w.shift)?;
                if w.divisor == 0.0 || !w.divisor.is_finite() {
                    return Err(IconError::InvalidProfile(format!(
                        "{name}: divisor must be finite and non-zero, got {}",
                        w.divisor
                    )));
                }
            }
        }
        let foregrounds = std::iter::once(&self.foreground).chain(&self.second_foreground);
        for layout in foregrounds {
            let offset = layout.hue.offset % steps;
            let span = layout.hue.jitter_span();
            if offset == 0 || offset.saturating_add(span) >= steps {
                return Err(IconError::InvalidProfile(format!(
                    "foreground hue offset {} with jitter up to {span} can wrap onto the background hue",
                    layout.hue.offset
                )));
            }
        }
        Ok(())
    }

    fn layouts(&self) -> impl Iterator<Item = (&'static str, &ColorLayout)> {
        [
            ("background", Some(&self.background)),
            ("foreground", Some(&self.foreground)),
            ("second_foreground", self.second_foreground.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, layout)| layout.map(|l| (name, l)))
    }

    fn color(&self, layout: &ColorLayout, seed: u64) -> Hsl {
        let hue_mask = (1u64 << self.hue_bits.min(MAX_HUE_BITS)) - 1;
        let h = layout.hue.step(seed, hue_mask) as f32 / (hue_mask + 1) as f32;
        let color = Hsl::new(
            h,
            layout.saturation.sample(seed),
            layout.lightness.sample(seed),
            self.alpha,
        );
        if self.remap_primaries {
            color.remapped()
        } else {
            color
        }
    }

    /// Derives the palette for `seed`. Never fails.
    ///
    /// Profiles that skipped [`validate`](Self::validate) still produce a
    /// palette: `hue_bits` is capped at 16, shifts of 64 or more read zero,
    /// and zero divisors give non-finite channels that still clamp to bytes.
    pub fn synthesize(&self, seed: u64) -> IconPalette {
        let palette = IconPalette {
            background: self.color(&self.background, seed),
            foreground: self.color(&self.foreground, seed),
            second_foreground: self
                .second_foreground
                .as_ref()
                .map(|layout| self.color(layout, seed)),
        };
        trace!(seed, ?palette, "synthesized palette");
        palette
    }
}

fn check_shift(name: &str, shift: u32) -> Result<(), IconError> {
    if shift >= u64::BITS {
        return Err(IconError::InvalidProfile(format!(
            "{name}: shift must be below 64, got {shift}"
        )));
    }
    Ok(())
}

/// One background and one or two foreground colors, in HSL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconPalette {
    pub background: Hsl,
    pub foreground: Hsl,
    pub second_foreground: Option<Hsl>,
}

impl IconPalette {
    /// The foreground colors in drawing order.
    pub fn foregrounds(&self) -> impl Iterator<Item = Hsl> {
        std::iter::once(self.foreground).chain(self.second_foreground)
    }

    pub fn to_rgba(&self) -> RgbaPalette {
        RgbaPalette {
            background: self.background.to_rgba(),
            foreground: self.foreground.to_rgba(),
            second_foreground: self.second_foreground.map(Hsl::to_rgba),
        }
    }
}

/// An [`IconPalette`] converted to 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbaPalette {
    pub background: Rgba8,
    pub foreground: Rgba8,
    pub second_foreground: Option<Rgba8>,
}
