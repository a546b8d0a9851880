//! Color types and conversion functions for iconseed.
//!
//! Palettes are synthesized in HSL and converted to 8-bit RGBA only at the
//! end. All arithmetic is `f32` so results match the single-precision
//! reference byte for byte. Every conversion is total: out-of-range inputs
//! are wrapped or clamped, never rejected.

use crate::error::IconError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Guards the lightness division when the value term is near zero.
const EPS: f32 = 1e-10;

/// Hue, saturation, lightness and alpha, each nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Same color with the hue passed through [`primaries_to_official`].
    pub fn remapped(self) -> Self {
        Self {
            h: primaries_to_official(self.h),
            ..self
        }
    }

    pub fn to_rgba(self) -> Rgba8 {
        hsl_to_rgba(self)
    }
}

/// 8-bit RGBA color.
///
/// Produced by [`hsl_to_rgba`] or parsed from hex. Serializes as a
/// `"#rrggbbaa"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Parses `"#rrggbb"` or `"#rrggbbaa"`, with or without the `#`.
    ///
    /// Six digits means fully opaque. Returns `IconError::InvalidColor` for
    /// any other length or non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Rgba8, IconError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(IconError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.is_ascii() {
            return Err(IconError::InvalidColor(format!("non-ASCII color {hex:?}")));
        }
        let channel = |i: usize, name: &str| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| IconError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgba8 {
            r: channel(0, "red")?,
            g: channel(2, "green")?,
            b: channel(4, "blue")?,
            a: if hex.len() == 8 {
                channel(6, "alpha")?
            } else {
                u8::MAX
            },
        })
    }

    /// Formats as `"#rrggbbaa"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Packs into `0xRRGGBBAA`.
    pub fn to_rgba8888(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

impl Serialize for Rgba8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Fractional part that is always in [0, 1), negative inputs included.
fn fract(v: f32) -> f32 {
    v - v.floor()
}

/// One channel's hue ramp: a triangle wave clamped to [0, 1].
fn hue_ramp(t: f32) -> f32 {
    ((t * 6.0 - 3.0).abs() - 1.0).clamp(0.0, 1.0)
}

/// Rounds and saturates into a byte. NaN becomes 0.
fn to_byte(v: f32) -> u8 {
    v.round() as u8
}

/// Converts HSL to 8-bit RGBA with a branch-free closed form.
///
/// The hue wraps modulo 1, so `h` and `h + 1.0` give the same color.
/// Lightness 0 is black and lightness 1 is white for any saturation.
pub fn hsl_to_rgba(c: Hsl) -> Rgba8 {
    let h = fract(c.h);
    let x = hue_ramp(h);
    let y = hue_ramp(fract(h + 2.0 / 3.0));
    let z = hue_ramp(fract(h + 1.0 / 3.0));

    let v = c.l + c.s * c.l.min(1.0 - c.l);
    let d = 2.0 * (1.0 - c.l / (v + EPS));
    let v = v * 255.0;
    let lerp = |ramp: f32| 1.0 + d * (ramp - 1.0);

    Rgba8 {
        r: to_byte(v * lerp(x)),
        g: to_byte(v * lerp(y)),
        b: to_byte(v * lerp(z)),
        a: to_byte(c.a * 255.0),
    }
}

/// Converts 8-bit RGBA back to HSL.
///
/// Branch-free selection of the max/min channel, with the same epsilon as
/// [`hsl_to_rgba`]. Achromatic input gets hue 0 and saturation 0.
pub fn rgba_to_hsl(c: Rgba8) -> Hsl {
    let r = f32::from(c.r) / 255.0;
    let g = f32::from(c.g) / 255.0;
    let b = f32::from(c.b) / 255.0;

    // (max of g/b, min of g/b, hue base, hue base for the other branch)
    let p = if g >= b {
        [g, b, 0.0, -1.0 / 3.0]
    } else {
        [b, g, -1.0, 2.0 / 3.0]
    };
    let q = if r >= p[0] {
        [r, p[1], p[2], p[0]]
    } else {
        [p[0], p[1], p[3], r]
    };

    let d = q[0] - q[3].min(q[1]);
    let l = q[0] * (1.0 - 0.5 * d / (q[0] + EPS));
    Hsl {
        h: (q[2] + (q[3] - q[1]) / (6.0 * d + EPS)).abs(),
        s: (q[0] - l) / (l.min(1.0 - l) + EPS),
        l,
        a: f32::from(c.a) / 255.0,
    }
}

/// Remaps a paint-primaries hue (violet opposite yellow) onto the standard
/// HSL hue circle (blue opposite yellow).
///
/// Monotonic on [0, 1] with 0 and 1 as fixed points.
pub fn primaries_to_official(hue: f32) -> f32 {
    let t = hue * 0.8 + 0.225;
    t * t - 0.050625
}
