//! In-place recoloring of RGBA8 pixel buffers.
//!
//! Buffers are tightly packed, four bytes per pixel in R, G, B, A order.
//! Alpha is never written, so shapes and anti-aliased edges survive. A
//! trailing partial pixel, if any, is left untouched.

use crate::color::{hsl_to_rgba, rgba_to_hsl, Hsl, Rgba8};

/// Overwrites the R, G and B bytes of every pixel with `color`.
///
/// Each pixel keeps its own alpha; `color.a` is ignored.
pub fn fill_rgb(buffer: &mut [u8], color: Rgba8) {
    for px in buffer.chunks_exact_mut(4) {
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
    }
}

/// Recolors every pixel toward `color` while keeping its shading.
///
/// Per pixel: hue and saturation are replaced by `color`'s, lightness is
/// multiplied by `color.l`, alpha is kept. Light-on-dark line art therefore
/// takes on the tint but keeps its highlights and shadows.
pub fn tint(buffer: &mut [u8], color: Hsl) {
    for px in buffer.chunks_exact_mut(4) {
        let src = Rgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        };
        let hsl = rgba_to_hsl(src);
        let out = hsl_to_rgba(Hsl {
            h: color.h,
            s: color.s,
            l: hsl.l * color.l,
            a: hsl.a,
        });
        px[0] = out.r;
        px[1] = out.g;
        px[2] = out.b;
    }
}
