//! Hue / saturation / color / luminosity blending.
//!
//! These formulas see all three color channels of a pixel at once. They work on unit-scale
//! triples and keep the result in gamut with a luminance-preserving clip. Conditionals are mask
//! weighted like the per-channel kernels, including ties: every channel equal to the maximum is
//! treated as "the max channel".

use crate::foundation::math::{mask, nonzero, select};

/// Three color channels of one pixel on the 0.0..=1.0 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorTriple {
    /// First channel (red for RGB input).
    pub r: f32,
    /// Second channel.
    pub g: f32,
    /// Third channel.
    pub b: f32,
}

impl ColorTriple {
    /// Build a triple from unit-scale channels.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a triple from 8-bit samples.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    fn max(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    fn min(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

/// Weighted luma of a triple.
pub fn lum(c: ColorTriple) -> f32 {
    0.298912 * c.r + 0.586611 * c.g + 0.114478 * c.b
}

/// Channel range: `max - min`.
pub fn sat(c: ColorTriple) -> f32 {
    c.max() - c.min()
}

/// Pull an out-of-gamut triple back into 0..=1 along the line towards its luma.
///
/// A negative minimum is fixed first; the maximum is then measured on the corrected triple.
pub fn clip_color(c: ColorTriple) -> ColorTriple {
    let l = lum(c);

    let n = c.min();
    let below = mask(n < 0.0);
    let scale = l / nonzero(l - n);
    let c = c.map(|v| select(below, l + (v - l) * scale, v));

    let x = c.max();
    let above = mask(x > 1.0);
    let scale = (1.0 - l) / nonzero(x - l);
    c.map(|v| select(above, l + (v - l) * scale, v))
}

/// Shift every channel by the same amount so the luma becomes `l`, then clip.
pub fn set_lum(c: ColorTriple, l: f32) -> ColorTriple {
    let d = l - lum(c);
    clip_color(c.map(|v| v + d))
}

/// Rescale the channel range to `s`: max channels become `s`, min channels `0`, the middle
/// channel keeps its relative position. A flat triple becomes all zeros.
pub fn set_sat(c: ColorTriple, s: f32) -> ColorTriple {
    let x = c.max();
    let n = c.min();
    let range = x - n;
    let spread = mask(x != n);
    c.map(|v| {
        let is_max = mask(v == x);
        let is_min = mask(v == n);
        let is_mid = (1.0 - is_max) * (1.0 - is_min);
        let mid = (v - n) * s / nonzero(range);
        (s * is_max + mid * is_mid) * spread
    })
}

/// Source hue with backdrop saturation and luma.
pub fn hue(cb: ColorTriple, cs: ColorTriple) -> ColorTriple {
    set_lum(set_sat(cs, sat(cb)), lum(cb))
}

/// Backdrop hue and luma with source saturation.
pub fn saturation(cb: ColorTriple, cs: ColorTriple) -> ColorTriple {
    set_lum(set_sat(cb, sat(cs)), lum(cb))
}

/// Source hue and saturation with backdrop luma.
pub fn color(cb: ColorTriple, cs: ColorTriple) -> ColorTriple {
    set_lum(cs, lum(cb))
}

/// Backdrop hue and saturation with source luma.
pub fn luminosity(cb: ColorTriple, cs: ColorTriple) -> ColorTriple {
    set_lum(cb, lum(cs))
}

#[cfg(test)]
#[path = "../../tests/unit/blend/non_separable.rs"]
mod tests;
