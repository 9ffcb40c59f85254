//! Scalar helpers shared by the blend kernels.
//!
//! Conditional formulas are written as mask arithmetic: a predicate becomes `1.0` or `0.0`
//! and both branch results are weighted by it. Kernels stay branch-free per pixel, which keeps
//! plane loops auto-vectorizable.

/// `1.0` when `cond` holds, `0.0` otherwise.
#[inline(always)]
pub(crate) fn mask(cond: bool) -> f32 {
    f32::from(u8::from(cond))
}

/// Weighted pick between two precomputed branch values: `low * m + high * (1 - m)`.
///
/// Both inputs must be finite; a non-finite branch poisons the result even when masked out.
#[inline(always)]
pub(crate) fn select(m: f32, low: f32, high: f32) -> f32 {
    low * m + high * (1.0 - m)
}

/// Replace a zero denominator with `1.0` so the masked-out branch stays finite.
#[inline(always)]
pub(crate) fn nonzero(d: f32) -> f32 {
    d + mask(d == 0.0)
}

/// Store a 0..=255 float sample into a byte: clamp, then round to nearest.
#[inline(always)]
pub(crate) fn to_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round() as u8
}

/// `top * m + base * (255 - m)` scaled back to 0..=255, rounded to nearest.
#[inline]
pub(crate) fn mix255(top: u8, base: u8, m: u8) -> u8 {
    let m = u32::from(m);
    ((u32::from(top) * m + u32::from(base) * (255 - m) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
