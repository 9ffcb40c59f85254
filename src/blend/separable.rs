//! Per-channel blend formulas.
//!
//! Every kernel takes the backdrop sample `a` and the source sample `b` on the 0..=255 scale and
//! returns an unclamped value on the same scale. Storing into an 8-bit plane clamps and rounds.
//! Two-branch formulas compute both branches and weight them with a 0/1 mask; any division that
//! can hit zero has its denominator patched first so masked-out branches stay finite.

use crate::foundation::math::{mask, nonzero, select};

pub(crate) fn normal(_a: f32, b: f32) -> f32 {
    b
}

pub(crate) fn multiply(a: f32, b: f32) -> f32 {
    a * b / 255.0
}

pub(crate) fn screen(a: f32, b: f32) -> f32 {
    a + b - a * b / 255.0
}

pub(crate) fn darken(a: f32, b: f32) -> f32 {
    a.min(b)
}

pub(crate) fn lighten(a: f32, b: f32) -> f32 {
    a.max(b)
}

pub(crate) fn difference(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

pub(crate) fn subtract(a: f32, b: f32) -> f32 {
    a - b
}

pub(crate) fn linear_dodge(a: f32, b: f32) -> f32 {
    a + b
}

/// Hard light with backdrop and source swapped, so the branch follows the backdrop.
pub(crate) fn overlay(a: f32, b: f32) -> f32 {
    hard_light(b, a)
}

/// Branches on the source: multiply-like below 128, screen-like from 128 up.
pub(crate) fn hard_light(a: f32, b: f32) -> f32 {
    let low = 2.0 * a * b / 255.0;
    let high = 2.0 * (a + b - a * b / 255.0) - 255.0;
    select(mask(b < 128.0), low, high)
}

pub(crate) fn soft_light(a: f32, b: f32) -> f32 {
    let fa = a / 255.0;
    let low = fa.powf((255.0 - b) / 128.0) * 255.0;
    let high = fa.powf(128.0 / nonzero(b)) * 255.0;
    select(mask(b < 128.0), low, high)
}

pub(crate) fn linear_light(a: f32, b: f32) -> f32 {
    let low = a + 2.0 * b - 255.0;
    let high = a + 2.0 * (b - 128.0);
    select(mask(b < 128.0), low, high)
}

pub(crate) fn exclusion(a: f32, b: f32) -> f32 {
    a + b - 2.0 * a * b / 255.0
}

/// `1 - (1 - a) / b` on the unit scale; a zero source yields 0.
pub(crate) fn color_burn(a: f32, b: f32) -> f32 {
    let live = mask(b != 0.0);
    let fa = a / 255.0;
    let fb = nonzero(b) / 255.0;
    (1.0 - (1.0 - fa) / fb) * 255.0 * live
}

/// `a / (1 - b)` on the unit scale; a full source yields 255.
pub(crate) fn color_dodge(a: f32, b: f32) -> f32 {
    let full = mask(b == 255.0);
    let dodge = a / nonzero(255.0 - b) * 255.0;
    select(full, 255.0, dodge)
}

pub(crate) fn pin_light(a: f32, b: f32) -> f32 {
    let low = a.min(2.0 * b);
    let high = a.max(2.0 * (b - 128.0));
    select(mask(b < 128.0), low, high)
}

pub(crate) fn vivid_light(a: f32, b: f32) -> f32 {
    let low = color_burn(a, 2.0 * b);
    let high = color_dodge(a, 2.0 * (b - 128.0));
    select(mask(b < 128.0), low, high)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/separable.rs"]
mod tests;
