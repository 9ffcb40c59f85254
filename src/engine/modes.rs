//! One entry point per blend mode, all with the same `(backdrop, source)` signature.

use crate::blend::mode::BlendMode;
use crate::engine::pipeline::blend;
use crate::foundation::error::BlendResult;
use crate::raster::buffer::Raster;

/// Source color replaces the backdrop.
pub fn normal(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Normal)
}

/// `a * b / 255`; never lighter than either input.
pub fn multiply(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Multiply)
}

/// `a + b - a * b / 255`; never darker than either input.
pub fn screen(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Screen)
}

/// Per-channel minimum.
pub fn darken(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Darken)
}

/// Per-channel maximum.
pub fn lighten(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Lighten)
}

/// `|a - b|`.
pub fn difference(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Difference)
}

/// `a - b`, clamped at 0.
pub fn subtract(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Subtract)
}

/// `a + b`, clamped at 255.
pub fn linear_dodge(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::LinearDodge)
}

/// Hard light with backdrop and source swapped.
pub fn overlay(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Overlay)
}

/// Multiply below mid-gray source, screen above.
pub fn hard_light(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::HardLight)
}

/// Power-curve darken/lighten driven by the source.
pub fn soft_light(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::SoftLight)
}

/// Linear burn below mid-gray source, linear dodge above.
pub fn linear_light(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::LinearLight)
}

/// `a + b - 2ab / 255`.
pub fn exclusion(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Exclusion)
}

/// Darken the backdrop by the source; a black source gives black.
pub fn color_burn(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::ColorBurn)
}

/// Brighten the backdrop by the source; a white source gives white.
pub fn color_dodge(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::ColorDodge)
}

/// Darken below mid-gray source, lighten above.
pub fn pin_light(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::PinLight)
}

/// Color burn below mid-gray source, color dodge above.
pub fn vivid_light(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::VividLight)
}

/// Source hue with backdrop saturation and luminosity. Needs 3+ color channels on both sides.
pub fn hue(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Hue)
}

/// Source saturation with backdrop hue and luminosity. Needs 3+ color channels on both sides.
pub fn saturation(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Saturation)
}

/// Source hue and saturation with backdrop luminosity. Needs 3+ color channels on both sides.
pub fn color(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Color)
}

/// Source luminosity with backdrop hue and saturation. Needs 3+ color channels on both sides.
pub fn luminosity(backdrop: &Raster, source: &Raster) -> BlendResult<Raster> {
    blend(backdrop, source, BlendMode::Luminosity)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/modes.rs"]
mod tests;
