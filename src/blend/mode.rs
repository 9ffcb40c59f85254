use std::fmt;
use std::str::FromStr;

use crate::blend::non_separable::{self, ColorTriple};
use crate::blend::separable;
use crate::foundation::error::{BlendError, BlendResult};

/// Per-channel formula: `(backdrop, source) -> result`, all on the 0..=255 scale.
pub type SeparableFn = fn(f32, f32) -> f32;

/// Whole-pixel formula over unit-scale triples: `(backdrop, source) -> result`.
pub type NonSeparableFn = fn(ColorTriple, ColorTriple) -> ColorTriple;

/// The formula behind a [`BlendMode`].
#[derive(Clone, Copy, Debug)]
pub enum BlendKernel {
    /// Applied independently to every paired channel plane.
    Separable(SeparableFn),
    /// Applied to the first three color channels jointly.
    NonSeparable(NonSeparableFn),
}

/// Closed set of supported blend modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source replaces backdrop.
    Normal,
    /// `a * b / 255`.
    Multiply,
    /// `a + b - a * b / 255`.
    Screen,
    /// `min(a, b)`.
    Darken,
    /// `max(a, b)`.
    Lighten,
    /// `|a - b|`.
    Difference,
    /// `a - b`.
    Subtract,
    /// `a + b` (a.k.a. add).
    LinearDodge,
    /// Hard light with the roles of backdrop and source swapped.
    Overlay,
    /// Multiply or screen depending on the source.
    HardLight,
    /// Power curve darkening or lightening depending on the source.
    SoftLight,
    /// Linear burn or linear dodge depending on the source.
    LinearLight,
    /// `a + b - 2ab / 255`.
    Exclusion,
    /// Darken the backdrop to reflect the source.
    ColorBurn,
    /// Brighten the backdrop to reflect the source.
    ColorDodge,
    /// Darken or lighten replacement depending on the source.
    PinLight,
    /// Color burn or color dodge depending on the source.
    VividLight,
    /// Source hue, backdrop saturation and luminosity.
    Hue,
    /// Source saturation, backdrop hue and luminosity.
    Saturation,
    /// Source hue and saturation, backdrop luminosity.
    Color,
    /// Source luminosity, backdrop hue and saturation.
    Luminosity,
}

impl BlendMode {
    /// Every mode, separable modes first.
    pub const ALL: [BlendMode; 21] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Darken,
        Self::Lighten,
        Self::Difference,
        Self::Subtract,
        Self::LinearDodge,
        Self::Overlay,
        Self::HardLight,
        Self::SoftLight,
        Self::LinearLight,
        Self::Exclusion,
        Self::ColorBurn,
        Self::ColorDodge,
        Self::PinLight,
        Self::VividLight,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// The formula implementing this mode.
    pub fn kernel(self) -> BlendKernel {
        use BlendKernel::{NonSeparable, Separable};
        match self {
            Self::Normal => Separable(separable::normal),
            Self::Multiply => Separable(separable::multiply),
            Self::Screen => Separable(separable::screen),
            Self::Darken => Separable(separable::darken),
            Self::Lighten => Separable(separable::lighten),
            Self::Difference => Separable(separable::difference),
            Self::Subtract => Separable(separable::subtract),
            Self::LinearDodge => Separable(separable::linear_dodge),
            Self::Overlay => Separable(separable::overlay),
            Self::HardLight => Separable(separable::hard_light),
            Self::SoftLight => Separable(separable::soft_light),
            Self::LinearLight => Separable(separable::linear_light),
            Self::Exclusion => Separable(separable::exclusion),
            Self::ColorBurn => Separable(separable::color_burn),
            Self::ColorDodge => Separable(separable::color_dodge),
            Self::PinLight => Separable(separable::pin_light),
            Self::VividLight => Separable(separable::vivid_light),
            Self::Hue => NonSeparable(non_separable::hue),
            Self::Saturation => NonSeparable(non_separable::saturation),
            Self::Color => NonSeparable(non_separable::color),
            Self::Luminosity => NonSeparable(non_separable::luminosity),
        }
    }

    /// Whether the mode works channel by channel.
    pub fn is_separable(self) -> bool {
        matches!(self.kernel(), BlendKernel::Separable(_))
    }

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Difference => "difference",
            Self::Subtract => "subtract",
            Self::LinearDodge => "linear_dodge",
            Self::Overlay => "overlay",
            Self::HardLight => "hard_light",
            Self::SoftLight => "soft_light",
            Self::LinearLight => "linear_light",
            Self::Exclusion => "exclusion",
            Self::ColorBurn => "color_burn",
            Self::ColorDodge => "color_dodge",
            Self::PinLight => "pin_light",
            Self::VividLight => "vivid_light",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = BlendError;

    fn from_str(s: &str) -> BlendResult<Self> {
        let name = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        if name.is_empty() {
            return Err(BlendError::UnknownMode(String::new()));
        }
        match name.as_str() {
            "add" => return Ok(Self::LinearDodge),
            "vivid" => return Ok(Self::VividLight),
            "over_lay" => return Ok(Self::Overlay),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or(BlendError::UnknownMode(name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/mode.rs"]
mod tests;
