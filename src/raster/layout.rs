use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BlendError, BlendResult};

/// Ordered channel kinds carried by a [`Raster`](crate::Raster).
///
/// Only [`Layout::La`] and [`Layout::Rgba`] carry an alpha channel, always in the last position.
/// Other multi-channel layouts (HSV, CMYK, ...) are treated as pure color planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Layout {
    /// Single-channel grayscale.
    #[serde(rename = "L")]
    L,
    /// Grayscale plus alpha.
    #[serde(rename = "LA")]
    La,
    /// Red, green, blue.
    #[serde(rename = "RGB")]
    Rgb,
    /// Red, green, blue, alpha.
    #[serde(rename = "RGBA")]
    Rgba,
    /// Hue, saturation, value.
    #[serde(rename = "HSV")]
    Hsv,
    /// Cyan, magenta, yellow, key.
    #[serde(rename = "CMYK")]
    Cmyk,
    /// Luma plus blue/red difference chroma.
    #[serde(rename = "YCbCr")]
    YCbCr,
    /// CIE L*a*b*.
    #[serde(rename = "LAB")]
    Lab,
}

impl Layout {
    /// Total channel count, alpha included.
    pub fn channels(self) -> usize {
        match self {
            Self::L => 1,
            Self::La => 2,
            Self::Rgb | Self::Hsv | Self::YCbCr | Self::Lab => 3,
            Self::Rgba | Self::Cmyk => 4,
        }
    }

    /// Channel count excluding alpha.
    pub fn color_channels(self) -> usize {
        self.channels() - usize::from(self.has_alpha())
    }

    /// Whether the last channel is alpha.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::La | Self::Rgba)
    }

    /// The same layout with its alpha channel removed.
    pub fn color_layout(self) -> Self {
        match self {
            Self::La => Self::L,
            Self::Rgba => Self::Rgb,
            other => other,
        }
    }

    /// The alpha-carrying variant of this layout, if one exists.
    pub fn with_alpha(self) -> Option<Self> {
        match self {
            Self::L | Self::La => Some(Self::La),
            Self::Rgb | Self::Rgba => Some(Self::Rgba),
            Self::Hsv | Self::Cmyk | Self::YCbCr | Self::Lab => None,
        }
    }

    /// Conventional mode name (`"RGBA"`, `"LA"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::La => "LA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Hsv => "HSV",
            Self::Cmyk => "CMYK",
            Self::YCbCr => "YCbCr",
            Self::Lab => "LAB",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = BlendError;

    fn from_str(s: &str) -> BlendResult<Self> {
        let mode = s.trim();
        match mode.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "LA" => Ok(Self::La),
            "RGB" => Ok(Self::Rgb),
            "RGBA" => Ok(Self::Rgba),
            "HSV" => Ok(Self::Hsv),
            "CMYK" => Ok(Self::Cmyk),
            "YCBCR" => Ok(Self::YCbCr),
            "LAB" => Ok(Self::Lab),
            _ => Err(BlendError::unsupported_layout(format!(
                "unknown layout '{mode}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/layout.rs"]
mod tests;
