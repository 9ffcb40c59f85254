use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::foundation::error::{BlendError, BlendResult};
use crate::raster::buffer::Raster;
use crate::raster::layout::Layout;

impl Raster {
    /// Convert an `image` crate buffer into a planar raster.
    ///
    /// 8-bit gray, gray+alpha, RGB and RGBA map onto the matching layout; every other pixel
    /// type is converted to RGBA8 first.
    pub fn from_dynamic(img: &DynamicImage) -> BlendResult<Self> {
        match img {
            DynamicImage::ImageLuma8(buf) => {
                Self::from_interleaved(Layout::L, buf.width(), buf.height(), buf.as_raw())
            }
            DynamicImage::ImageLumaA8(buf) => {
                Self::from_interleaved(Layout::La, buf.width(), buf.height(), buf.as_raw())
            }
            DynamicImage::ImageRgb8(buf) => {
                Self::from_interleaved(Layout::Rgb, buf.width(), buf.height(), buf.as_raw())
            }
            DynamicImage::ImageRgba8(buf) => {
                Self::from_interleaved(Layout::Rgba, buf.width(), buf.height(), buf.as_raw())
            }
            other => {
                let rgba = other.to_rgba8();
                Self::from_interleaved(Layout::Rgba, rgba.width(), rgba.height(), rgba.as_raw())
            }
        }
    }

    /// Convert back into an `image` crate buffer.
    ///
    /// Only layouts with an `image` equivalent (L, LA, RGB, RGBA) are accepted.
    pub fn to_dynamic(&self) -> BlendResult<DynamicImage> {
        let (w, h) = self.dimensions();
        let data = self.to_interleaved();
        let img = match self.layout() {
            Layout::L => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            Layout::La => GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
            Layout::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            Layout::Rgba => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
            other => {
                return Err(BlendError::unsupported_layout(format!(
                    "layout {other} has no image buffer equivalent"
                )));
            }
        };
        img.ok_or_else(|| BlendError::validation("raster buffer does not match its dimensions"))
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) into a raster.
pub fn decode_raster(bytes: &[u8]) -> BlendResult<Raster> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    Raster::from_dynamic(&img)
}

/// Open and decode an image file into a raster.
pub fn open_raster(path: impl AsRef<Path>) -> BlendResult<Raster> {
    let path = path.as_ref();
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Raster::from_dynamic(&img)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/interop.rs"]
mod tests;
