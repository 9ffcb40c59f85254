use crate::foundation::error::{BlendError, BlendResult};
use crate::foundation::math::mix255;
use crate::raster::layout::Layout;
use crate::raster::plane::{Plane, pixel_count};

/// Planar 8-bit raster: one [`Plane`] per channel of its [`Layout`].
///
/// Rasters are immutable once built; every operation that "modifies" one returns a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    layout: Layout,
    width: u32,
    height: u32,
    planes: Vec<Plane>,
}

impl Raster {
    /// Assemble a raster from one plane per channel of `layout`.
    ///
    /// Fails when the plane count does not match the layout or any plane has different
    /// dimensions than the first one.
    pub fn from_planes(layout: Layout, planes: Vec<Plane>) -> BlendResult<Self> {
        if planes.len() != layout.channels() {
            return Err(BlendError::validation(format!(
                "layout {layout} expects {} planes, got {}",
                layout.channels(),
                planes.len()
            )));
        }
        let (width, height) = planes[0].dimensions();
        if planes.iter().any(|p| p.dimensions() != (width, height)) {
            return Err(BlendError::validation(
                "all planes of a raster must share dimensions",
            ));
        }
        Ok(Self {
            layout,
            width,
            height,
            planes,
        })
    }

    /// Build a raster from tightly packed interleaved samples (`RGBARGBA...`).
    pub fn from_interleaved(
        layout: Layout,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> BlendResult<Self> {
        let n = layout.channels();
        let len = pixel_count(width, height)?;
        let expected_len = len
            .checked_mul(n)
            .ok_or_else(|| BlendError::validation("raster buffer size overflow"))?;
        if data.len() != expected_len {
            return Err(BlendError::validation(format!(
                "{layout} raster of {width}x{height} expects {expected_len} bytes, got {}",
                data.len()
            )));
        }

        let mut channels = (0..n)
            .map(|_| Vec::with_capacity(len))
            .collect::<Vec<Vec<u8>>>();
        for px in data.chunks_exact(n) {
            for (c, &v) in channels.iter_mut().zip(px) {
                c.push(v);
            }
        }
        let planes = channels
            .into_iter()
            .map(|c| Plane::new(width, height, c))
            .collect::<BlendResult<Vec<_>>>()?;
        Self::from_planes(layout, planes)
    }

    /// A raster where every pixel equals `pixel` (one value per channel).
    pub fn filled(layout: Layout, width: u32, height: u32, pixel: &[u8]) -> BlendResult<Self> {
        if pixel.len() != layout.channels() {
            return Err(BlendError::validation(format!(
                "layout {layout} expects {} channel values, got {}",
                layout.channels(),
                pixel.len()
            )));
        }
        let planes = pixel
            .iter()
            .map(|&v| Plane::filled(width, height, v))
            .collect::<BlendResult<Vec<_>>>()?;
        Self::from_planes(layout, planes)
    }

    /// Channel layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All planes in layout order, alpha last when present.
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Plane at channel index `idx`.
    pub fn plane(&self, idx: usize) -> Option<&Plane> {
        self.planes.get(idx)
    }

    /// Consume the raster and return its planes.
    pub fn split(self) -> Vec<Plane> {
        self.planes
    }

    /// Color planes and, for alpha-carrying layouts, the alpha plane.
    pub fn split_alpha(&self) -> (&[Plane], Option<&Plane>) {
        if self.layout.has_alpha() {
            let (color, alpha) = self.planes.split_at(self.planes.len() - 1);
            (color, alpha.first())
        } else {
            (&self.planes, None)
        }
    }

    /// Alpha plane, if the layout carries one.
    pub fn alpha(&self) -> Option<&Plane> {
        self.split_alpha().1
    }

    /// Attach `alpha`, or replace the existing alpha plane.
    pub fn with_alpha(&self, alpha: Plane) -> BlendResult<Self> {
        if alpha.dimensions() != self.dimensions() {
            return Err(BlendError::size_mismatch(
                self.dimensions(),
                alpha.dimensions(),
            ));
        }
        let layout = self.layout.with_alpha().ok_or_else(|| {
            BlendError::unsupported_layout(format!("layout {} cannot carry alpha", self.layout))
        })?;
        let (color, _) = self.split_alpha();
        let mut planes = color.to_vec();
        planes.push(alpha);
        Self::from_planes(layout, planes)
    }

    /// Copy of `self` with `top`'s color composited over it, weighted per pixel by `mask`
    /// (`0` keeps `self`, `255` takes `top`). Alpha of `self` is kept as is.
    pub fn paste_masked(&self, top: &Raster, mask: &Plane) -> BlendResult<Self> {
        if top.dimensions() != self.dimensions() {
            return Err(BlendError::size_mismatch(self.dimensions(), top.dimensions()));
        }
        if mask.dimensions() != self.dimensions() {
            return Err(BlendError::size_mismatch(
                self.dimensions(),
                mask.dimensions(),
            ));
        }
        let (base_color, base_alpha) = self.split_alpha();
        let (top_color, _) = top.split_alpha();
        if base_color.len() != top_color.len() {
            return Err(BlendError::unsupported_layout(format!(
                "cannot paste {} onto {}",
                top.layout, self.layout
            )));
        }

        let mut planes = base_color
            .iter()
            .zip(top_color)
            .map(|(base, top)| paste_plane(base, top, mask))
            .collect::<Vec<_>>();
        planes.extend(base_alpha.cloned());
        Self::from_planes(self.layout, planes)
    }

    /// Interleaved samples, one pixel after another.
    pub fn to_interleaved(&self) -> Vec<u8> {
        let n = self.planes.len();
        let len = (self.width as usize) * (self.height as usize);
        let mut out = vec![0u8; len * n];
        for (c, plane) in self.planes.iter().enumerate() {
            for (px, &v) in out.chunks_exact_mut(n).zip(plane.as_bytes()) {
                px[c] = v;
            }
        }
        out
    }

    /// Channel values of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec<u8>> {
        self.planes.iter().map(|p| p.get(x, y)).collect()
    }
}

/// `top * m + base * (255 - m)`, divided back into 0..=255 with rounding.
pub(crate) fn paste_plane(base: &Plane, top: &Plane, mask: &Plane) -> Plane {
    let data = base
        .as_bytes()
        .iter()
        .zip(top.as_bytes())
        .zip(mask.as_bytes())
        .map(|((&b, &t), &m)| mix255(t, b, m))
        .collect::<Vec<_>>();
    Plane::from_parts(base.width(), base.height(), data)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
