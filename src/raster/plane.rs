use crate::foundation::error::{BlendError, BlendResult};
use crate::foundation::math::to_u8;

/// One 8-bit channel of a raster, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Plane {
    /// Wrap `data` as a `width x height` plane.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> BlendResult<Self> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(BlendError::validation(format!(
                "plane expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A plane with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> BlendResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Caller guarantees `data.len() == width * height`.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            data,
        }
    }

    /// Plane width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw samples.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the plane and return its samples.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Sample at `(x, y)`, `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data.get(idx).copied()
    }
}

/// Float intermediate produced while a blend formula runs (0.0..=255.0 scale).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FloatPlane {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<f32>,
}

impl FloatPlane {
    pub(crate) fn zeros(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    /// Clamp to the 8-bit range and round.
    pub(crate) fn to_plane(&self) -> Plane {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| to_u8(v)).collect(),
        }
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> BlendResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| BlendError::validation("plane size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/plane.rs"]
mod tests;
