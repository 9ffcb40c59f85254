/// Convenience result type used across layerblend.
pub type BlendResult<T> = Result<T, BlendError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlendError {
    /// Backdrop and source do not share pixel dimensions.
    #[error("size mismatch: backdrop is {backdrop_size:?}, source is {source_size:?}")]
    SizeMismatch {
        /// Backdrop `(width, height)`.
        backdrop_size: (u32, u32),
        /// Source `(width, height)`.
        source_size: (u32, u32),
    },

    /// The channel layouts involved cannot be handled by the requested operation.
    #[error("unsupported layout: {0}")]
    UnsupportedLayout(String),

    /// A blend mode name that does not map to any known mode.
    #[error("unknown blend mode '{0}'")]
    UnknownMode(String),

    /// Malformed rasters, planes or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendError {
    /// Build a [`BlendError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlendError::UnsupportedLayout`] value.
    pub fn unsupported_layout(msg: impl Into<String>) -> Self {
        Self::UnsupportedLayout(msg.into())
    }

    /// Build a [`BlendError::SizeMismatch`] value from two `(width, height)` pairs.
    pub fn size_mismatch(backdrop_size: (u32, u32), source_size: (u32, u32)) -> Self {
        Self::SizeMismatch {
            backdrop_size,
            source_size,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
