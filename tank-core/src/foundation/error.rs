/// Convenience result type used across the tank pipeline.
pub type TankResult<T> = Result<T, TankError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum TankError {
    /// Input bytes could not be recognized or decoded as a raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Filesystem failures while opening, creating or renaming files.
    #[error("io error: {0}")]
    Io(String),

    /// Two layers that must share a canvas have different sizes.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The composite could not be encoded or written as PNG.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid user-provided configuration or matrix data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TankError {
    /// Build a [`TankError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TankError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`TankError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`TankError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`TankError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
