//! Error types for swatch-transform

use thiserror::Error;

/// Errors that can occur while rasterizing or scaling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] swatch_core::Error),

    /// Source image covers no pixels
    #[error("invalid image: {width}x{height} source has zero area")]
    InvalidImage { width: u32, height: u32 },

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
