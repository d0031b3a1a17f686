//! Error types for swatch-color

use swatch_transform::TransformError;
use thiserror::Error;

/// Errors that can occur during palette extraction
///
/// Only [`ColorError::InvalidImage`] depends on the image content; every
/// other variant reports a caller bug such as out-of-range options.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] swatch_core::Error),

    /// Sampling error other than an invalid source
    #[error("transform error: {0}")]
    Transform(#[source] TransformError),

    /// Source image covers no pixels
    #[error("invalid image: {width}x{height} source has zero area")]
    InvalidImage { width: u32, height: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl From<TransformError> for ColorError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::InvalidImage { width, height } => Self::InvalidImage { width, height },
            TransformError::Core(core) => Self::Core(core),
            other => Self::Transform(other),
        }
    }
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_image_is_lifted() {
        let err: ColorError = TransformError::InvalidImage {
            width: 0,
            height: 3,
        }
        .into();
        assert!(matches!(err, ColorError::InvalidImage { width: 0, height: 3 }));
    }

    #[test]
    fn test_other_transform_errors_are_wrapped() {
        let err: ColorError = TransformError::InvalidParameters("x".to_string()).into();
        assert!(matches!(err, ColorError::Transform(_)));
    }
}
