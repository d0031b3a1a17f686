//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test image
    #[error("failed to load image '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// Failed to build a synthetic image
    #[error("failed to build image: {0}")]
    Build(#[from] swatch_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
