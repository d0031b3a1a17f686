//! swatch-transform - Sampling and scaling for palette extraction
//!
//! This crate turns source images into bounded-resolution pixel buffers:
//!
//! - Scaling (nearest-neighbor sampling, area mapping)
//! - The [`Rasterize`] trait, the boundary every image source implements
//! - [`sample`], which picks the target size and never enlarges the source
//!
//! With the `image` feature, `image::RgbaImage` and `image::DynamicImage`
//! implement [`Rasterize`] directly.

mod error;
#[cfg(feature = "image")]
mod image_interop;
pub mod sampler;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use sampler::{DEFAULT_SAMPLE_WIDTH, Rasterize, ScaleQuality, TargetSize, sample, sample_size};
pub use scale::{ScaleMethod, scale, scale_by_sampling, scale_to_size};
