//! Bounded-resolution sampling
//!
//! Turns an arbitrary source image into a [`PixelBuffer`] small enough that
//! an O(pixels) histogram pass stays interactive. Sources plug in through
//! the [`Rasterize`] trait; the sampler only decides the target size and
//! never enlarges the source.

use crate::scale::{resolve_size, scale_to_size};
use crate::{TransformError, TransformResult};
use swatch_core::{ImageRef, PixelBuffer};
use tracing::debug;

/// Default sampling width when no explicit target is given
pub const DEFAULT_SAMPLE_WIDTH: u32 = 250;

/// Requested output size
///
/// A zero in one axis means "derive from the source aspect ratio".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// Create a target of exactly `width` x `height`.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Target a width, scaling height proportionally.
    pub const fn width(width: u32) -> Self {
        Self::new(width, 0)
    }

    /// Target a height, scaling width proportionally.
    pub const fn height(height: u32) -> Self {
        Self::new(0, height)
    }
}

/// Sampling quality presets
///
/// Each preset bounds the sampled width; `Highest` keeps the source size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleQuality {
    /// 50 pixels wide
    Lowest,
    /// 100 pixels wide
    Low,
    /// 250 pixels wide
    #[default]
    High,
    /// No downscaling
    Highest,
}

impl ScaleQuality {
    /// Sampling width for this preset, `None` for no downscaling.
    pub fn sample_width(self) -> Option<u32> {
        match self {
            Self::Lowest => Some(50),
            Self::Low => Some(100),
            Self::High => Some(DEFAULT_SAMPLE_WIDTH),
            Self::Highest => None,
        }
    }

    /// Target size for this preset.
    pub fn target(self) -> Option<TargetSize> {
        self.sample_width().map(TargetSize::width)
    }
}

/// A source that can be rasterized into a [`PixelBuffer`]
///
/// Implementations must not modify the source.
pub trait Rasterize {
    /// Source dimensions in pixels; either may be 0.
    fn dimensions(&self) -> (u32, u32);

    /// Rasterize at exactly `width` x `height` (both non-zero).
    fn resize(&self, width: u32, height: u32) -> TransformResult<PixelBuffer>;
}

impl Rasterize for PixelBuffer {
    fn dimensions(&self) -> (u32, u32) {
        PixelBuffer::dimensions(self)
    }

    fn resize(&self, width: u32, height: u32) -> TransformResult<PixelBuffer> {
        scale_to_size(self, width, height)
    }
}

impl Rasterize for ImageRef<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn resize(&self, width: u32, height: u32) -> TransformResult<PixelBuffer> {
        let buffer = self.to_buffer()?;
        scale_to_size(&buffer, width, height)
    }
}

impl<T: Rasterize + ?Sized> Rasterize for &T {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn resize(&self, width: u32, height: u32) -> TransformResult<PixelBuffer> {
        (**self).resize(width, height)
    }
}

/// Compute the sampled size for a `src_w` x `src_h` source.
///
/// An explicit `target` wins over `quality`. Each axis is clamped to the
/// source so the result never exceeds the target or the source.
///
/// # Errors
///
/// Returns [`TransformError::InvalidImage`] for a zero-area source and
/// [`TransformError::InvalidParameters`] for an all-zero target.
pub fn sample_size(
    src_w: u32,
    src_h: u32,
    target: Option<TargetSize>,
    quality: ScaleQuality,
) -> TransformResult<(u32, u32)> {
    if src_w == 0 || src_h == 0 {
        return Err(TransformError::InvalidImage {
            width: src_w,
            height: src_h,
        });
    }
    let Some(target) = target.or_else(|| quality.target()) else {
        return Ok((src_w, src_h));
    };
    let (w, h) = resolve_size(src_w, src_h, target.width, target.height)?;
    Ok((w.min(src_w), h.min(src_h)))
}

/// Rasterize `image` into a bounded-resolution buffer.
///
/// With no `target`, the image is downscaled to the `quality` preset width
/// (250 for [`ScaleQuality::High`]) preserving aspect ratio.
///
/// # Errors
///
/// Returns [`TransformError::InvalidImage`] if the source has zero area.
pub fn sample<R: Rasterize + ?Sized>(
    image: &R,
    target: Option<TargetSize>,
    quality: ScaleQuality,
) -> TransformResult<PixelBuffer> {
    let (src_w, src_h) = image.dimensions();
    let (width, height) = sample_size(src_w, src_h, target, quality)?;
    debug!(src_w, src_h, width, height, "sampling source image");
    image.resize(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::Color;

    #[test]
    fn test_default_width_keeps_aspect() {
        assert_eq!(sample_size(1000, 500, None, ScaleQuality::High).unwrap(), (250, 125));
        assert_eq!(sample_size(1000, 500, None, ScaleQuality::Low).unwrap(), (100, 50));
        assert_eq!(sample_size(1000, 500, None, ScaleQuality::Lowest).unwrap(), (50, 25));
    }

    #[test]
    fn test_highest_keeps_source() {
        assert_eq!(
            sample_size(1000, 500, None, ScaleQuality::Highest).unwrap(),
            (1000, 500)
        );
    }

    #[test]
    fn test_never_upscales() {
        assert_eq!(sample_size(20, 4, None, ScaleQuality::High).unwrap(), (20, 4));
        assert_eq!(
            sample_size(20, 4, Some(TargetSize::new(100, 2)), ScaleQuality::High).unwrap(),
            (20, 2)
        );
    }

    #[test]
    fn test_explicit_target_wins() {
        assert_eq!(
            sample_size(800, 600, Some(TargetSize::new(40, 30)), ScaleQuality::Lowest).unwrap(),
            (40, 30)
        );
        assert_eq!(
            sample_size(800, 600, Some(TargetSize::height(60)), ScaleQuality::High).unwrap(),
            (80, 60)
        );
    }

    #[test]
    fn test_tall_image_height_at_least_one() {
        assert_eq!(sample_size(10_000, 1, None, ScaleQuality::High).unwrap(), (250, 1));
    }

    #[test]
    fn test_zero_area_is_invalid_image() {
        assert!(matches!(
            sample_size(0, 10, None, ScaleQuality::High),
            Err(TransformError::InvalidImage { width: 0, height: 10 })
        ));
        let image = ImageRef::new(0, 0, &[]).unwrap();
        assert!(matches!(
            sample(&image, None, ScaleQuality::High),
            Err(TransformError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_sample_does_not_touch_source() {
        let source = PixelBuffer::filled(500, 100, Color::RED).unwrap();
        let before = source.clone();
        let out = sample(&source, None, ScaleQuality::High).unwrap();
        assert_eq!(out.dimensions(), (250, 50));
        assert_eq!(source, before);
    }

    #[test]
    fn test_sample_image_ref() {
        let samples: Vec<u8> = [10u8, 20, 30, 255].repeat(6);
        let image = ImageRef::new(3, 2, &samples).unwrap();
        let out = sample(&image, None, ScaleQuality::High).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert!(out.colors().all(|(_, _, c)| c == Color::rgb(10, 20, 30)));
    }
}
