//! Image scaling operations
//!
//! Provides the scaling algorithms used by the sampler:
//! - Sampling (nearest neighbor)
//! - Area mapping (box averaging, for downscaling with anti-aliasing)
//!
//! | Function | Purpose |
//! |---|---|
//! | `scale` | scale by factors with an explicit method |
//! | `scale_to_size` | scale to a size, 0 in one axis keeps aspect ratio |
//! | `scale_by_sampling` | nearest-neighbor scale by factors |

use crate::{TransformError, TransformResult};
use swatch_core::PixelBuffer;
use swatch_core::color::{compose_rgba, extract_rgba};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Area mapping (best for downscaling, anti-aliased)
    AreaMap,
    /// Area mapping when shrinking, sampling when enlarging
    #[default]
    Auto,
}

/// Scale an image by the given factors
///
/// # Arguments
/// * `buffer` - Input image
/// * `scale_x` - Horizontal scale factor (e.g., 0.5 = half width)
/// * `scale_y` - Vertical scale factor
/// * `method` - Scaling algorithm to use
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number.
pub fn scale(
    buffer: &PixelBuffer,
    scale_x: f32,
    scale_y: f32,
    method: ScaleMethod,
) -> TransformResult<PixelBuffer> {
    for (axis, factor) in [("x", scale_x), ("y", scale_y)] {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TransformError::InvalidScaleFactor(format!(
                "scale_{axis} must be positive, got {factor}"
            )));
        }
    }
    let width = scaled_extent(buffer.width(), scale_x);
    let height = scaled_extent(buffer.height(), scale_y);
    resample(buffer, width, height, method)
}

/// Scale an image to a specific size
///
/// # Arguments
/// * `buffer` - Input image
/// * `width` - Target width (0 to maintain aspect ratio)
/// * `height` - Target height (0 to maintain aspect ratio)
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if both dimensions are 0.
pub fn scale_to_size(buffer: &PixelBuffer, width: u32, height: u32) -> TransformResult<PixelBuffer> {
    let (width, height) = resolve_size(buffer.width(), buffer.height(), width, height)?;
    resample(buffer, width, height, ScaleMethod::Auto)
}

/// Scale an image using nearest-neighbor sampling
///
/// # Arguments
/// * `buffer` - Input image
/// * `scale_x` - Horizontal scale factor
/// * `scale_y` - Vertical scale factor
pub fn scale_by_sampling(
    buffer: &PixelBuffer,
    scale_x: f32,
    scale_y: f32,
) -> TransformResult<PixelBuffer> {
    scale(buffer, scale_x, scale_y, ScaleMethod::Sampling)
}

/// Fill in a zero target axis from the source aspect ratio.
pub(crate) fn resolve_size(
    src_w: u32,
    src_h: u32,
    width: u32,
    height: u32,
) -> TransformResult<(u32, u32)> {
    match (width, height) {
        (0, 0) => Err(TransformError::InvalidParameters(
            "at least one of width and height must be non-zero".to_string(),
        )),
        (0, h) => Ok((scaled_extent(src_w, h as f32 / src_h as f32), h)),
        (w, 0) => Ok((w, scaled_extent(src_h, w as f32 / src_w as f32))),
        (w, h) => Ok((w, h)),
    }
}

#[inline]
fn scaled_extent(extent: u32, factor: f32) -> u32 {
    ((extent as f64 * factor as f64).round() as u32).max(1)
}

fn resample(
    buffer: &PixelBuffer,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<PixelBuffer> {
    if (width, height) == buffer.dimensions() {
        return Ok(buffer.clone());
    }
    let shrinking = width <= buffer.width() && height <= buffer.height();
    match method {
        ScaleMethod::Sampling => sample_nearest(buffer, width, height),
        ScaleMethod::AreaMap => area_map(buffer, width, height),
        ScaleMethod::Auto if shrinking => area_map(buffer, width, height),
        ScaleMethod::Auto => sample_nearest(buffer, width, height),
    }
}

fn sample_nearest(buffer: &PixelBuffer, width: u32, height: u32) -> TransformResult<PixelBuffer> {
    let mut out = PixelBuffer::new(width, height)?.to_mut();
    let xmap: Vec<u32> = (0..width)
        .map(|x| nearest_source(x, width, buffer.width()))
        .collect();
    for y in 0..height {
        let src = buffer.row_data(nearest_source(y, height, buffer.height()));
        let dst = out.row_data_mut(y);
        for (d, &sx) in dst.iter_mut().zip(&xmap) {
            *d = src[sx as usize];
        }
    }
    Ok(out.into())
}

#[inline]
fn nearest_source(dst: u32, dst_extent: u32, src_extent: u32) -> u32 {
    let pos = ((dst as f64 + 0.5) * src_extent as f64 / dst_extent as f64) as u32;
    pos.min(src_extent - 1)
}

/// Source columns (or rows) covering one destination cell, with the
/// fractional overlap of each.
fn area_spans(dst_extent: u32, src_extent: u32) -> Vec<Vec<(usize, f64)>> {
    let ratio = src_extent as f64 / dst_extent as f64;
    (0..dst_extent)
        .map(|d| {
            let start = d as f64 * ratio;
            let end = (d as f64 + 1.0) * ratio;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_extent as usize);
            (first..last)
                .filter_map(|s| {
                    let overlap = end.min(s as f64 + 1.0) - start.max(s as f64);
                    (overlap > 0.0).then_some((s, overlap))
                })
                .collect()
        })
        .collect()
}

fn area_map(buffer: &PixelBuffer, width: u32, height: u32) -> TransformResult<PixelBuffer> {
    let mut out = PixelBuffer::new(width, height)?.to_mut();
    let xspans = area_spans(width, buffer.width());
    let yspans = area_spans(height, buffer.height());

    for (y, yspan) in yspans.iter().enumerate() {
        let dst = out.row_data_mut(y as u32);
        for (d, xspan) in dst.iter_mut().zip(&xspans) {
            let mut acc = [0.0f64; 4];
            let mut total = 0.0f64;
            for &(sy, wy) in yspan {
                let row = buffer.row_data(sy as u32);
                for &(sx, wx) in xspan {
                    let w = wx * wy;
                    let (r, g, b, a) = extract_rgba(row[sx]);
                    acc[0] += r as f64 * w;
                    acc[1] += g as f64 * w;
                    acc[2] += b as f64 * w;
                    acc[3] += a as f64 * w;
                    total += w;
                }
            }
            let [r, g, b, a] = acc.map(|v| (v / total).round().clamp(0.0, 255.0) as u8);
            *d = compose_rgba(r, g, b, a);
        }
    }
    Ok(out.into())
}
