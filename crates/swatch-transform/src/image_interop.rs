//! [`Rasterize`] implementations for the `image` crate
//!
//! Enabled with the `image` cargo feature. Resizing goes through
//! `image::imageops::resize` with a triangle filter, so the source is
//! never converted at full resolution.

use crate::{Rasterize, TransformResult};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};
use swatch_core::PixelBuffer;

impl Rasterize for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn resize(&self, width: u32, height: u32) -> TransformResult<PixelBuffer> {
        if (width, height) == RgbaImage::dimensions(self) {
            return Ok(PixelBuffer::from_rgba_bytes(width, height, self.as_raw())?);
        }
        let resized = imageops::resize(self, width, height, FilterType::Triangle);
        Ok(PixelBuffer::from_rgba_bytes(width, height, resized.as_raw())?)
    }
}

impl Rasterize for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn resize(&self, width: u32, height: u32) -> TransformResult<PixelBuffer> {
        let resized = if (width, height) == GenericImageView::dimensions(self) {
            self.to_rgba8()
        } else {
            imageops::resize(self, width, height, FilterType::Triangle)
        };
        Ok(PixelBuffer::from_rgba_bytes(width, height, resized.as_raw())?)
    }
}
