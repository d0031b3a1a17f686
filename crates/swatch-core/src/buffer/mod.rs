//! PixelBuffer - The raster container fed to the extraction pipeline
//!
//! # Pixel layout
//!
//! - One packed `0xRRGGBBAA` word per pixel
//! - Rows are stored top to bottom, pixels left to right (row-major)
//! - Width and height are always at least 1
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared ownership) and is
//! never mutated once built. To write pixels, start from a
//! [`PixelBufferMut`] (via [`PixelBuffer::new`] + [`PixelBuffer::try_into_mut`],
//! or [`PixelBuffer::to_mut`]) and freeze it back with `Into<PixelBuffer>`.

mod access;

use crate::color::{Color, compose_rgba};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug, PartialEq, Eq)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (one packed word per pixel)
    data: Vec<u32>,
}

/// Immutable RGBA raster
///
/// # Examples
///
/// ```
/// use swatch_core::{Color, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(640, 480, Color::WHITE).unwrap();
/// assert_eq!(buffer.width(), 640);
/// assert_eq!(buffer.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer with the specified dimensions.
    ///
    /// All pixels are initialized to transparent black (`0x00000000`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_fill(width, height, 0)
    }

    /// Create a new buffer where every pixel is `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Self::with_fill(width, height, color.to_pixel32())
    }

    fn with_fill(width: u32, height: u32, pixel: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                data: vec![pixel; len],
            }),
        })
    }

    /// Build a buffer from interleaved RGBA8 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferSizeMismatch`] if `samples.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, samples: &[u8]) -> Result<Self> {
        let image = ImageRef::new(width, height, samples)?;
        image.to_buffer()
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false; a buffer holds at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the packed words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always copies; the original stays untouched.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PixelBuffer
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the packed pixel words.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get the mutable packed words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buffer: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buffer.inner),
        }
    }
}

/// Borrowed interleaved RGBA8 samples
///
/// Unlike [`PixelBuffer`], an `ImageRef` may describe a zero-area image;
/// rejecting that case is left to whoever rasterizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    width: u32,
    height: u32,
    samples: &'a [u8],
}

impl<'a> ImageRef<'a> {
    /// Bytes per RGBA8 pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Wrap `samples` as a `width` x `height` RGBA8 image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if the slice length does not
    /// equal `width * height * 4`.
    pub fn new(width: u32, height: u32, samples: &'a [u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * Self::BYTES_PER_PIXEL;
        if samples.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the image covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the raw interleaved samples.
    #[inline]
    pub fn samples(&self) -> &'a [u8] {
        self.samples
    }

    /// Get the color at (x, y), or `None` when out of bounds.
    pub fn color(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * Self::BYTES_PER_PIXEL;
        let px = &self.samples[idx..idx + Self::BYTES_PER_PIXEL];
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }

    /// Copy the samples into an owned [`PixelBuffer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero-area image.
    pub fn to_buffer(&self) -> Result<PixelBuffer> {
        let buffer = PixelBuffer::new(self.width, self.height)?;
        let mut out = buffer.to_mut();
        for (dst, px) in out
            .data_mut()
            .iter_mut()
            .zip(self.samples.chunks_exact(Self::BYTES_PER_PIXEL))
        {
            *dst = compose_rgba(px[0], px[1], px[2], px[3]);
        }
        Ok(out.into())
    }
}
