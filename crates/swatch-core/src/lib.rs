//! Swatch Core - Basic data structures for palette extraction
//!
//! This crate provides the value types shared by every stage of the
//! extraction pipeline:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - Row-major RGBA raster (immutable / mutable)
//! - [`ImageRef`] - Borrowed raw RGBA8 samples, the zero-copy source type
//! - [`Color`] / [`CountedColor`] - 8-bit RGBA color and its frequency
//!
//! All colors are stored as 0-255 integer channels. Code that compares
//! against normalized thresholds converts at the point of comparison with
//! [`Color::normalized`].

pub mod buffer;
pub mod error;

pub use buffer::{ImageRef, PixelBuffer, PixelBufferMut};
pub use color::{Color, CountedColor};
pub use error::{Error, Result};

/// Color type and channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    use std::fmt;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// 8-bit RGBA color
    ///
    /// Equality and hashing are exact on all four channels, so a `Color`
    /// can key a frequency map.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Color {
        /// Black color
        pub const BLACK: Color = Color::rgb(0, 0, 0);
        /// White color
        pub const WHITE: Color = Color::rgb(255, 255, 255);
        /// Red color
        pub const RED: Color = Color::rgb(255, 0, 0);
        /// Green color
        pub const GREEN: Color = Color::rgb(0, 255, 0);
        /// Blue color
        pub const BLUE: Color = Color::rgb(0, 0, 255);
        /// Cyan color
        pub const CYAN: Color = Color::rgb(0, 255, 255);

        /// Create a new RGBA color
        pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self { r, g, b, a }
        }

        /// Create an opaque RGB color (alpha = 255)
        pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
            Self::new(r, g, b, 255)
        }

        /// Create an opaque grayscale color
        pub const fn gray(value: u8) -> Self {
            Self::rgb(value, value, value)
        }

        /// Create an opaque color from normalized [0.0, 1.0] channels.
        ///
        /// Values are clamped and rounded to the nearest 8-bit level.
        pub fn from_normalized(r: f32, g: f32, b: f32) -> Self {
            Self::rgb(to_byte(r), to_byte(g), to_byte(b))
        }

        /// Decode a packed `0xRRGGBBAA` pixel.
        #[inline]
        pub fn from_pixel32(pixel: u32) -> Self {
            let (r, g, b, a) = extract_rgba(pixel);
            Self { r, g, b, a }
        }

        /// Compose as a packed `0xRRGGBBAA` pixel.
        #[inline]
        pub fn to_pixel32(self) -> u32 {
            compose_rgba(self.r, self.g, self.b, self.a)
        }

        /// RGB channels scaled to [0.0, 1.0].
        #[inline]
        pub fn normalized(self) -> [f32; 3] {
            [
                self.r as f32 / 255.0,
                self.g as f32 / 255.0,
                self.b as f32 / 255.0,
            ]
        }
    }

    impl Default for Color {
        fn default() -> Self {
            Self::BLACK
        }
    }

    impl fmt::Display for Color {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
            if self.a != 255 {
                write!(f, "{:02x}", self.a)?;
            }
            Ok(())
        }
    }

    impl From<Color> for u32 {
        fn from(color: Color) -> u32 {
            color.to_pixel32()
        }
    }

    #[inline]
    fn to_byte(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// A color paired with its occurrence count.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CountedColor {
        pub color: Color,
        pub count: u32,
    }

    impl CountedColor {
        /// Create a new counted color
        pub const fn new(color: Color, count: u32) -> Self {
            Self { color, count }
        }
    }

}
