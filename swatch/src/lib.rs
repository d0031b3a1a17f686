//! swatch - Dominant-color palette extraction
//!
//! Reduces an image to four colors: a `background` taken from a narrow
//! band near the left edge, and `primary`, `secondary` and `detail`
//! colors that contrast with it.
//!
//! # Overview
//!
//! - Image decoding (PNG, JPEG, binary PNM)
//! - Bounded-resolution sampling (default width 250, never enlarged)
//! - Background selection with black/white avoidance
//! - Contrasting, mutually distinct foreground colors
//!
//! With the `image` feature, `image::RgbaImage` and `image::DynamicImage`
//! can be passed to [`extract_palette`] directly.
//!
//! # Example
//!
//! ```
//! use swatch::{Color, PixelBuffer, extract_palette};
//!
//! let image = PixelBuffer::filled(320, 200, Color::rgb(250, 250, 180)).unwrap();
//! let palette = extract_palette(&image, None).unwrap();
//! assert_eq!(palette.background, Color::rgb(250, 250, 180));
//! assert!(!palette.is_dark_background());
//! assert_eq!(palette.primary, Color::BLACK);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use swatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use swatch_color as color;
pub use swatch_io as io;
pub use swatch_transform as transform;

// The extraction entry points
pub use swatch_color::{
    ColorError, ColorResult, Palette, PaletteOptions, extract_palette,
    extract_palette_from_buffer, extract_palette_with_options,
};
pub use swatch_transform::{Rasterize, ScaleQuality, TargetSize};
