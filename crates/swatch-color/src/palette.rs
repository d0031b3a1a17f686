//! Palette extraction
//!
//! Ties the stages together:
//!
//! 1. sample the source down to a bounded-resolution buffer
//! 2. build edge-band and whole-image histograms in one pass
//! 3. choose the background from the edge band
//! 4. rank and select contrasting foreground colors
//!
//! Extraction is synchronous and pure: all intermediate state lives on the
//! stack of one call, so concurrent calls on different images need no
//! coordination and repeated calls on the same buffer return identical
//! palettes.

use crate::background::select_background;
use crate::colorspace::is_dark_with;
use crate::foreground::{rank_candidates, select_foreground};
use crate::histogram::ColorHistogram;
use crate::options::{DARK_LUMINANCE_THRESHOLD, PaletteOptions};
use crate::ColorResult;
use std::fmt;
use swatch_core::{Color, PixelBuffer};
use swatch_transform::{Rasterize, TargetSize, sample};
use tracing::debug;

/// Four-color summary of an image
///
/// Every field is always populated; missing foreground colors are filled
/// with white or black depending on the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Dominant edge color
    pub background: Color,
    /// Most prominent color contrasting with the background
    pub primary: Color,
    /// Contrasting color distinct from `primary`
    pub secondary: Color,
    /// Contrasting color distinct from both `primary` and `secondary`
    pub detail: Color,
}

impl Palette {
    /// All four colors as `[background, primary, secondary, detail]`.
    pub fn colors(&self) -> [Color; 4] {
        [self.background, self.primary, self.secondary, self.detail]
    }

    /// Whether the background's luminance is below 0.5.
    pub fn is_dark_background(&self) -> bool {
        is_dark_with(self.background, DARK_LUMINANCE_THRESHOLD)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "background {} primary {} secondary {} detail {}",
            self.background, self.primary, self.secondary, self.detail
        )
    }
}

/// Extract a palette with default options.
///
/// `downscale` bounds the sampled size; `None` samples to a width of 250
/// preserving aspect ratio. The source is never enlarged.
///
/// # Errors
///
/// Returns [`ColorError::InvalidImage`](crate::ColorError::InvalidImage) if
/// the source has zero area.
///
/// # Example
///
/// ```
/// use swatch_color::extract_palette;
/// use swatch_core::{Color, PixelBuffer};
///
/// let image = PixelBuffer::filled(64, 64, Color::rgb(20, 40, 160)).unwrap();
/// let palette = extract_palette(&image, None).unwrap();
/// assert_eq!(palette.background, Color::rgb(20, 40, 160));
/// assert_eq!(palette.primary, Color::WHITE);
/// ```
pub fn extract_palette<R: Rasterize + ?Sized>(
    image: &R,
    downscale: Option<TargetSize>,
) -> ColorResult<Palette> {
    extract_palette_with_options(image, &PaletteOptions::with_downscale(downscale))
}

/// Extract a palette with explicit options.
///
/// # Errors
///
/// Returns [`ColorError::InvalidImage`](crate::ColorError::InvalidImage) for
/// a zero-area source and
/// [`ColorError::InvalidParameters`](crate::ColorError::InvalidParameters)
/// if `options` fail validation.
pub fn extract_palette_with_options<R: Rasterize + ?Sized>(
    image: &R,
    options: &PaletteOptions,
) -> ColorResult<Palette> {
    options.validate()?;
    let buffer = sample(image, options.downscale, options.quality)?;
    Ok(extract_palette_from_buffer(&buffer, options))
}

/// Extract a palette from an already sampled buffer.
///
/// Skips sampling; `options.downscale` and `options.quality` are ignored.
/// Options are used as given, without validation.
pub fn extract_palette_from_buffer(buffer: &PixelBuffer, options: &PaletteOptions) -> Palette {
    let histogram = ColorHistogram::build(buffer, &options.edge_columns);
    let background = select_background(&histogram.edge, histogram.height, options);
    let candidates = rank_candidates(&histogram.all, background.is_dark, options);
    let selection = select_foreground(&candidates, background.color.color, options);
    let [primary, secondary, detail] = selection.resolve(background.is_dark);

    let palette = Palette {
        background: background.color.color,
        primary,
        secondary,
        detail,
    };
    debug!(
        width = buffer.width(),
        height = buffer.height(),
        %palette,
        "extracted palette"
    );
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;
    use swatch_core::ImageRef;

    #[test]
    fn test_palette_accessors() {
        let palette = Palette {
            background: Color::BLACK,
            primary: Color::WHITE,
            secondary: Color::RED,
            detail: Color::CYAN,
        };
        assert_eq!(
            palette.colors(),
            [Color::BLACK, Color::WHITE, Color::RED, Color::CYAN]
        );
        assert!(palette.is_dark_background());
        assert_eq!(
            palette.to_string(),
            "background #000000 primary #ffffff secondary #ff0000 detail #00ffff"
        );
    }

    #[test]
    fn test_zero_area_source() {
        let image = ImageRef::new(0, 5, &[]).unwrap();
        assert!(matches!(
            extract_palette(&image, None),
            Err(ColorError::InvalidImage { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let image = PixelBuffer::filled(4, 4, Color::RED).unwrap();
        let options = PaletteOptions {
            min_saturation: 2.0,
            ..PaletteOptions::default()
        };
        assert!(matches!(
            extract_palette_with_options(&image, &options),
            Err(ColorError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_light_uniform_image_falls_back_to_black() {
        // Pale yellow stays light after the saturation floor
        let c = Color::rgb(250, 250, 180);
        let image = PixelBuffer::filled(30, 30, c).unwrap();
        let palette = extract_palette(&image, None).unwrap();
        assert_eq!(palette.background, c);
        assert_eq!(palette.primary, Color::BLACK);
        assert_eq!(palette.secondary, Color::BLACK);
        assert_eq!(palette.detail, Color::BLACK);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_types_are_send_sync() {
        assert_send_sync::<PixelBuffer>();
        assert_send_sync::<ImageRef<'static>>();
        assert_send_sync::<Palette>();
        assert_send_sync::<PaletteOptions>();
        assert_send_sync::<ColorError>();
    }
}
