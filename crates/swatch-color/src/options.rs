//! Tunable parameters for palette extraction
//!
//! Every threshold the extractor uses is a named constant here and a field
//! of [`PaletteOptions`]. The defaults are empirical and load-bearing;
//! changing them changes which colors real images produce.

use crate::{ColorError, ColorResult};
use std::ops::RangeInclusive;
use swatch_transform::{ScaleQuality, TargetSize};

/// First column of the background sampling band
pub const EDGE_BAND_START: u32 = 5;
/// Last column (inclusive) of the background sampling band
pub const EDGE_BAND_END: u32 = 10;
/// Edge colors seen on fewer than this fraction of rows are noise
pub const NOISE_FLOOR_RATIO: f32 = 0.01;
/// An alternative background must reach this fraction of the top count
pub const ALTERNATIVE_BACKGROUND_RATIO: f32 = 0.3;
/// Foreground candidates are saturated to at least this HSB saturation
pub const MIN_SATURATION: f32 = 0.15;
/// Contrast ratio a foreground color must exceed against the background
pub const CONTRAST_THRESHOLD: f32 = 1.6;
/// Per-channel difference above which two colors are distinct
pub const DISTINCT_THRESHOLD: f32 = 0.25;
/// Max channel spread for a color to count as grey
pub const GREY_TOLERANCE: f32 = 0.03;
/// Channel distance from 0 or 1 for a color to count as black or white
pub const BLACK_WHITE_TOLERANCE: f32 = 0.09;
/// Luminance below which a color is dark
pub const DARK_LUMINANCE_THRESHOLD: f32 = 0.5;

/// Options for palette extraction
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteOptions {
    /// Explicit sampling size; overrides `quality` when set
    pub downscale: Option<TargetSize>,
    /// Sampling preset used when `downscale` is `None`
    pub quality: ScaleQuality,
    /// Columns whose pixels are background candidates
    pub edge_columns: RangeInclusive<u32>,
    /// Noise floor as a fraction of buffer height
    pub noise_floor_ratio: f32,
    /// Minimum count ratio for replacing a black/white background
    pub alternative_background_ratio: f32,
    /// Saturation floor applied to foreground candidates
    pub min_saturation: f32,
    /// Contrast ratio threshold (exclusive)
    pub contrast_threshold: f32,
    /// Distinctness threshold on normalized channels (exclusive)
    pub distinct_threshold: f32,
    /// Grey detection tolerance on normalized channels
    pub grey_tolerance: f32,
    /// Black/white detection tolerance on normalized channels
    pub black_white_tolerance: f32,
    /// Luminance threshold separating dark from light
    pub dark_luminance_threshold: f32,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            downscale: None,
            quality: ScaleQuality::default(),
            edge_columns: EDGE_BAND_START..=EDGE_BAND_END,
            noise_floor_ratio: NOISE_FLOOR_RATIO,
            alternative_background_ratio: ALTERNATIVE_BACKGROUND_RATIO,
            min_saturation: MIN_SATURATION,
            contrast_threshold: CONTRAST_THRESHOLD,
            distinct_threshold: DISTINCT_THRESHOLD,
            grey_tolerance: GREY_TOLERANCE,
            black_white_tolerance: BLACK_WHITE_TOLERANCE,
            dark_luminance_threshold: DARK_LUMINANCE_THRESHOLD,
        }
    }
}

impl PaletteOptions {
    /// Default options with an explicit sampling size.
    pub fn with_downscale(downscale: Option<TargetSize>) -> Self {
        Self {
            downscale,
            ..Self::default()
        }
    }

    /// Check that every ratio lies in its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] naming the first bad field.
    pub fn validate(&self) -> ColorResult<()> {
        if self.edge_columns.start() > self.edge_columns.end() {
            return Err(ColorError::InvalidParameters(format!(
                "edge_columns {}..={} is empty",
                self.edge_columns.start(),
                self.edge_columns.end()
            )));
        }
        let unit = [
            ("noise_floor_ratio", self.noise_floor_ratio),
            ("alternative_background_ratio", self.alternative_background_ratio),
            ("min_saturation", self.min_saturation),
            ("distinct_threshold", self.distinct_threshold),
            ("grey_tolerance", self.grey_tolerance),
            ("black_white_tolerance", self.black_white_tolerance),
            ("dark_luminance_threshold", self.dark_luminance_threshold),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::InvalidParameters(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if !self.contrast_threshold.is_finite() || self.contrast_threshold < 1.0 {
            return Err(ColorError::InvalidParameters(format!(
                "contrast_threshold must be >= 1, got {}",
                self.contrast_threshold
            )));
        }
        Ok(())
    }
}
