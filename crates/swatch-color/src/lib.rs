//! swatch-color - Dominant-color palette extraction
//!
//! This crate reduces an image to four colors suitable for theming:
//!
//! - **Color space helpers** ([`colorspace`]): RGB <-> HSV, luminance, contrast ratio
//! - **Histograms** ([`histogram`]): edge-band and whole-image color counts
//! - **Background selection** ([`background`]): dominant edge color with black/white avoidance
//! - **Foreground ranking** ([`foreground`]): contrasting, mutually distinct accent colors
//! - **Palette** ([`palette`]): the [`extract_palette`] entry point
//!
//! Tunable thresholds live in [`options`].

pub mod background;
pub mod colorspace;
mod error;
pub mod foreground;
pub mod histogram;
pub mod options;
pub mod palette;

// Re-export core types
pub use swatch_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space functions
pub use colorspace::{
    // Types
    Hsv,
    // Functions
    contrast_ratio,
    hsv_to_rgb,
    is_black_or_white,
    is_dark,
    is_near_grey,
    luminance,
    rgb_to_hsv,
    with_min_saturation,
};

// Re-export histogram types
pub use histogram::{ColorHistogram, CountedColors};

// Re-export selection stages
pub use background::{BackgroundChoice, BackgroundSource, select_background};
pub use foreground::{
    ForegroundSelection, is_contrasting, is_distinct, rank_candidates, select_foreground,
};

// Re-export options and constants
pub use options::{
    ALTERNATIVE_BACKGROUND_RATIO, BLACK_WHITE_TOLERANCE, CONTRAST_THRESHOLD,
    DARK_LUMINANCE_THRESHOLD, DISTINCT_THRESHOLD, EDGE_BAND_END, EDGE_BAND_START,
    GREY_TOLERANCE, MIN_SATURATION, NOISE_FLOOR_RATIO, PaletteOptions,
};

// Re-export palette extraction
pub use palette::{
    Palette, extract_palette, extract_palette_from_buffer, extract_palette_with_options,
};

// Re-export sampling types callers need to drive extraction
pub use swatch_transform::{Rasterize, ScaleQuality, TargetSize};
