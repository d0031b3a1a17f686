//! Background color selection
//!
//! Picks the background from the edge-band histogram:
//!
//! 1. Drop colors below the noise floor (`ceil(ratio * height)` pixels).
//! 2. Take the most frequent survivor.
//! 3. If it is black or white, prefer the most frequent survivor that is
//!    neither, provided it is common enough relative to the leader.
//!
//! An empty edge band is not an error: the background becomes black with a
//! count of 1 and [`BackgroundSource::Fallback`] records why.

use crate::colorspace::{is_black_or_white_with, is_dark_with};
use crate::histogram::CountedColors;
use crate::options::PaletteOptions;
use swatch_core::{Color, CountedColor};
use tracing::debug;

/// Where the chosen background came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundSource {
    /// Most frequent edge color
    EdgeSample,
    /// Less frequent edge color that replaced a black/white leader
    Alternative,
    /// No edge color survived the noise floor
    Fallback,
}

/// Result of background selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundChoice {
    /// Chosen color and its edge count
    pub color: CountedColor,
    /// How the color was chosen
    pub source: BackgroundSource,
    /// Whether the color's luminance is below the dark threshold
    pub is_dark: bool,
}

/// Color and count used when the edge band yields nothing
pub const FALLBACK_BACKGROUND: CountedColor = CountedColor::new(Color::BLACK, 1);

/// Minimum edge count for a color to be considered, for a buffer of
/// `height` rows.
pub fn noise_floor(height: u32, ratio: f32) -> u32 {
    (height as f64 * ratio as f64).ceil() as u32
}

/// Choose the background from edge-band counts.
///
/// # Arguments
///
/// * `edge` - Edge-band histogram
/// * `height` - Height of the sampled buffer, for the noise floor
/// * `options` - Thresholds
pub fn select_background(
    edge: &CountedColors,
    height: u32,
    options: &PaletteOptions,
) -> BackgroundChoice {
    let floor = noise_floor(height, options.noise_floor_ratio);
    let mut survivors = edge.sorted_ascending();
    survivors.retain(|e| e.count >= floor);

    let Some((&leader, rest)) = survivors.split_last() else {
        debug!(floor, "no edge color above noise floor; using fallback background");
        return finish(FALLBACK_BACKGROUND, BackgroundSource::Fallback, options);
    };

    if is_black_or_white_with(leader.color, options.black_white_tolerance) {
        let min_count = options.alternative_background_ratio as f64 * leader.count as f64;
        for alt in rest.iter().rev() {
            if alt.count as f64 <= min_count {
                break;
            }
            if !is_black_or_white_with(alt.color, options.black_white_tolerance) {
                return finish(*alt, BackgroundSource::Alternative, options);
            }
        }
    }

    finish(leader, BackgroundSource::EdgeSample, options)
}

fn finish(color: CountedColor, source: BackgroundSource, options: &PaletteOptions) -> BackgroundChoice {
    let is_dark = is_dark_with(color.color, options.dark_luminance_threshold);
    debug!(
        background = %color.color,
        count = color.count,
        ?source,
        is_dark,
        "selected background"
    );
    BackgroundChoice {
        color,
        source,
        is_dark,
    }
}
