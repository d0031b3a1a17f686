//! Color space helpers
//!
//! Provides the per-color measurements the extractor relies on:
//! - RGB <-> HSV (HSB) conversion
//! - Luminance, darkness and black/white/grey classification
//! - Saturation flooring
//!
//! Luminance uses the Rec. 709 weights on the gamma-encoded channel values
//! directly, without linearizing first.

use crate::options::{BLACK_WHITE_TOLERANCE, DARK_LUMINANCE_THRESHOLD, GREY_TOLERANCE};
use swatch_core::Color;

/// HSV color representation
///
/// - `h`: Hue in range [0.0, 1.0) (where 1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value (brightness) in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB values to HSV
///
/// Returns HSV with all components in range [0.0, 1.0]. Achromatic colors
/// get hue 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };
    if delta == 0.0 {
        return Hsv::new(0.0, s, v);
    }

    let sector = if r >= g && r >= b {
        ((gf - bf) / delta).rem_euclid(6.0)
    } else if g >= b {
        2.0 + (bf - rf) / delta
    } else {
        4.0 + (rf - gf) / delta
    };
    let h = (sector / 6.0).rem_euclid(1.0);
    Hsv::new(h, s, v)
}

/// Convert HSV values to RGB
///
/// Input HSV should have all components in range [0.0, 1.0]; out-of-range
/// saturation and value are clamped, hue wraps.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);
    if s == 0.0 {
        let c = to_byte(v);
        return (c, c, c);
    }

    let h6 = hsv.h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (to_byte(r), to_byte(g), to_byte(b))
}

#[inline]
fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Luminance of a color: `0.2126 R + 0.7152 G + 0.0722 B` on [0, 1] channels.
#[inline]
pub fn luminance(color: Color) -> f32 {
    let [r, g, b] = color.normalized();
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Check whether luminance falls below `threshold`.
#[inline]
pub fn is_dark_with(color: Color, threshold: f32) -> bool {
    luminance(color) < threshold
}

/// Check whether luminance falls below 0.5.
#[inline]
pub fn is_dark(color: Color) -> bool {
    is_dark_with(color, DARK_LUMINANCE_THRESHOLD)
}

/// Check whether every channel is within `tolerance` of 0, or every
/// channel within `tolerance` of 1.
pub fn is_black_or_white_with(color: Color, tolerance: f32) -> bool {
    let [r, g, b] = color.normalized();
    let white = 1.0 - tolerance;
    (r < tolerance && g < tolerance && b < tolerance) || (r > white && g > white && b > white)
}

/// Black/white check with the default 0.09 tolerance.
pub fn is_black_or_white(color: Color) -> bool {
    is_black_or_white_with(color, BLACK_WHITE_TOLERANCE)
}

/// Check whether the largest pairwise channel difference is below `tolerance`.
pub fn is_near_grey_with(color: Color, tolerance: f32) -> bool {
    let [r, g, b] = color.normalized();
    let spread = r.max(g).max(b) - r.min(g).min(b);
    spread < tolerance
}

/// Grey check with the default 0.03 tolerance.
pub fn is_near_grey(color: Color) -> bool {
    is_near_grey_with(color, GREY_TOLERANCE)
}

/// Raise HSB saturation to at least `min_saturation`, keeping hue,
/// brightness and alpha.
///
/// Colors already at or above the floor are returned unchanged.
pub fn with_min_saturation(color: Color, min_saturation: f32) -> Color {
    let hsv = rgb_to_hsv(color.r, color.g, color.b);
    if hsv.s >= min_saturation {
        return color;
    }
    let (r, g, b) = hsv_to_rgb(Hsv::new(hsv.h, min_saturation, hsv.v));
    Color::new(r, g, b, color.a)
}

/// Contrast ratio `(Lmax + 0.05) / (Lmin + 0.05)`, always >= 1.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}
