//! Color predicate regression test
//!
//! Tests is_contrasting, is_distinct, luminance, contrast_ratio and the
//! saturation floor on fixed colors.

use swatch_color::{
    contrast_ratio, is_contrasting, is_dark, is_distinct, is_near_grey, luminance,
    with_min_saturation,
};
use swatch_core::Color;
use swatch_test::RegParams;

#[test]
fn predicates_reg() {
    let mut rp = RegParams::new("predicates");

    // Contrast
    rp.check(is_contrasting(Color::WHITE, Color::BLACK), "white/black contrast");
    rp.check(!is_contrasting(Color::WHITE, Color::WHITE), "white/white do not");
    rp.compare_values(21.0, contrast_ratio(Color::WHITE, Color::BLACK) as f64, 1e-3);
    // 1.6 is exclusive: gray(120) vs gray(180) is about 1.6
    let ratio = contrast_ratio(Color::gray(120), Color::gray(180)) as f64;
    rp.check(
        (ratio > 1.6) == is_contrasting(Color::gray(120), Color::gray(180)),
        "threshold matches the ratio",
    );

    // Distinctness
    rp.check(!is_distinct(Color::RED, Color::RED), "red is not distinct from itself");
    rp.check(is_distinct(Color::RED, Color::CYAN), "red and cyan are distinct");
    let grey3 = Color::from_normalized(0.3, 0.3, 0.3);
    let grey7 = Color::from_normalized(0.7, 0.7, 0.7);
    rp.check(is_near_grey(grey3) && is_near_grey(grey7), "both greys are near grey");
    rp.check(!is_distinct(grey3, grey7), "two greys are never distinct");

    // Luminance uses the gamma-encoded channels directly
    rp.compare_values(0.7152, luminance(Color::GREEN) as f64, 1e-4);
    rp.compare_values(0.0722, luminance(Color::BLUE) as f64, 1e-4);
    rp.check(!is_dark(Color::rgb(128, 128, 128)), "mid gray is light");
    rp.check(is_dark(Color::rgb(126, 126, 126)), "just below mid gray is dark");

    // Saturation floor
    rp.compare_colors(Color::RED, with_min_saturation(Color::RED, 0.15));
    rp.compare_colors(Color::rgb(245, 208, 208), with_min_saturation(Color::gray(245), 0.15));

    assert!(rp.cleanup());
}
