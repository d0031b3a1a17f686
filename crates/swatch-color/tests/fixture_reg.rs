//! Palette regression test on stored images
//!
//! Decodes the PNM fixtures under tests/data/images and checks their
//! palettes and the color space helpers applied to them.

use swatch_color::{contrast_ratio, extract_palette, is_black_or_white, rgb_to_hsv};
use swatch_core::Color;
use swatch_test::{RegParams, load_test_image};

#[test]
fn fixture_bands_reg() {
    let mut rp = RegParams::new("fixture_bands");

    let image = load_test_image("bands.ppm").expect("load bands.ppm");
    rp.check(image.dimensions() == (20, 10), "bands.ppm is 20x10");

    // Columns 0-9 near-black, 10-19 pale green. The edge band sees 50
    // near-black pixels against 10 pale ones, below the 30% ratio.
    let near_black = Color::rgb(20, 10, 5);
    let pale = Color::rgb(230, 240, 200);
    rp.check(is_black_or_white(near_black), "rgb(20,10,5) counts as black");

    let palette = extract_palette(&image, None).unwrap();
    rp.compare_palettes(
        &[near_black, pale, Color::WHITE, Color::WHITE],
        &palette.colors(),
    );
    rp.compare_values(
        10.1,
        contrast_ratio(palette.primary, palette.background) as f64,
        0.1,
    );

    assert!(rp.cleanup());
}

#[test]
fn fixture_gray_halves_reg() {
    let mut rp = RegParams::new("fixture_gray_halves");

    let image = load_test_image("gray_halves.pgm").expect("load gray_halves.pgm");
    rp.check(image.dimensions() == (16, 12), "gray_halves.pgm is 16x12");

    // Both grays tie in the edge band; the later one wins. The dark gray
    // is floored to 15% saturation before it becomes primary.
    let palette = extract_palette(&image, None).unwrap();
    rp.compare_palettes(
        &[
            Color::gray(200),
            Color::rgb(40, 34, 34),
            Color::BLACK,
            Color::BLACK,
        ],
        &palette.colors(),
    );
    let hsv = rgb_to_hsv(palette.primary.r, palette.primary.g, palette.primary.b);
    rp.compare_values(0.15, hsv.s as f64, 0.01);

    assert!(rp.cleanup());
}

#[test]
fn fixture_missing_reg() {
    let mut rp = RegParams::new("fixture_missing");
    rp.check(
        load_test_image("does_not_exist.png").is_err(),
        "missing fixture is an error",
    );
    assert!(rp.cleanup());
}
