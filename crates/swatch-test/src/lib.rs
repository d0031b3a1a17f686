//! swatch-test - Regression test framework for swatch
//!
//! Regression tests follow one pattern: create a [`RegParams`], run a
//! sequence of numbered comparisons, and assert on [`RegParams::cleanup`].
//! Failures are collected and reported together instead of stopping at the
//! first mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use swatch_test::RegParams;
//!
//! let mut rp = RegParams::new("palette");
//! rp.compare_colors(Color::WHITE, palette.primary);
//! assert!(rp.cleanup());
//! ```
//!
//! Synthetic inputs come from the builders in this crate; stored inputs
//! live under `tests/data/images` at the workspace root.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use swatch_core::{Color, PixelBuffer};

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "bands.ppm")
pub fn load_test_image(name: &str) -> TestResult<PixelBuffer> {
    let path = test_data_path(name);
    swatch_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // swatch-test is at crates/swatch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Build a `width` x `height` image of a single color.
pub fn solid_image(width: u32, height: u32, color: Color) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::filled(width, height, color)?)
}

/// Build an image of vertical bands laid out left to right.
///
/// Each entry is `(color, band width)`; the image width is their sum.
pub fn column_bands(height: u32, bands: &[(Color, u32)]) -> TestResult<PixelBuffer> {
    let width = bands.iter().map(|&(_, w)| w).sum();
    let mut pm = PixelBuffer::new(width, height)?.to_mut();
    let mut x = 0;
    for &(color, w) in bands {
        pm.fill_rect(x, 0, x + w, height, color);
        x += w;
    }
    Ok(pm.into())
}

/// Build an image of horizontal bands laid out top to bottom.
///
/// Each entry is `(color, band height)`; the image height is their sum.
pub fn row_bands(width: u32, bands: &[(Color, u32)]) -> TestResult<PixelBuffer> {
    let height = bands.iter().map(|&(_, h)| h).sum();
    let mut pm = PixelBuffer::new(width, height)?.to_mut();
    let mut y = 0;
    for &(color, h) in bands {
        pm.fill_rect(0, y, width, y + h, color);
        y += h;
    }
    Ok(pm.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_bands() {
        let img = column_bands(3, &[(Color::RED, 2), (Color::BLUE, 5)]).unwrap();
        assert_eq!(img.dimensions(), (7, 3));
        assert_eq!(img.color(1, 2), Some(Color::RED));
        assert_eq!(img.color(2, 0), Some(Color::BLUE));
        assert_eq!(img.color(6, 2), Some(Color::BLUE));
    }

    #[test]
    fn test_row_bands() {
        let img = row_bands(4, &[(Color::WHITE, 1), (Color::BLACK, 2)]).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.color(3, 0), Some(Color::WHITE));
        assert_eq!(img.color(0, 1), Some(Color::BLACK));
        assert_eq!(img.color(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_empty_bands_rejected() {
        assert!(matches!(
            column_bands(3, &[]),
            Err(TestError::Build(_))
        ));
        assert!(solid_image(0, 1, Color::RED).is_err());
    }

    #[test]
    fn test_data_path_layout() {
        assert!(test_data_path("x.png").ends_with("/tests/data/images/x.png"));
    }

    #[test]
    fn test_missing_image_reports_path() {
        let err = load_test_image("no_such_image.ppm").unwrap_err();
        match err {
            TestError::ImageLoad { path, message } => {
                assert!(path.ends_with("no_such_image.ppm"));
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
