//! swatch-io - Image decoding for palette extraction
//!
//! Decodes image files into RGBA [`PixelBuffer`]s:
//!
//! - **PNG** (`png-format` feature): every color type and bit depth
//! - **JPEG** (`jpeg` feature): grayscale, RGB and CMYK
//! - **PNM** (`pnm` feature): binary PGM (P5) and PPM (P6)
//!
//! Formats are detected from magic numbers, never from file extensions.
//!
//! # Usage
//!
//! ```no_run
//! let buffer = swatch_io::read_image("cover.png").unwrap();
//! println!("{}x{}", buffer.width(), buffer.height());
//! ```

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use std::fs;
use std::path::Path;
use swatch_core::PixelBuffer;
use tracing::debug;

/// Read an image file, detecting its format from the content.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read,
/// [`IoError::UnsupportedFormat`] for unknown or disabled formats, and
/// [`IoError::DecodeError`] / [`IoError::InvalidData`] for corrupt data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(IoError::Io)?;
    debug!(path = %path.display(), bytes = data.len(), "reading image file");
    read_image_mem(&data)
}

/// Decode an in-memory image, detecting its format from the content.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    let buffer = read_image_format(data, format)?;
    debug!(
        ?format,
        width = buffer.width(),
        height = buffer.height(),
        "decoded image"
    );
    Ok(buffer)
}

/// Decode an in-memory image of a known format.
pub fn read_image_format(data: &[u8], format: ImageFormat) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(std::io::Cursor::new(data)),

        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data),

        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm_mem(data),

        _ => Err(IoError::UnsupportedFormat(format!("{:?}", format))),
    }
}
