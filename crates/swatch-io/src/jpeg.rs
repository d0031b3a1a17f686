//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale (8 and
//! 16 bit), RGB and CMYK streams are all converted to opaque RGBA.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;
use swatch_core::PixelBuffer;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let count = width as usize * height as usize;
    let expected = count * info.pixel_format.pixel_bytes();
    if pixels.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG produced {} bytes, expected {}",
            pixels.len(),
            expected
        )));
    }

    let mut rgba = Vec::with_capacity(count * 4);
    match info.pixel_format {
        PixelFormat::L8 => {
            for &g in &pixels[..expected] {
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        PixelFormat::L16 => {
            // Big-endian samples; keep the high byte
            for px in pixels[..expected].chunks_exact(2) {
                let g = px[0];
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        PixelFormat::RGB24 => {
            for px in pixels[..expected].chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        PixelFormat::CMYK32 => {
            for px in pixels[..expected].chunks_exact(4) {
                let (r, g, b) = cmyk_to_rgb(px[0], px[1], px[2], px[3]);
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
        }
    }

    Ok(PixelBuffer::from_rgba_bytes(width, height, &rgba)?)
}

/// Naive CMYK to RGB: `R = 255 * (1 - C) * (1 - K)` per channel.
fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> (u8, u8, u8) {
    let k = 255 - k as u32;
    let channel = |v: u8| (((255 - v as u32) * k + 127) / 255) as u8;
    (channel(c), channel(m), channel(y))
}
