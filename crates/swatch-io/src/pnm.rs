//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) with a maxval of at most 255.
//! Samples below a maxval of 255 are rescaled to the full 0-255 range.
//! ASCII variants (P1/P2/P3), PBM (P4) and 16-bit samples are rejected.

use crate::{IoError, IoResult};
use std::io::Read;
use swatch_core::PixelBuffer;

/// Parsed PNM header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PnmHeader {
    channels: usize,
    width: u32,
    height: u32,
    maxval: u32,
}

/// Read a binary PNM image (P5/P6) from a reader.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;
    read_pnm_mem(&data)
}

/// Read a binary PNM image (P5/P6) from bytes.
pub fn read_pnm_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let (header, offset) = parse_header(data)?;
    let overflow = || IoError::InvalidData("PNM dimensions overflow".to_string());
    let count = (header.width as usize)
        .checked_mul(header.height as usize)
        .ok_or_else(overflow)?;
    let needed = count.checked_mul(header.channels).ok_or_else(overflow)?;
    let end = offset.checked_add(needed).ok_or_else(overflow)?;
    let raster = data.get(offset..end).ok_or_else(|| {
        IoError::InvalidData(format!(
            "PNM raster truncated: need {} bytes, have {}",
            needed,
            data.len().saturating_sub(offset)
        ))
    })?;

    let scale = |v: u8| -> u8 {
        if header.maxval == 255 {
            v
        } else {
            ((v.min(header.maxval as u8) as u32 * 255 + header.maxval / 2) / header.maxval) as u8
        }
    };

    let mut rgba = Vec::with_capacity(count * 4);
    if header.channels == 1 {
        for &g in raster {
            let g = scale(g);
            rgba.extend_from_slice(&[g, g, g, 255]);
        }
    } else {
        for px in raster.chunks_exact(3) {
            rgba.extend_from_slice(&[scale(px[0]), scale(px[1]), scale(px[2]), 255]);
        }
    }

    Ok(PixelBuffer::from_rgba_bytes(header.width, header.height, &rgba)?)
}

/// Parse the header; returns it with the offset of the first raster byte.
fn parse_header(data: &[u8]) -> IoResult<(PnmHeader, usize)> {
    let channels = match data.get(..2) {
        Some(b"P5") => 1,
        Some(b"P6") => 3,
        Some([b'P', d]) if (b'1'..=b'4').contains(d) => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant P{} is not supported",
                *d as char
            )));
        }
        _ => return Err(IoError::InvalidData("not a PNM header".to_string())),
    };

    let mut pos = 2;
    let width = next_number(data, &mut pos)?;
    let height = next_number(data, &mut pos)?;
    let maxval = next_number(data, &mut pos)?;

    // Exactly one whitespace byte separates the header from the raster
    match data.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        _ => return Err(IoError::InvalidData("PNM header not terminated".to_string())),
    }

    if maxval == 0 {
        return Err(IoError::InvalidData("PNM maxval is 0".to_string()));
    }
    if maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "16-bit PNM (maxval {}) is not supported",
            maxval
        )));
    }

    Ok((
        PnmHeader {
            channels,
            width,
            height,
            maxval,
        },
        pos,
    ))
}

/// Skip whitespace and `#` comments, then read one decimal field.
fn next_number(data: &[u8], pos: &mut usize) -> IoResult<u32> {
    loop {
        match data.get(*pos) {
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(b'#') => {
                while let Some(&b) = data.get(*pos) {
                    *pos += 1;
                    if b == b'\n' || b == b'\r' {
                        break;
                    }
                }
            }
            _ => break,
        }
    }

    let start = *pos;
    while data.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    if start == *pos {
        return Err(IoError::InvalidData(format!(
            "expected a number in PNM header at byte {}",
            start
        )));
    }

    std::str::from_utf8(&data[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| IoError::InvalidData("PNM header field out of range".to_string()))
}
