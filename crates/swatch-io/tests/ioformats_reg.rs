//! Image format regression test
//!
//! Encodes small images in memory with the png and jpeg-encoder crates,
//! decodes them through read_image_mem and checks the stored fixtures.

use swatch_core::Color;
use swatch_io::{
    ImageFormat, IoError, detect_format, detect_format_from_bytes, read_image, read_image_mem,
};
use swatch_test::{RegParams, test_data_path};

fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    out
}

fn encode_jpeg(width: u16, height: u16, color: jpeg_encoder::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    jpeg_encoder::Encoder::new(&mut out, 95)
        .encode(data, width, height, color)
        .unwrap();
    out
}

#[test]
fn ioformats_png_reg() {
    let mut rp = RegParams::new("ioformats_png");

    let rgba = [
        255, 0, 0, 255, //
        0, 255, 0, 128, //
        0, 0, 255, 0, //
        7, 8, 9, 255,
    ];
    let bytes = encode_png(2, 2, png::ColorType::Rgba, &rgba);
    rp.check(
        detect_format_from_bytes(&bytes).ok() == Some(ImageFormat::Png),
        "PNG detected",
    );
    let buffer = read_image_mem(&bytes).unwrap();
    rp.compare_colors(Color::RED, buffer.color(0, 0).unwrap());
    rp.compare_colors(Color::new(0, 255, 0, 128), buffer.color(1, 0).unwrap());
    rp.compare_colors(Color::new(0, 0, 255, 0), buffer.color(0, 1).unwrap());
    rp.compare_colors(Color::rgb(7, 8, 9), buffer.color(1, 1).unwrap());

    let gray = [0u8, 64, 128, 255];
    let bytes = encode_png(4, 1, png::ColorType::Grayscale, &gray);
    let buffer = read_image_mem(&bytes).unwrap();
    rp.compare_colors(Color::gray(64), buffer.color(1, 0).unwrap());
    rp.compare_colors(Color::WHITE, buffer.color(3, 0).unwrap());

    assert!(rp.cleanup());
}

#[test]
fn ioformats_jpeg_reg() {
    let mut rp = RegParams::new("ioformats_jpeg");

    // Flat colors survive lossy coding within a few levels
    let rgb: Vec<u8> = [200u8, 60, 20].repeat(32 * 32);
    let bytes = encode_jpeg(32, 32, jpeg_encoder::ColorType::Rgb, &rgb);
    rp.check(
        detect_format_from_bytes(&bytes).ok() == Some(ImageFormat::Jpeg),
        "JPEG detected",
    );
    let buffer = read_image_mem(&bytes).unwrap();
    rp.check(buffer.dimensions() == (32, 32), "JPEG dimensions");
    let c = buffer.color(16, 16).unwrap();
    rp.compare_values(200.0, c.r as f64, 4.0);
    rp.compare_values(60.0, c.g as f64, 4.0);
    rp.compare_values(20.0, c.b as f64, 4.0);
    rp.compare_values(255.0, c.a as f64, 0.0);

    let luma = vec![150u8; 16 * 8];
    let bytes = encode_jpeg(16, 8, jpeg_encoder::ColorType::Luma, &luma);
    let buffer = read_image_mem(&bytes).unwrap();
    let c = buffer.color(3, 3).unwrap();
    rp.check(c.r == c.g && c.g == c.b, "grayscale JPEG is neutral");
    rp.compare_values(150.0, c.r as f64, 2.0);

    assert!(rp.cleanup());
}

#[test]
fn ioformats_files_reg() {
    let mut rp = RegParams::new("ioformats_files");

    let path = test_data_path("bands.ppm");
    rp.check(
        detect_format(&path).ok() == Some(ImageFormat::Pnm),
        "bands.ppm detected as PNM",
    );
    let buffer = read_image(&path).unwrap();
    rp.check(buffer.dimensions() == (20, 10), "bands.ppm is 20x10");
    rp.compare_colors(Color::rgb(20, 10, 5), buffer.color(9, 9).unwrap());
    rp.compare_colors(Color::rgb(230, 240, 200), buffer.color(10, 0).unwrap());

    let buffer = read_image(test_data_path("gray_halves.pgm")).unwrap();
    rp.compare_colors(Color::gray(40), buffer.color(15, 5).unwrap());
    rp.compare_colors(Color::gray(200), buffer.color(0, 6).unwrap());

    rp.check(
        matches!(read_image(test_data_path("missing.png")), Err(IoError::Io(_))),
        "missing file is an I/O error",
    );
    rp.check(
        matches!(
            read_image_mem(b"GIF89a\x01\x00\x01\x00\x00\x00"),
            Err(IoError::UnsupportedFormat(_))
        ),
        "GIF is detected but not decoded",
    );

    assert!(rp.cleanup());
}
