//! Test fixtures and constants.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Hex strings for the fixture palette
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    /// 8.66 away from RED
    pub const NEAR_RED: &str = "#FA0505";
    /// Absent from the fixture image
    pub const MAGENTA: &str = "#FF00FF";
}

/// 10×10 image: rows 0-5 red, 6-7 green, 8 near-red, 9 blue.
///
/// Exact counts: red 60, green 20, near-red 10, blue 10.
pub fn palette_image() -> RgbImage {
    RgbImage::from_fn(10, 10, |_, y| match y {
        0..=5 => Rgb([255, 0, 0]),
        6..=7 => Rgb([0, 255, 0]),
        8 => Rgb([250, 5, 5]),
        _ => Rgb([0, 0, 255]),
    })
}

pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut buf, format)
        .expect("Failed to encode fixture image");
    buf.into_inner()
}

pub fn palette_png() -> Vec<u8> {
    encode(&palette_image(), ImageFormat::Png)
}

pub fn palette_bmp() -> Vec<u8> {
    encode(&palette_image(), ImageFormat::Bmp)
}

/// Build request headers for the analysis endpoints
pub fn analysis_headers<'a>(
    colors: &'a str,
    sensitivity: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    let mut headers = vec![("Colors", colors)];
    if let Some(s) = sensitivity {
        headers.push(("Sensitivity", s));
    }
    headers
}
