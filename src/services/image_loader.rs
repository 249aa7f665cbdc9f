//! Image decoding into a distinct-color histogram.

use color_match::ColorHistogram;
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

use crate::error::ImageLoadError;

/// File extensions accepted for on-disk images (lower-case, without dot)
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// A decoded image, reduced to its pixel multiset
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: ColorHistogram,
}

/// Reject paths whose extension is not a supported image type.
pub fn check_extension(path: &Path) -> Result<(), ImageLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ImageLoadError::UnsupportedExtension { extension })
    }
}

/// Load and decode an image file.
///
/// The extension is checked before touching the filesystem; decoding itself
/// goes by file content.
pub fn load_path(path: &Path) -> Result<LoadedImage, ImageLoadError> {
    check_extension(path)?;
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), size_bytes = bytes.len(), "Read image file");
    load_bytes(&bytes)
}

/// Decode an in-memory image of any format the `image` crate recognises.
///
/// Pixels are converted to 8-bit RGB; an alpha channel, if present, is
/// dropped without compositing.
pub fn load_bytes(bytes: &[u8]) -> Result<LoadedImage, ImageLoadError> {
    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = ColorHistogram::from_rgb_bytes(rgb.as_raw());

    tracing::debug!(
        width,
        height,
        distinct_colors = pixels.distinct_colors(),
        "Decoded image"
    );

    Ok(LoadedImage {
        width,
        height,
        pixels,
    })
}
