//! Image loading.

use crate::{ImageEffectError, ImageEffectResult};
use image::{ImageReader, RgbImage};
use std::path::Path;

/// Decodes `path` into an RGB buffer. Alpha, palette and grayscale inputs
/// are converted; the decoder picks the format from the file contents.
pub fn load_image(path: impl AsRef<Path>) -> ImageEffectResult<RgbImage> {
    let path = path.as_ref();

    let decoded = ImageReader::open(path)
        .map_err(|e| ImageEffectError::Load {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .with_guessed_format()
        .map_err(|e| ImageEffectError::Load {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| ImageEffectError::Load {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.to_rgb8())
}
