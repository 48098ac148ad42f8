// THEORY:
// The image loader is the bridge between a file on disk and the flat pixel
// sequence the rest of the sorter works on. Decoding is delegated entirely to the
// `image` crate; this module only turns a path into flat pixels.
//
// Every decoded image is normalized with `to_rgb8()`: grayscale and 16-bit inputs
// are widened or narrowed to 8-bit RGB, and alpha is dropped without compositing.
// Pixels come out in row-major order and are fully materialized in memory.

use crate::core_modules::pixel::pixel::Pixel;
use crate::error::{ColorSortError, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;
use tracing::{debug, instrument};

/// Opens and decodes `path`, returning its pixels in row-major order.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_pixels(path: &Path) -> Result<Vec<Pixel>> {
    let image = open_image(path)?;
    debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );
    Ok(pixels_from_image(&image))
}

/// Decodes `path` into a `DynamicImage`. The format is sniffed from the file
/// contents, so a mislabeled extension still decodes.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| ColorSortError::image_open(path, image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| ColorSortError::image_open(path, image::ImageError::IoError(e)))?;

    reader
        .decode()
        .map_err(|e| ColorSortError::image_open(path, e))
}

/// Flattens an already decoded image into RGB pixels, discarding alpha.
pub fn pixels_from_image(image: &DynamicImage) -> Vec<Pixel> {
    image.to_rgb8().pixels().map(|rgb| Pixel::from(*rgb)).collect()
}
