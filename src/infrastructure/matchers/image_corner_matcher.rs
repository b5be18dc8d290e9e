//! Image corner matcher implementation
//!
//! Decodes images with the `image` crate and samples their corners.

use crate::domain::entities::{Corners, RgbColor};
use crate::domain::services::{CornerCheckError, CornerMatcher};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// Corner matcher backed by the `image` crate
///
/// The format is guessed from the file contents first, so a PNG saved
/// with a `.jpg` extension still decodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCornerMatcher;

impl ImageCornerMatcher {
    pub fn new() -> Self {
        Self
    }

    fn decode(path: &Path) -> Result<DynamicImage, CornerCheckError> {
        ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| CornerCheckError::Decode(e.to_string()))
    }
}

impl CornerMatcher for ImageCornerMatcher {
    fn sample_corners(&self, path: &Path) -> Result<Corners, CornerCheckError> {
        let img = Self::decode(path)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(CornerCheckError::EmptyImage { width, height });
        }

        // Grayscale expands to r = g = b, alpha is dropped
        let pixel = |x: u32, y: u32| {
            let [r, g, b, _] = img.get_pixel(x, y).0;
            RgbColor::new(r, g, b)
        };

        Ok(Corners {
            top_left: pixel(0, 0),
            bottom_left: pixel(0, height - 1),
            top_right: pixel(width - 1, 0),
            bottom_right: pixel(width - 1, height - 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ColorSpec;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_alpha_channel_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transparent.png");
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]))
            .save(&path)
            .unwrap();

        let spec = ColorSpec::default();
        assert!(ImageCornerMatcher::new().matches(&path, &spec));
    }

    #[test]
    fn test_grayscale_expands_to_rgb() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(3, 3, Luma([200])).save(&path).unwrap();

        let corners = ImageCornerMatcher::new().sample_corners(&path).unwrap();
        assert_eq!(corners, Corners::uniform(RgbColor::new(200, 200, 200)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = ImageCornerMatcher::new().sample_corners(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(CornerCheckError::Io(_))));
    }
}
