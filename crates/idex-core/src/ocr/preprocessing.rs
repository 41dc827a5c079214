//! Image cleanup ahead of recognition.

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::models::config::PreprocessConfig;

/// Center-weighted 3x3 sharpen kernel, applied after denoising.
const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Denoise/sharpen/contrast pass applied before the first recognition
/// attempt.
///
/// Thin wrappers over the `image` crate.
pub struct ImagePreprocessor {
    blur_sigma: f32,
    sharpen: bool,
    contrast: f32,
    brighten: i32,
}

impl ImagePreprocessor {
    /// Create a preprocessor with default settings.
    pub fn new() -> Self {
        Self {
            blur_sigma: 1.1,
            sharpen: true,
            contrast: 50.0,
            brighten: 15,
        }
    }

    /// Build a preprocessor from the preprocess section of the
    /// configuration.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            blur_sigma: config.blur_sigma,
            sharpen: config.sharpen,
            contrast: config.contrast,
            brighten: config.brighten,
        }
    }

    /// Set the Gaussian blur sigma.
    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = sigma;
        self
    }

    /// Run the full cleanup pass.
    pub fn process(&self, image: &DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        debug!(width, height, "preprocessing image");

        let mut out = image.blur(self.blur_sigma);
        if self.sharpen {
            out = out.filter3x3(&SHARPEN_KERNEL);
        }
        out.adjust_contrast(self.contrast).brighten(self.brighten)
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_keeps_dimensions() {
        let image = DynamicImage::new_rgba8(32, 16);
        let out = ImagePreprocessor::new().process(&image);
        assert_eq!(out.dimensions(), (32, 16));
    }

    #[test]
    fn test_from_config_round_trip() {
        let config = PreprocessConfig {
            blur_sigma: 0.5,
            sharpen: false,
            contrast: 0.0,
            brighten: 0,
        };
        let image = DynamicImage::new_rgba8(8, 8);
        let out = ImagePreprocessor::from_config(&config).process(&image);
        assert_eq!(out.dimensions(), (8, 8));
    }
}
