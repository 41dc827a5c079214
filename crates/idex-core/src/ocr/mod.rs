//! OCR engine boundary.
//!
//! Recognition itself is an external collaborator: this crate only
//! defines the contract it is consumed through. Implementations wrap
//! whatever engine the application links (Tesseract, PaddleOCR, a
//! remote service) and yield plain recognized text.

mod preprocessing;

pub use preprocessing::ImagePreprocessor;

use image::DynamicImage;

use crate::error::OcrError;

/// A text recognition engine.
///
/// An engine may be called several times per document on different
/// variants of the same source image; the retry strategy belongs to the
/// caller (see [`crate::scan::Scanner`]), not to the engine.
pub trait OcrEngine {
    /// Recognize text in the image, one detected line per `\n`, in
    /// top-to-bottom reading order.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}
