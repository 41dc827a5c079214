//! Error types for the idex-core library.
//!
//! Field extraction itself is total and never fails; errors only occur
//! at the collaborator boundaries (OCR engine, image decoding, I/O).

use thiserror::Error;

/// Main error type for the idex library.
#[derive(Error, Debug)]
pub enum IdexError {
    /// OCR engine error from the recognition boundary.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by an OCR engine implementation.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine failed to initialize its model or worker.
    #[error("failed to initialize engine: {0}")]
    Init(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the idex library.
pub type Result<T> = std::result::Result<T, IdexError>;
