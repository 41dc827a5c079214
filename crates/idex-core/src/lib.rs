//! Core library for identity document OCR field extraction.
//!
//! This crate provides:
//! - Heuristic field extraction from recognized text: ID number, name,
//!   address, gender, country
//! - Per-country ID-number patterns with OCR-confusion corrections
//! - Fuzzy country fallback when no pattern matches
//! - The OCR-engine boundary and the preprocessed/raw retry pipeline

pub mod error;
pub mod identity;
pub mod models;
pub mod ocr;
pub mod scan;

pub use error::{IdexError, OcrError, Result};
pub use identity::{DocumentExtractor, FieldParser, extract_fields};
pub use models::config::IdexConfig;
pub use models::record::{Country, ExtractionRecord, IdMatch};
pub use ocr::{ImagePreprocessor, OcrEngine};
pub use scan::Scanner;
