//! Identity document field extraction.

mod parser;
pub mod rules;

pub use parser::FieldParser;

use crate::models::record::ExtractionRecord;

/// Trait for extractors that turn recognized text into structured
/// fields.
pub trait DocumentExtractor {
    /// Extract fields from already-recognized text.
    fn extract(&self, text: &str) -> ExtractionRecord;
}

/// Extract fields from recognized text with the default parser.
pub fn extract_fields(text: &str) -> ExtractionRecord {
    FieldParser::new().parse(text)
}
