//! Recognition pipeline with the raw-image retry.

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::identity::FieldParser;
use crate::models::config::IdexConfig;
use crate::models::record::ExtractionRecord;
use crate::ocr::{ImagePreprocessor, OcrEngine};

/// Drives an [`OcrEngine`] over a document photo and extracts fields.
///
/// The preprocessed image goes first; when that pass yields no ID
/// number the raw image is tried once more.
pub struct Scanner<E> {
    engine: E,
    preprocessor: ImagePreprocessor,
    parser: FieldParser,
}

impl<E: OcrEngine> Scanner<E> {
    /// Create a scanner with default preprocessing and parsing.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            preprocessor: ImagePreprocessor::new(),
            parser: FieldParser::new(),
        }
    }

    /// Build a scanner from the full pipeline configuration.
    pub fn from_config(engine: E, config: &IdexConfig) -> Self {
        Self {
            engine,
            preprocessor: ImagePreprocessor::from_config(&config.preprocess),
            parser: FieldParser::from_config(&config.extraction),
        }
    }

    /// Recognize and extract, retrying on the unprocessed image when
    /// the first pass finds no ID number.
    pub fn scan(&self, image: &DynamicImage) -> Result<ExtractionRecord> {
        let preprocessed = self.preprocessor.process(image);
        let text = self.engine.recognize(&preprocessed)?;
        let record = self.parser.parse(&text);

        if !record.id_no.is_empty() {
            debug!(id_no = record.id_no.as_str(), "ID detected in preprocessed image");
            return Ok(record);
        }

        info!("no ID in preprocessed image, retrying with the raw image");
        let text = self.engine.recognize(image)?;
        let retry = self.parser.parse(&text);
        if retry.id_no.is_empty() {
            warn!("no ID number detected in either pass");
        }
        Ok(retry)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::OcrError;

    /// Engine returning one canned text per call, in order.
    struct ScriptedEngine {
        outputs: Vec<&'static str>,
        calls: Rc<Cell<usize>>,
    }

    impl ScriptedEngine {
        fn new(outputs: Vec<&'static str>) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let engine = Self {
                outputs,
                calls: Rc::clone(&calls),
            };
            (engine, calls)
        }
    }

    impl OcrEngine for ScriptedEngine {
        fn recognize(&self, _image: &DynamicImage) -> std::result::Result<String, OcrError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            Ok(self.outputs.get(call).copied().unwrap_or("").to_string())
        }
    }

    #[test]
    fn test_keeps_first_pass_when_id_found() {
        let (engine, calls) = ScriptedEngine::new(vec![
            "MYKAD\n880101-14-5678\nLIM AH KOW\nNO 12 JALAN BUKIT",
            "should never be requested",
        ]);
        let scanner = Scanner::new(engine);

        let record = scanner.scan(&DynamicImage::new_rgba8(4, 4)).unwrap();
        assert_eq!(record.id_no, "880101-14-5678");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_retries_raw_image_when_no_id() {
        let (engine, calls) = ScriptedEngine::new(vec![
            "smudged beyond recognition",
            "MYKAD\n880101-14-5678\nLIM AH KOW\nNO 12 JALAN BUKIT",
        ]);
        let scanner = Scanner::new(engine);

        let record = scanner.scan(&DynamicImage::new_rgba8(4, 4)).unwrap();
        assert_eq!(record.id_no, "880101-14-5678");
        assert_eq!(record.country, "Malaysia");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_returns_retry_record_when_both_passes_miss() {
        let (engine, calls) = ScriptedEngine::new(vec![
            "nothing here",
            "HEADER\nJOHN SMITH\n12 HIGH STREET",
        ]);
        let scanner = Scanner::new(engine);

        let record = scanner.scan(&DynamicImage::new_rgba8(4, 4)).unwrap();
        assert_eq!(record.id_no, "");
        assert_eq!(record.name, "JOHN SMITH");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_engine_error_propagates() {
        struct FailingEngine;
        impl OcrEngine for FailingEngine {
            fn recognize(
                &self,
                _image: &DynamicImage,
            ) -> std::result::Result<String, OcrError> {
                Err(OcrError::Recognition("worker died".to_string()))
            }
        }

        let scanner = Scanner::new(FailingEngine);
        assert!(scanner.scan(&DynamicImage::new_rgba8(4, 4)).is_err());
    }
}
