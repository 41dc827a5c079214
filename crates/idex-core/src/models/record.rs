//! Extracted field models for identity documents.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from one recognized document.
///
/// All fields are plain strings; an empty string means "unknown".
/// Extraction never fails outright; degenerate input degrades to a
/// record with partially-empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// National identity number as matched in the text.
    pub id_no: String,

    /// Holder name.
    pub name: String,

    /// Address lines joined with single spaces.
    pub address: String,

    /// `"male"`, `"female"`, or empty when the format carries no
    /// recoverable gender signal.
    pub gender: String,

    /// Country name, from the matching ID pattern or the fuzzy
    /// fallback detector.
    pub country: String,
}

impl ExtractionRecord {
    /// Check whether anything at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.id_no.is_empty()
            && self.name.is_empty()
            && self.address.is_empty()
            && self.gender.is_empty()
            && self.country.is_empty()
    }
}

/// Countries with a dedicated ID-number pattern and extraction rules.
///
/// A closed set: adding a country means adding a variant, its pattern
/// catalog entry, and its positional rules, with exhaustiveness checked
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    /// Malaysian MyKad (NRIC).
    Malaysia,
    /// Singapore NRIC/FIN.
    Singapore,
    /// Chinese resident identity card.
    China,
}

impl Country {
    /// Display name used in the output record.
    pub fn name(self) -> &'static str {
        match self {
            Country::Malaysia => "Malaysia",
            Country::Singapore => "Singapore",
            Country::China => "China",
        }
    }
}

/// A detected ID number and the country whose pattern matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMatch {
    /// Matched substring, after any pre-match correction.
    pub id_no: String,

    /// Country owning the pattern that matched.
    pub country: Country,
}
