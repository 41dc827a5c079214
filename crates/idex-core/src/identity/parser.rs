//! Heuristic field parser turning recognized text into a record.

use std::borrow::Cow;

use regex::Regex;
use tracing::{debug, trace};

use crate::models::config::ExtractionConfig;
use crate::models::record::{Country, ExtractionRecord};

use super::DocumentExtractor;
use super::rules::country::detect_country;
use super::rules::id_number::detect_id_number;
use super::rules::normalize::clean_lines;

/// Heuristic parser that turns raw recognized text into an
/// [`ExtractionRecord`].
///
/// Pure and total: any input string, however empty or noisy, produces a
/// well-formed record with possibly-empty fields, and re-running on the
/// same text yields an identical record.
pub struct FieldParser {
    /// Try the fuzzy country fallback when no ID pattern matched.
    country_fallback: bool,

    /// Extra noise words removed alongside the built-in set.
    extra_noise: Option<Regex>,
}

impl FieldParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            country_fallback: true,
            extra_noise: None,
        }
    }

    /// Set whether the fuzzy country fallback runs.
    pub fn with_country_fallback(mut self, enabled: bool) -> Self {
        self.country_fallback = enabled;
        self
    }

    /// Remove these additional words (case-insensitively) before the
    /// text is split into lines.
    pub fn with_noise_words(mut self, words: &[String]) -> Self {
        self.extra_noise = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!("(?i){alternation}")).ok()
        };
        self
    }

    /// Build a parser from the extraction section of the configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_country_fallback(config.country_fallback)
            .with_noise_words(&config.extra_noise_words)
    }

    /// Extract structured fields from raw recognized text.
    pub fn parse(&self, text: &str) -> ExtractionRecord {
        let text: Cow<'_, str> = match &self.extra_noise {
            Some(re) => re.replace_all(text, ""),
            None => Cow::Borrowed(text),
        };

        let lines = clean_lines(&text);
        trace!(lines = lines.len(), "normalized recognized text");

        let detection = detect_id_number(&lines);
        let fallback = if self.country_fallback {
            detect_country(&lines)
        } else {
            None
        };

        let (id_no, fields) = match &detection {
            Some(found) => (
                found.id_no.clone(),
                found.country.positional_fields(&lines, &found.id_no),
            ),
            None => (String::new(), generic_fields(&lines)),
        };

        // An ID hit pins the country; the fallback guess only stands in
        // when detection came up empty.
        let country = match &detection {
            Some(found) => found.country.name().to_string(),
            None => fallback.unwrap_or_default().to_string(),
        };

        debug!(
            id_no = id_no.as_str(),
            country = country.as_str(),
            "extraction complete"
        );

        ExtractionRecord {
            id_no,
            name: fields.name,
            address: fields.address,
            gender: fields.gender,
            country,
        }
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for FieldParser {
    fn extract(&self, text: &str) -> ExtractionRecord {
        self.parse(text)
    }
}

/// Name, address and gender pulled from fixed positions around the ID
/// line.
#[derive(Debug, Default)]
struct PositionalFields {
    name: String,
    address: String,
    gender: String,
}

impl Country {
    /// Apply this country's document layout to the normalized lines.
    ///
    /// Out-of-range indices degrade to empty fields, never errors.
    fn positional_fields(self, lines: &[String], id_no: &str) -> PositionalFields {
        match self {
            Country::Malaysia => malaysia_fields(lines, id_no),
            Country::Singapore => singapore_fields(lines, id_no),
            // Chinese cards put the name on the second line regardless
            // of where the number row sits.
            Country::China => generic_fields(lines),
        }
    }
}

/// Index of the line containing the detected number. A corrected ID may
/// no longer be a substring of any raw line.
fn id_line_index(lines: &[String], id_no: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(id_no))
}

fn malaysia_fields(lines: &[String], id_no: &str) -> PositionalFields {
    let mut fields = PositionalFields::default();

    if let Some(idx) = id_line_index(lines, id_no) {
        if let Some(line) = lines.get(idx + 1) {
            // A leading "+" is a recurring OCR artifact in front of the
            // name row.
            fields.name = line
                .strip_prefix('+')
                .map(str::trim)
                .unwrap_or(line)
                .to_string();
        }
        if idx + 2 < lines.len() {
            fields.address = lines[idx + 2..].join(" ");
        }
    }

    fields.gender = gender_from_id(id_no);
    fields
}

/// MyKad convention: the last digit of the number encodes gender, even
/// for female and odd for male.
fn gender_from_id(id_no: &str) -> String {
    match id_no.chars().rev().find_map(|c| c.to_digit(10)) {
        Some(digit) if digit % 2 == 0 => "female".to_string(),
        Some(_) => "male".to_string(),
        None => String::new(),
    }
}

fn singapore_fields(lines: &[String], id_no: &str) -> PositionalFields {
    let mut fields = PositionalFields::default();
    let idx = id_line_index(lines, id_no);

    // When the O->0 repair leaves the matched number absent from every
    // raw line, the third line is the best positional guess for the
    // name.
    fields.name = match idx {
        Some(i) if i + 1 < lines.len() => lines[i + 1].clone(),
        _ => lines.get(2).cloned().unwrap_or_default(),
    };

    // Address starts two lines past the ID row; with no ID row it
    // starts from the second line.
    let start = idx.map_or(1, |i| i + 2);
    fields.address = lines.get(start..).unwrap_or(&[]).join(" ");

    fields
}

/// Layout guess when positions cannot be anchored to an ID line: the
/// second line is the name, everything after it is the address.
fn generic_fields(lines: &[String]) -> PositionalFields {
    PositionalFields {
        name: lines.get(1).cloned().unwrap_or_default(),
        address: lines.get(2..).unwrap_or(&[]).join(" "),
        gender: String::new(),
    }
}
