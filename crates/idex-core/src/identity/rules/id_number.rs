//! ID-number detection against the per-country pattern catalog.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::record::{Country, IdMatch};

use super::normalize::strip_whitespace;
use super::patterns::{CHINA_RESIDENT_ID, MALAYSIA_NRIC, SINGAPORE_NRIC};

/// How a line is repaired before a pattern is tried against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Correction {
    /// Use the line as recognized.
    None,
    /// Replace every `O` with `0`, the usual OCR confusion inside a
    /// digit run.
    OhToZero,
    /// Drop all whitespace; long digit runs often come back with
    /// spurious internal spaces.
    StripWhitespace,
}

impl Correction {
    fn apply(self, line: &str) -> Cow<'_, str> {
        match self {
            Correction::None => Cow::Borrowed(line),
            Correction::OhToZero => Cow::Owned(line.replace('O', "0")),
            Correction::StripWhitespace => Cow::Owned(strip_whitespace(line)),
        }
    }
}

/// One catalog entry: a country, its pattern, and the repair applied
/// before matching.
struct IdPattern {
    country: Country,
    regex: &'static Regex,
    correction: Correction,
}

impl IdPattern {
    /// Try this pattern against one line, returning the matched number.
    fn try_match(&self, line: &str) -> Option<IdMatch> {
        let corrected = self.correction.apply(line);
        self.regex.find(&corrected).map(|m| IdMatch {
            id_no: m.as_str().to_string(),
            country: self.country,
        })
    }
}

lazy_static! {
    /// Fixed catalog in priority order. Order matters: the first entry
    /// that matches a line wins, so a line satisfying two patterns
    /// resolves to the earlier country.
    static ref CATALOG: [IdPattern; 3] = [
        IdPattern {
            country: Country::Malaysia,
            regex: &MALAYSIA_NRIC,
            correction: Correction::None,
        },
        IdPattern {
            country: Country::Singapore,
            regex: &SINGAPORE_NRIC,
            correction: Correction::OhToZero,
        },
        IdPattern {
            country: Country::China,
            regex: &CHINA_RESIDENT_ID,
            correction: Correction::StripWhitespace,
        },
    ];
}

/// Scan lines top-to-bottom against the catalog and return the first
/// match.
///
/// No backtracking: a hit ends the scan even if a later line would
/// match an earlier catalog entry.
pub fn detect_id_number(lines: &[String]) -> Option<IdMatch> {
    for line in lines {
        for pattern in CATALOG.iter() {
            if let Some(found) = pattern.try_match(line) {
                debug!(
                    country = found.country.name(),
                    id_no = found.id_no.as_str(),
                    "detected ID number"
                );
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_malaysia_nric_detected_verbatim() {
        let found = detect_id_number(&lines(&["MYKAD", "880101-14-5678", "LIM AH KOW"]))
            .expect("should detect Malaysian NRIC");
        assert_eq!(found.id_no, "880101-14-5678");
        assert_eq!(found.country, Country::Malaysia);
    }

    #[test]
    fn test_singapore_oh_corrected_to_zero() {
        // The recognized line has an `O` where the zero belongs; the
        // returned number carries the corrected digit.
        let found = detect_id_number(&lines(&["IDENTITY CARD", "SO123456A"]))
            .expect("should detect Singapore NRIC");
        assert_eq!(found.id_no, "S0123456A");
        assert_eq!(found.country, Country::Singapore);
    }

    #[test]
    fn test_oh_correction_not_applied_to_other_patterns() {
        // `O` inside what would otherwise be a Malaysian NRIC stays
        // uncorrected for the Malaysia attempt, so nothing matches.
        assert_eq!(detect_id_number(&lines(&["88O1O1-14-5678"])), None);
    }

    #[test]
    fn test_china_digits_with_embedded_spaces() {
        let found = detect_id_number(&lines(&["1234 5678 9012 3456 7"]))
            .expect("should detect Chinese resident ID");
        assert_eq!(found.id_no, "12345678901234567");
        assert_eq!(found.country, Country::China);
    }

    #[test]
    fn test_catalog_order_breaks_double_match() {
        // One line satisfying both the Singapore and China patterns
        // resolves to Singapore, the earlier catalog entry.
        let found = detect_id_number(&lines(&["F0123456B 123456789012345"]))
            .expect("should detect an ID");
        assert_eq!(found.country, Country::Singapore);
        assert_eq!(found.id_no, "F0123456B");
    }

    #[test]
    fn test_first_matching_line_wins() {
        // The scan is line-major: a China hit on the first line ends it
        // even though the second line matches the earlier-listed
        // Malaysia pattern.
        let found = detect_id_number(&lines(&["123456789012345", "880101-14-5678"]))
            .expect("should detect an ID");
        assert_eq!(found.country, Country::China);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(detect_id_number(&lines(&["no numbers here", "12345"])), None);
        assert_eq!(detect_id_number(&[]), None);
    }
}
