//! Text normalization applied before any matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Non-informative words printed on identity cards (citizenship,
    // religion and gender labels) that only get in the way of the
    // positional heuristics.
    static ref NOISE_WORDS: Regex =
        Regex::new(r"(?i)warganegara|islam|lelaki|perempuan").unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Split raw recognized text into trimmed, non-empty lines with noise
/// words removed.
///
/// Line order is preserved: positional offsets from the matched ID line
/// drive field extraction, so this must run exactly once per call,
/// before any matching.
pub fn clean_lines(text: &str) -> Vec<String> {
    let cleaned = NOISE_WORDS.replace_all(text, "");
    cleaned
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalization used only for fuzzy country comparison: strips all
/// whitespace and lower-cases.
///
/// Narrower than [`clean_lines`]: no noise-word removal.
pub fn fold_for_comparison(s: &str) -> String {
    WHITESPACE.replace_all(s, "").to_lowercase()
}

/// Strip every whitespace character from a line.
pub fn strip_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clean_lines_splits_and_trims() {
        let lines = clean_lines("  first \n\n second\t\n   \nthird");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clean_lines_removes_noise_words() {
        let lines = clean_lines("WARGANEGARA\nLIM AH KOW\nIslam Lelaki");
        // Lines left empty by noise removal are dropped entirely.
        assert_eq!(lines, vec!["LIM AH KOW"]);
    }

    #[test]
    fn test_clean_lines_noise_is_case_insensitive() {
        let lines = clean_lines("warganegara MALAYSIA\nPerempuan");
        assert_eq!(lines, vec!["MALAYSIA"]);
    }

    #[test]
    fn test_fold_for_comparison() {
        assert_eq!(fold_for_comparison("United States"), "unitedstates");
        assert_eq!(fold_for_comparison("  MALAYSIA  "), "malaysia");
    }

    #[test]
    fn test_strip_whitespace_keeps_case() {
        assert_eq!(strip_whitespace("1234 5678 9012"), "123456789012");
        assert_eq!(strip_whitespace("S 0123456A"), "S0123456A");
    }
}
