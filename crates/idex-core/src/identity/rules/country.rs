//! Fuzzy country detection used when no ID pattern matched.

use tracing::debug;

use super::normalize::fold_for_comparison;
use super::similarity::levenshtein;

/// Country names recognized by the fallback detector. Scanned in order;
/// ties on distance keep the earlier hit.
pub const COUNTRY_NAMES: [&str; 7] = [
    "Malaysia",
    "United States",
    "United Kingdom",
    "Japan",
    "China",
    "India",
    "Singapore",
];

/// Fuzzy-match every line against the catalog and return the closest
/// country name, if it is close enough.
///
/// The acceptance threshold scales with the name: the globally minimum
/// edit distance (over whitespace-stripped, lower-cased forms) must not
/// exceed half the catalog name's character count. "Malaysla" passes at
/// distance 1; unrelated text does not.
pub fn detect_country(lines: &[String]) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;

    for line in lines {
        let folded_line = fold_for_comparison(line);
        for name in COUNTRY_NAMES {
            let distance = levenshtein(&folded_line, &fold_for_comparison(name));
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((name, distance));
            }
        }
    }

    match best {
        Some((name, distance)) if distance <= name.chars().count() / 2 => {
            debug!(country = name, distance, "detected country from lines");
            Some(name)
        }
        _ => {
            debug!("no country detected from lines");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_misread_country_within_threshold() {
        // Distance 1, threshold 4 for "Malaysia".
        assert_eq!(
            detect_country(&lines(&["KAD PENGENALAN", "Malaysla"])),
            Some("Malaysia")
        );
    }

    #[test]
    fn test_spaced_name_folds_before_comparison() {
        assert_eq!(
            detect_country(&lines(&["UNITED  KINGDOM"])),
            Some("United Kingdom")
        );
    }

    #[test]
    fn test_unrelated_text_rejected() {
        assert_eq!(detect_country(&lines(&["lorem ipsum dolor"])), None);
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(detect_country(&[]), None);
    }

    #[test]
    fn test_tie_keeps_earlier_catalog_entry() {
        // "chindia" sits at distance 2 from both "china" and "india";
        // the earlier catalog entry wins.
        assert_eq!(detect_country(&lines(&["chindia"])), Some("China"));
    }
}
