//! Compiled ID-number patterns, one per supported country.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Malaysian NRIC: YYMMDD-PB-####.
    pub static ref MALAYSIA_NRIC: Regex =
        Regex::new(r"\d{6}-\d{2}-\d{4}").unwrap();

    /// Singapore NRIC/FIN: prefix letter, digit, six digits, checksum
    /// letter. The second position also accepts a literal `O` so a
    /// misread zero still anchors the match.
    pub static ref SINGAPORE_NRIC: Regex =
        Regex::new(r"(?i)[STFGM](?:0|O)\d{6}[A-Z]").unwrap();

    /// Chinese resident ID: 15 digits (first generation) up to 18.
    pub static ref CHINA_RESIDENT_ID: Regex =
        Regex::new(r"\d{15,18}").unwrap();
}
