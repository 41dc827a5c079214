//! Rule tables behind the heuristic extractor.

pub mod country;
pub mod id_number;
pub mod normalize;
pub mod patterns;
pub mod similarity;

pub use country::{COUNTRY_NAMES, detect_country};
pub use id_number::detect_id_number;
pub use normalize::{clean_lines, fold_for_comparison};
pub use similarity::levenshtein;
