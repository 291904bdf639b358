//! Utilkit Library
//!
//! Stateless helpers for arrays, strings, dates, currency, validation and
//! URL queries, plus Levenshtein-based string similarity.

pub mod array;
pub mod checks;
pub mod config;
pub mod error;
pub mod format;
pub mod patterns;
pub mod similarity;
pub mod string;
pub mod url;

pub use error::{UtilError, UtilResult};
pub use similarity::{edit_distance, find_best_match, find_matches, similarity, FuzzyMatch};
