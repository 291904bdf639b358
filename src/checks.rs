//! Value checks
//!
//! Validation helpers for loosely-typed input: numeric strings, emails,
//! blank strings and values decoded from JSON. None of these fail; malformed
//! input simply does not pass the check.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::patterns::{DIGIT, EMAIL};

/// A value that may hold a number: either raw text or an already-parsed float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(value: &'a str) -> Self {
        NumberInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(value: &'a String) -> Self {
        NumberInput::Text(value.as_str())
    }
}

impl From<f64> for NumberInput<'_> {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<i64> for NumberInput<'_> {
    fn from(value: i64) -> Self {
        NumberInput::Number(value as f64)
    }
}

/// Check whether a value is a valid, finite number.
///
/// Text must read as a plain decimal once whitespace is removed (optional
/// leading `-`, at most one `.`, optional lowercase exponent) and must also
/// parse as a float after trimming. `Infinity`, `NaN` and hex are rejected.
///
/// Floats are checked through their shortest text form, which switches to
/// exponent notation at `1e21` and below `1e-6`. A positive exponent is
/// written `e+21` and so does not pass.
pub fn is_valid_number<'a>(value: impl Into<NumberInput<'a>>) -> bool {
    match value.into() {
        NumberInput::Number(n) => n.is_finite() && DIGIT.is_match(&number_text(n)),
        NumberInput::Text(text) => {
            let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            if !DIGIT.is_match(&compact) || compact.matches('.').count() > 1 {
                return false;
            }
            text.trim()
                .parse::<f64>()
                .map(|n| n.is_finite())
                .unwrap_or(false)
        }
    }
}

/// Shortest text form of a finite float, e.g. `12.5`, `1e-7`, `1e+21`
fn number_text(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        format!("{}", n)
    }
}

/// Input accepted by [`check_str_empty`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrInput<'a> {
    Absent,
    One(&'a str),
    Many(&'a [Option<&'a str>]),
}

impl<'a> From<&'a str> for StrInput<'a> {
    fn from(value: &'a str) -> Self {
        StrInput::One(value)
    }
}

impl<'a> From<Option<&'a str>> for StrInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(StrInput::Absent, StrInput::One)
    }
}

impl<'a> From<&'a [Option<&'a str>]> for StrInput<'a> {
    fn from(value: &'a [Option<&'a str>]) -> Self {
        StrInput::Many(value)
    }
}

/// Returns true when the input is absent or blank.
///
/// For a list, returns true when the list is empty or any entry is absent or
/// blank. "Blank" means empty after trimming whitespace.
pub fn check_str_empty<'a>(value: impl Into<StrInput<'a>>) -> bool {
    match value.into() {
        StrInput::Absent => true,
        StrInput::One(text) => text.trim().is_empty(),
        StrInput::Many(items) => {
            items.is_empty()
                || items
                    .iter()
                    .any(|item| item.map_or(true, |text| text.trim().is_empty()))
        }
    }
}

/// Very loose email check. Requires exactly one `@`.
pub fn is_valid_email(email: Option<&str>) -> bool {
    match email {
        Some(email) if !email.is_empty() => {
            email.matches('@').count() == 1 && EMAIL.is_match(email)
        }
        _ => false,
    }
}

/// Borrow the string when the value is a string with non-whitespace content
pub fn as_non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.trim().is_empty())
}

/// True when the value is a non-blank string
pub fn is_non_empty_str(value: &Value) -> bool {
    as_non_empty_str(value).is_some()
}

/// Borrow every entry when the value is a non-empty array of non-blank strings
pub fn as_non_empty_arr_str(value: &Value) -> Option<Vec<&str>> {
    let items = value.as_array().filter(|items| !items.is_empty())?;
    items.iter().map(as_non_empty_str).collect()
}

/// True when the value is a non-empty array whose entries are all non-blank strings
pub fn is_non_empty_arr_str(value: &Value) -> bool {
    as_non_empty_arr_str(value).is_some()
}

/// Interpret the value as one of `E`'s declared (serialized) values.
///
/// Works for any enum that deserializes from the same shape it is stored in,
/// e.g. unit variants with `#[serde(rename_all = "...")]`.
pub fn as_enum<E: DeserializeOwned>(value: &Value) -> Option<E> {
    E::deserialize(value).ok()
}

/// True when the value is among `E`'s declared values
pub fn is_of_enum<E: DeserializeOwned>(value: &Value) -> bool {
    as_enum::<E>(value).is_some()
}
