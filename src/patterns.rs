//! Compiled regular expressions shared by the checks and string helpers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional sign, digits and dots, optional lowercase exponent.
    pub static ref DIGIT: Regex =
        Regex::new(r"^-?[\d.]+(?:e-?\d+)?$").expect("valid digit pattern");

    /// Deliberately loose email shape: local part, `@`, dotted domain, 2-4 char TLD.
    pub static ref EMAIL: Regex = Regex::new(
        r"^([a-zA-Z0-9_.+-])+@(([a-zA-Z0-9-])+\.)+([a-zA-Z0-9]{2,4})+$"
    )
    .expect("valid email pattern");

    /// Any character that is not URL safe. Only letters, digits, `-` and `_` survive.
    pub static ref URL_UNSAFE: Regex =
        Regex::new(r"[^a-zA-Z0-9\-_]").expect("valid url-safe pattern");

    /// http(s) or bare `www.` links. Trailing sentence punctuation is not part of the link.
    pub static ref LINK: Regex = Regex::new(
        r#"(?:https?://|www\.)[^\s<>"']*[^\s<>"'.,;:!?)\]]"#
    )
    .expect("valid link pattern");
}
