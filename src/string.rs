//! Text helpers
//!
//! Capitalization, truncation, character stripping and link markup.
//! Lengths are counted in `char`s.

use regex::Captures;

use crate::patterns::{LINK, URL_UNSAFE};

/// Default number of characters kept by [`limit_text`]
pub const DEFAULT_TEXT_LIMIT: usize = 50;

/// Uppercase the first character, leaving the rest untouched.
///
/// ```
/// assert_eq!(utilkit::string::capitalize_first_letter("mike"), "Mike");
/// ```
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trim the text and cut it down to `limit` characters.
///
/// Text that is too long ends with `...`; whitespace left at the cut point is
/// dropped first so `"I am a"` limited to 5 becomes `"I am..."`.
pub fn limit_text(text: &str, limit: Option<usize>) -> String {
    let limit = limit.unwrap_or(DEFAULT_TEXT_LIMIT);
    let trimmed = text.trim();

    if trimmed.chars().count() <= limit {
        return trimmed.to_string();
    }

    let cut: String = trimmed.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// Remove every whitespace character
pub fn remove_spaces(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keep only letters, digits, `-` and `_`
pub fn remove_unsafe_chars(text: &str) -> String {
    URL_UNSAFE.replace_all(text, "").into_owned()
}

/// Wrap every link in the text in an `<a>` tag.
///
/// Links are found in one pass, so a link that repeats or that contains
/// another link is wrapped exactly once per occurrence. Bare `www.` links get
/// an `http://` href.
pub fn add_anchor_tags(text: &str) -> String {
    LINK.replace_all(text, |caps: &Captures| {
        let link = &caps[0];
        let href = if link.starts_with("www.") {
            format!("http://{}", link)
        } else {
            link.to_string()
        };
        format!("<a href=\"{}\" target=\"_blank\">{}</a>", href, link)
    })
    .into_owned()
}
