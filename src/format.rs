//! Date, duration and money formatting
//!
//! Dates use day.js-style pattern tokens (`D MMM YYYY HH:mm`) rendered through
//! chrono. Currency output follows the `en-ZA` number conventions.

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use std::fmt::Write;
use tracing::debug;

/// Pattern used by [`format_to_human_date`] when none is given
pub const DEFAULT_HUMAN_DATE_FORMAT: &str = "D MMM YYYY HH:mm";

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "ZAR";

const NBSP: char = '\u{a0}';

/// Recognized pattern tokens, longest first so `MMMM` wins over `MM`.
const DATE_TOKENS: &[&str] = &[
    "YYYY", "MMMM", "dddd", "SSS", "MMM", "ddd", "YY", "MM", "DD", "dd", "HH", "hh", "mm", "ss",
    "ZZ", "M", "D", "d", "H", "h", "m", "s", "A", "a", "Z", "X", "x",
];

fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Format a date for calendar inputs: `YYYY-MM-DD`. Defaults to now.
pub fn format_to_calendar_date(date: Option<DateTime<FixedOffset>>) -> String {
    date.unwrap_or_else(now).format("%Y-%m-%d").to_string()
}

/// Format a date for people to read, e.g. `14 Feb 2023 14:10`.
///
/// Defaults to now and to [`DEFAULT_HUMAN_DATE_FORMAT`].
pub fn format_to_human_date(date: Option<DateTime<FixedOffset>>, pattern: Option<&str>) -> String {
    format_human_date_pattern(
        &date.unwrap_or_else(now),
        pattern.unwrap_or(DEFAULT_HUMAN_DATE_FORMAT),
    )
}

/// Render a date with a day.js-style pattern.
///
/// | Token | Output |
/// |---|---|
/// | `YYYY` / `YY` | 2023 / 23 |
/// | `M` / `MM` / `MMM` / `MMMM` | 2 / 02 / Feb / February |
/// | `D` / `DD` | 4 / 04 |
/// | `d` / `dd` / `ddd` / `dddd` | 0-6 (Sunday = 0) / Su / Sun / Sunday |
/// | `H` / `HH` / `h` / `hh` | 24-hour and 12-hour clock, plain or padded |
/// | `m` / `mm` / `s` / `ss` / `SSS` | minutes, seconds, milliseconds |
/// | `A` / `a` | AM / am |
/// | `Z` / `ZZ` | +02:00 / +0200 |
/// | `X` / `x` | unix seconds / unix milliseconds |
///
/// Text inside `[...]` is copied verbatim. Anything else passes through.
pub fn format_human_date_pattern(date: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(first) = rest.chars().next() {
        if first == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        match DATE_TOKENS.iter().find(|token| rest.starts_with(**token)) {
            Some(token) => {
                render_token(&mut out, date, token);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(first);
                rest = &rest[first.len_utf8()..];
            }
        }
    }

    out
}

fn render_token(out: &mut String, date: &DateTime<FixedOffset>, token: &str) {
    let hour12 = match date.hour() % 12 {
        0 => 12,
        h => h,
    };

    // Writing into a String cannot fail
    let _ = match token {
        "YYYY" => write!(out, "{:04}", date.year()),
        "YY" => write!(out, "{:02}", date.year().rem_euclid(100)),
        "M" => write!(out, "{}", date.month()),
        "MM" => write!(out, "{:02}", date.month()),
        "MMM" => write!(out, "{}", date.format("%b")),
        "MMMM" => write!(out, "{}", date.format("%B")),
        "D" => write!(out, "{}", date.day()),
        "DD" => write!(out, "{:02}", date.day()),
        "d" => write!(out, "{}", date.weekday().num_days_from_sunday()),
        "dd" => write!(out, "{}", &date.format("%a").to_string()[..2]),
        "ddd" => write!(out, "{}", date.format("%a")),
        "dddd" => write!(out, "{}", date.format("%A")),
        "H" => write!(out, "{}", date.hour()),
        "HH" => write!(out, "{:02}", date.hour()),
        "h" => write!(out, "{}", hour12),
        "hh" => write!(out, "{:02}", hour12),
        "m" => write!(out, "{}", date.minute()),
        "mm" => write!(out, "{:02}", date.minute()),
        "s" => write!(out, "{}", date.second()),
        "ss" => write!(out, "{:02}", date.second()),
        "SSS" => write!(out, "{:03}", date.timestamp_subsec_millis().min(999)),
        "A" => write!(out, "{}", if date.hour() < 12 { "AM" } else { "PM" }),
        "a" => write!(out, "{}", if date.hour() < 12 { "am" } else { "pm" }),
        "Z" => write!(out, "{}", date.format("%:z")),
        "ZZ" => write!(out, "{}", date.format("%z")),
        "X" => write!(out, "{}", date.timestamp()),
        "x" => write!(out, "{}", date.timestamp_millis()),
        other => write!(out, "{}", other),
    };
}

/// Whole units of a non-negative, finite quantity; anything else counts as zero.
fn whole_units(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

/// Convert minutes to `HH:MM` (80 -> `01:20`).
///
/// Hours are padded to two digits but never cut, so 6000 minutes is `100:00`.
pub fn format_min(minutes: f64) -> String {
    let total = whole_units(minutes);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Convert seconds to `HH:MM:SS` (80 -> `00:01:20`).
pub fn format_sec(seconds: f64) -> String {
    let total = whole_units(seconds);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}

/// Convert a `H:MM` time stamp to minutes (`8:15` -> 495).
///
/// The first part counts as hours and every later part is added as minutes.
/// Returns `None` when any part is not a whole number. An empty part is not
/// read as zero, so `"8:"` and `""` are rejected rather than giving 480 and 0.
pub fn format_timestamp(stamp: &str) -> Option<i64> {
    let mut parts = stamp.split(':');
    let hours = parse_stamp_part(parts.next()?)?;
    let mut total = hours.checked_mul(60)?;

    for part in parts {
        total = total.checked_add(parse_stamp_part(part)?)?;
    }

    Some(total)
}

fn parse_stamp_part(part: &str) -> Option<i64> {
    match part.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Unparsable time stamp part '{}': {}", part, e);
            None
        }
    }
}

/// Format an amount with two decimals and an optional currency code.
///
/// ie. 560 -> `"560.00 ZAR"`, or `"560.00"` without the code.
pub fn format_money_str(amount: f64, currency: Option<&str>, include_code: bool) -> String {
    let fixed = if amount.is_finite() {
        let digits = fixed_half_up(amount.abs(), 2);
        if amount < 0.0 {
            format!("-{}", digits)
        } else {
            digits
        }
    } else if amount.is_nan() {
        "NaN".to_string()
    } else if amount > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    };

    if include_code {
        format!("{} {}", fixed, currency.unwrap_or(DEFAULT_CURRENCY))
    } else {
        fixed
    }
}

/// Finite non-negative value with `scale` decimals, ties rounded away from zero.
///
/// `format!("{:.2}")` breaks exact ties to even (`0.125` -> `0.12`), so the
/// rounding is done on the exact decimal expansion instead.
fn fixed_half_up(value: f64, scale: usize) -> String {
    // Every finite f64 has at most 1074 fractional digits
    let exact = format!("{:.1074}", value);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let round_up = fraction.as_bytes().get(scale).is_some_and(|d| *d >= b'5');

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(scale))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - scale;
    let mut out: String = digits[..split].iter().map(|d| char::from(*d)).collect();
    if scale > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(*d)));
    }
    out
}

/// Number conventions for a currency locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyLocale {
    pub tag: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
}

/// South African English: `R 560 000,59`
pub const EN_ZA: CurrencyLocale = CurrencyLocale {
    tag: "en-ZA",
    group_separator: NBSP,
    decimal_separator: ',',
};

/// Display symbol and standard fraction digits of a currency in `en-ZA`.
fn currency_display(code: &str) -> (String, usize) {
    match code {
        "ZAR" => ("R".to_string(), 2),
        "USD" => ("US$".to_string(), 2),
        "EUR" => ("€".to_string(), 2),
        "GBP" => ("£".to_string(), 2),
        "AUD" => ("A$".to_string(), 2),
        "CAD" => ("CA$".to_string(), 2),
        "INR" => ("₹".to_string(), 2),
        "CNY" => ("CN¥".to_string(), 2),
        "JPY" => ("JP¥".to_string(), 0),
        "KRW" => ("₩".to_string(), 0),
        other => (other.to_string(), 2),
    }
}

/// Format an amount as `en-ZA` currency (`560000.59` -> `R 560 000,59`).
///
/// A missing or non-finite amount counts as zero. Trailing zero decimals are
/// dropped (`R 560 000`); at most the currency's standard number of decimals
/// is shown. Symbols that end in a letter are followed by a no-break space.
pub fn currency_formatter(value: Option<f64>, currency: Option<&str>) -> String {
    let amount = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    let code = currency.unwrap_or(DEFAULT_CURRENCY).trim().to_uppercase();
    let (symbol, max_fraction) = currency_display(&code);

    let digits = fixed_half_up(amount.abs(), max_fraction);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let is_zero = whole.chars().all(|c| c == '0') && fraction.is_empty();

    let mut out = String::new();
    if amount.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&symbol);
    if symbol.chars().last().is_some_and(|c| c.is_alphabetic()) {
        out.push(NBSP);
    }
    out.push_str(&group_digits(whole, EN_ZA.group_separator));
    if !fraction.is_empty() {
        out.push(EN_ZA.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_digits(whole: &str, separator: char) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
