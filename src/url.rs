//! URL query building and search helpers

use std::fmt;

/// A query parameter value. `Absent` entries are left out of the query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Absent,
}

impl QueryValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, QueryValue::Absent)
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Float(n) if n.is_nan() => f.write_str("NaN"),
            QueryValue::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            QueryValue::Float(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Absent, Into::into)
    }
}

fn build_query<I, K, V>(url: &str, params: I, encode: bool) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    let mut query_url = url.to_string();
    let mut has_query = url.contains('?');

    for (key, value) in params {
        let value = value.into();
        if value.is_absent() {
            continue;
        }

        query_url.push(if has_query { '&' } else { '?' });
        has_query = true;

        let value = value.to_string();
        if encode {
            query_url.push_str(&urlencoding::encode(key.as_ref()));
            query_url.push('=');
            query_url.push_str(&urlencoding::encode(&value));
        } else {
            query_url.push_str(key.as_ref());
            query_url.push('=');
            query_url.push_str(&value);
        }
    }

    query_url
}

/// Append query parameters to a URL in the order given.
///
/// The first parameter starts with `?` (or `&` if the URL already has a
/// query). Absent values are skipped. Keys and values are not escaped.
///
/// ```
/// use utilkit::url::{url_query_builder, QueryValue};
///
/// let url = url_query_builder(
///     "http://test",
///     [("cool", QueryValue::from(true)), ("name", QueryValue::from("jack"))],
/// );
/// assert_eq!(url, "http://test?cool=true&name=jack");
/// ```
pub fn url_query_builder<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    build_query(url, params, false)
}

/// Same as [`url_query_builder`] but percent-encodes keys and values.
pub fn url_query_builder_encoded<I, K, V>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    build_query(url, params, true)
}

/// Search for a query in any of the given values, ignoring case.
///
/// Absent values never match.
pub fn include_search(search: &str, values: &[Option<&str>]) -> bool {
    let needle = search.to_lowercase();
    values
        .iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}
