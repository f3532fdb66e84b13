//! Query string construction for list/search endpoints.
//!
//! Pagination and filter parameters are frequently absent, and the backend
//! distinguishes "parameter missing" from "parameter empty". The builder
//! therefore drops null and empty-string values entirely while keeping
//! falsy-but-meaningful values like `0` and `false`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// RFC 3986 unreserved characters pass through; everything else is escaped,
// so spaces become %20 and `=`/`&` inside values cannot split the string.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A single query parameter value.
///
/// `Null` covers both of the original API's "absent" cases (null and
/// undefined); `From<Option<T>>` maps `None` onto it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl QueryValue {
    /// The textual form that ends up in the query string, or `None` when the
    /// value is filtered out (null or empty string).
    fn render(&self) -> Option<String> {
        match self {
            QueryValue::Null => None,
            QueryValue::Str(s) if s.is_empty() => None,
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(n) => Some(n.to_string()),
            QueryValue::UInt(n) => Some(n.to_string()),
            QueryValue::Float(n) => Some(n.to_string()),
            QueryValue::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::UInt(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::UInt(value)
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
        value.map(Into::into).unwrap_or(QueryValue::Null)
    }
}

/// Serialize parameters into a `?`-prefixed query string.
///
/// Entries are emitted in slice order. Null and empty-string values are
/// skipped; numeric `0` and `false` survive. Both keys and values are
/// percent-encoded. Returns the empty string when nothing survives
/// filtering, so the result can always be appended to a path verbatim.
pub fn build_query_string(params: &[(&str, QueryValue)]) -> String {
    let mut parts = Vec::new();
    for (key, value) in params {
        let Some(rendered) = value.render() else {
            continue;
        };
        parts.push(format!(
            "{}={}",
            utf8_percent_encode(key, COMPONENT),
            utf8_percent_encode(&rendered, COMPONENT)
        ));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}
