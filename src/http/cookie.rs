// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Token extraction from the host's cookie string
//!
//! The host hands over its cookie text either as a raw `name=value;...`
//! string or wrapped in a JSON object under a `cookie` field. Extraction is a
//! plain prefix match: the name passed in must carry its trailing `=`.
//!
//! ```rust
//! use xsrf_fetch::http::{extract_token, CookieSource};
//!
//! let source = CookieSource::from("A=1;XSRF-TOKEN=abc123;B=2");
//! assert_eq!(extract_token("XSRF-TOKEN=", &source), Some("abc123".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cookie-bearing value supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CookieSource {
    /// Semicolon-separated `name=value` pairs
    Raw(String),
    /// Any value expected to carry the cookie text in a `cookie` field
    Structured(Value),
}

impl CookieSource {
    /// Get the raw cookie text, if the source carries any
    ///
    /// A structured value without a string `cookie` field yields `None`.
    pub fn raw_cookie(&self) -> Option<&str> {
        match self {
            CookieSource::Raw(raw) => Some(raw),
            CookieSource::Structured(value) => value.get("cookie").and_then(Value::as_str),
        }
    }
}

impl From<&str> for CookieSource {
    fn from(raw: &str) -> Self {
        CookieSource::Raw(raw.to_string())
    }
}

impl From<String> for CookieSource {
    fn from(raw: String) -> Self {
        CookieSource::Raw(raw)
    }
}

impl From<Value> for CookieSource {
    fn from(value: Value) -> Self {
        match value {
            Value::String(raw) => CookieSource::Raw(raw),
            other => CookieSource::Structured(other),
        }
    }
}

/// Extract the value of the first cookie entry starting with `name`
///
/// Entries are split on `;` and not trimmed, so an entry preceded by a space
/// only matches a name that carries the same space. The returned value is the
/// entry with `name.len()` bytes dropped from the front.
pub fn extract_token(name: &str, source: &CookieSource) -> Option<String> {
    let raw = source.raw_cookie()?;

    raw.split(';')
        .find(|entry| entry.starts_with(name))
        .map(|entry| entry[name.len()..].to_string())
}
