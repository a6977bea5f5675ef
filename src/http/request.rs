// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request description handed to the transport

use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// A single request header, kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Header {
    fn from((name, value): (N, V)) -> Self {
        Header::new(name, value)
    }
}

/// Request body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    /// No body
    #[default]
    Empty,
    /// JSON document, sent as `application/json`
    Json(Value),
    /// Text with an explicit content type
    Text {
        content_type: String,
        content: String,
    },
    /// Raw bytes with an explicit content type
    Bytes { content_type: String, bytes: Bytes },
}

impl Body {
    /// Serialize any value into a JSON body
    pub fn json<T: Serialize>(data: &T) -> Result<Self> {
        Ok(Body::Json(serde_json::to_value(data)?))
    }

    /// Text body with the given content type
    pub fn text(content_type: impl Into<String>, content: impl Into<String>) -> Self {
        Body::Text {
            content_type: content_type.into(),
            content: content.into(),
        }
    }

    /// Byte body with the given content type
    pub fn bytes(content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Body::Bytes {
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Content type header the body implies, if any
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Body::Empty => None,
            Body::Json(_) => Some("application/json"),
            Body::Text { content_type, .. } | Body::Bytes { content_type, .. } => {
                Some(content_type)
            }
        }
    }

    /// Encode the body for the wire
    pub fn to_bytes(&self) -> Result<Option<Bytes>> {
        Ok(match self {
            Body::Empty => None,
            Body::Json(value) => Some(Bytes::from(serde_json::to_vec(value)?)),
            Body::Text { content, .. } => Some(Bytes::from(content.clone())),
            Body::Bytes { bytes, .. } => Some(bytes.clone()),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}

/// How the transport should interpret the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expect {
    /// Parse the body as JSON
    Json,
    /// Decode the body as UTF-8 text
    Text,
    /// Keep the raw bytes
    Bytes,
    /// Only check the status, discard the body
    #[default]
    Whatever,
}

/// HTTP request representation
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request headers, in the order they go on the wire
    pub headers: Vec<Header>,
    /// Request URL, parsed by the transport
    pub url: String,
    /// Request body
    pub body: Body,
    /// Response interpretation
    pub expect: Expect,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Cancellation tracker
    pub tracker: Option<String>,
}

impl Request {
    /// Create a new request with arbitrary method
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            headers: Vec::new(),
            url: url.into(),
            body: Body::Empty,
            expect: Expect::default(),
            timeout: None,
            tracker: None,
        }
    }

    /// Append a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Set the request body
    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Set the response interpretation
    pub fn expect(mut self, expect: Expect) -> Self {
        self.expect = expect;
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set cancellation tracker
    pub fn tracker(mut self, tracker: impl Into<String>) -> Self {
        self.tracker = Some(tracker.into());
        self
    }

    /// First header value with the given name, compared case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
