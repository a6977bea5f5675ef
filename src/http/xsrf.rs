// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! XSRF request decoration
//!
//! Turns a [`RequestSpec`] into a transport [`Request`] whose first header
//! echoes the XSRF token. A missing token still produces the header, with an
//! empty value, so the server decides how to treat the request.
//!
//! ```rust
//! use xsrf_fetch::http::{extract_token, get, CookieSource, Expect};
//!
//! let cookies = CookieSource::from("XSRF-TOKEN=abc123");
//! let token = extract_token("XSRF-TOKEN=", &cookies);
//!
//! let request = get("https://example.com/api/me", Expect::Json, "X-XSRF-TOKEN", token);
//! assert_eq!(request.headers[0].value, "abc123");
//! ```

use std::time::Duration;

use reqwest::Method;

use super::request::{Body, Expect, Header, Request};

/// Full description of a request to decorate
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub headers: Vec<Header>,
    pub url: String,
    pub body: Body,
    pub expect: Expect,
    pub timeout: Option<Duration>,
    pub tracker: Option<String>,
    /// Name of the header carrying the token
    pub xsrf_header_name: String,
    pub xsrf_token: Option<String>,
}

impl RequestSpec {
    /// Create a `RequestSpec` with no headers, an empty body and no timeout or tracker
    pub fn new(
        method: Method,
        url: impl Into<String>,
        xsrf_header_name: impl Into<String>,
        xsrf_token: Option<String>,
    ) -> Self {
        Self {
            method,
            headers: Vec::new(),
            url: url.into(),
            body: Body::Empty,
            expect: Expect::default(),
            timeout: None,
            tracker: None,
            xsrf_header_name: xsrf_header_name.into(),
            xsrf_token,
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

    /// Decorate into a transport request
    pub fn build(self) -> Request {
        build_request(self)
    }
}

/// Prepend the XSRF header and hand every other field over unchanged
pub fn build_request(spec: RequestSpec) -> Request {
    tracing::debug!(
        method = %spec.method,
        url = %spec.url,
        header = %spec.xsrf_header_name,
        has_token = spec.xsrf_token.is_some(),
        "Decorating request"
    );

    let mut headers = Vec::with_capacity(spec.headers.len() + 1);
    headers.push(Header::new(
        spec.xsrf_header_name,
        spec.xsrf_token.unwrap_or_default(),
    ));
    headers.extend(spec.headers);

    Request {
        method: spec.method,
        headers,
        url: spec.url,
        body: spec.body,
        expect: spec.expect,
        timeout: spec.timeout,
        tracker: spec.tracker,
    }
}

/// Decorated GET request with no body
pub fn get(
    url: impl Into<String>,
    expect: Expect,
    xsrf_header_name: impl Into<String>,
    xsrf_token: Option<String>,
) -> Request {
    RequestSpec::new(Method::GET, url, xsrf_header_name, xsrf_token)
        .expect(expect)
        .build()
}

/// Decorated POST request
pub fn post(
    url: impl Into<String>,
    body: Body,
    expect: Expect,
    xsrf_header_name: impl Into<String>,
    xsrf_token: Option<String>,
) -> Request {
    RequestSpec::new(Method::POST, url, xsrf_header_name, xsrf_token)
        .body(body)
        .expect(expect)
        .build()
}

/// Decorated PUT request
pub fn put(
    url: impl Into<String>,
    body: Body,
    expect: Expect,
    xsrf_header_name: impl Into<String>,
    xsrf_token: Option<String>,
) -> Request {
    RequestSpec::new(Method::PUT, url, xsrf_header_name, xsrf_token)
        .body(body)
        .expect(expect)
        .build()
}
