// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for xsrf-fetch
//!
//! Token extraction from the host's cookie text, XSRF request decoration,
//! and the client that issues the decorated requests.

mod client;
mod cookie;
mod request;
mod response;
mod xsrf;

pub use client::{HttpClient, HttpClientConfig};
pub use cookie::{extract_token, CookieSource};
pub use request::{Body, Expect, Header, Request};
pub use response::{Payload, Response};
pub use xsrf::{build_request, get, post, put, RequestSpec};

pub use reqwest::Method;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("xsrf-fetch/", env!("CARGO_PKG_VERSION"));

/// Cookie name most frameworks issue the token under, separator included
pub const DEFAULT_XSRF_COOKIE: &str = "XSRF-TOKEN=";

/// Header most frameworks expect the token back in
pub const DEFAULT_XSRF_HEADER: &str = "X-XSRF-TOKEN";
