// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # xsrf-fetch - XSRF-aware HTTP requests
//!
//! Reads the XSRF token out of the cookie text a host environment hands over
//! and echoes it back as a header on outgoing requests.
//!
//! ## Features
//!
//! - Token extraction from a raw cookie string or a JSON object with a `cookie` field
//! - Request decoration: the token header always goes first, other headers keep their order
//! - Fail open: a missing token sends an empty header instead of aborting
//! - `get`/`post`/`put` shorthands over the general decorator
//! - Transport on reqwest with per-request timeouts and tracker-based cancellation
//!
//! ## Example
//!
//! ```rust,no_run
//! use xsrf_fetch::{extract_token, get, CookieSource, Expect, HttpClient};
//! use xsrf_fetch::http::{DEFAULT_XSRF_COOKIE, DEFAULT_XSRF_HEADER};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cookies = CookieSource::from("session=1;XSRF-TOKEN=abc123");
//!     let token = extract_token(DEFAULT_XSRF_COOKIE, &cookies);
//!
//!     let client = HttpClient::new()?;
//!     let request = get("https://example.com/api/me", Expect::Json, DEFAULT_XSRF_HEADER, token);
//!     let me = client.send(request).await?;
//!     println!("{:?}", me);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{build_request, extract_token, get, post, put};
pub use http::{Body, CookieSource, Expect, Header, Payload, Request, RequestSpec, Response};
pub use http::{HttpClient, HttpClientConfig, Method};

/// xsrf-fetch version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
