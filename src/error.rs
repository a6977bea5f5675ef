// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the transport layer
//!
//! Token extraction and request decoration never fail; everything here is
//! produced once a request is actually issued.

use thiserror::Error;

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for issuing decorated requests
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timeout error
    #[error("Request to {url} timed out after {duration_ms}ms")]
    Timeout { url: String, duration_ms: u64 },

    /// Request was cancelled through its tracker
    #[error("Request cancelled (tracker '{tracker}')")]
    Cancelled { tracker: String },

    /// Response status outside 2xx
    #[error("Bad status {status} from {url}")]
    BadStatus { status: u16, url: String },

    /// Response body did not match what the request expected
    #[error("Unexpected response body: {0}")]
    BadBody(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a timeout error
    pub fn timeout(url: impl Into<String>, duration_ms: u64) -> Self {
        Error::Timeout {
            url: url.into(),
            duration_ms,
        }
    }

    /// Create a cancellation error
    pub fn cancelled(tracker: impl Into<String>) -> Self {
        Error::Cancelled {
            tracker: tracker.into(),
        }
    }

    /// Create a bad status error
    pub fn bad_status(status: u16, url: impl Into<String>) -> Self {
        Error::BadStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a bad body error
    pub fn bad_body<S: Into<String>>(msg: S) -> Self {
        Error::BadBody(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this request was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }

    /// Check if this is recoverable (caller may reissue the request)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Timeout { .. } | Error::Http(_) => true,
            Error::BadStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::BadStatus { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::BadStatus { status, .. } if (500..600).contains(status))
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::BadStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Timeout { url, .. } => Some(url),
            Error::BadStatus { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}
