// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use futures::future::{AbortHandle, Abortable};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use super::request::Request;
use super::response::{Payload, Response};
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Timeout for requests that do not set their own
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Headers sent unless the request sets them itself
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "accept",
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            default_headers,
            proxy: None,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set default timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set max redirects
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Add a default header, ignored if name or value is invalid
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            self.default_headers.insert(name, value);
        }
        self
    }
}

/// HTTP client that issues decorated requests
///
/// Cheap to clone; clones share the connection pool and the tracker registry,
/// so a request started on one clone can be cancelled through another.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    /// In-flight requests by tracker
    trackers: Arc<DashMap<String, Vec<(u64, AbortHandle)>>>,
    next_id: Arc<AtomicU64>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .default_headers(config.default_headers.clone());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            trackers: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Execute a request and interpret the response as it expects
    pub async fn send(&self, request: Request) -> Result<Payload> {
        let expect = request.expect;
        let response = self.execute(request).await?;

        if !response.is_success() {
            tracing::warn!(
                url = %response.url,
                status = %response.status,
                "Request failed"
            );
        }

        response.into_payload(expect)
    }

    /// Execute a request and return the raw response
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();
        let url = Url::parse(&request.url)?;
        let timeout = request.timeout.unwrap_or(self.config.timeout);

        tracing::debug!(
            method = %request.method,
            url = %url,
            tracker = ?request.tracker,
            "Sending request"
        );

        let mut builder = self.client.request(request.method.clone(), url.clone());

        // Appended in order, duplicates included
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }

        if let Some(content_type) = request.body.content_type() {
            if request.header_value(CONTENT_TYPE.as_str()).is_none() {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
        }

        if let Some(body) = request.body.to_bytes()? {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let pending = dispatch(builder, url, timeout, start);

        match request.tracker {
            Some(tracker) => self.tracked(tracker, pending).await,
            None => pending.await,
        }
    }

    /// Cancel every in-flight request registered under `tracker`
    ///
    /// Returns false if nothing was in flight.
    pub fn cancel(&self, tracker: &str) -> bool {
        match self.trackers.remove(tracker) {
            Some((_, handles)) => {
                for (_, handle) in &handles {
                    handle.abort();
                }
                tracing::info!(tracker, count = handles.len(), "Cancelled requests");
                !handles.is_empty()
            }
            None => false,
        }
    }

    /// Number of tracked requests currently in flight
    pub fn in_flight(&self) -> usize {
        self.trackers.iter().map(|e| e.value().len()).sum()
    }

    async fn tracked<F>(&self, tracker: String, dispatch: F) -> Result<Response>
    where
        F: Future<Output = Result<Response>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.trackers
            .entry(tracker.clone())
            .or_default()
            .push((id, handle));

        // Also runs when the caller drops this future before it resolves
        let registered = Registered {
            trackers: &self.trackers,
            tracker: &tracker,
            id,
        };
        let outcome = Abortable::new(dispatch, registration).await;
        drop(registered);

        match outcome {
            Ok(result) => result,
            Err(_aborted) => Err(Error::cancelled(tracker)),
        }
    }
}

/// Tracker registration, removed from the registry on drop
struct Registered<'a> {
    trackers: &'a DashMap<String, Vec<(u64, AbortHandle)>>,
    tracker: &'a str,
    id: u64,
}

impl Drop for Registered<'_> {
    fn drop(&mut self) {
        if let Some(mut handles) = self.trackers.get_mut(self.tracker) {
            handles.retain(|(other, _)| *other != self.id);
        }
        self.trackers.remove_if(self.tracker, |_, handles| handles.is_empty());
    }
}

async fn dispatch(
    builder: reqwest::RequestBuilder,
    url: Url,
    timeout: Duration,
    start: Instant,
) -> Result<Response> {
    let map_err = |e: reqwest::Error| {
        if e.is_timeout() {
            Error::timeout(url.as_str(), timeout.as_millis() as u64)
        } else {
            Error::Http(e)
        }
    };

    let response = builder.send().await.map_err(map_err)?;
    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(map_err)?;
    let response_time = start.elapsed().as_millis() as u64;

    tracing::debug!(
        url = %final_url,
        status = %status,
        time_ms = response_time,
        "Response"
    );

    Ok(Response::new(status, headers, body, final_url, response_time))
}
