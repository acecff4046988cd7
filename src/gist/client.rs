//! Gist API client implementation
//!
//! This module provides the `GistClient` struct, the entry point for all gist
//! API operations. The client owns the HTTP connection pool, the base URL and
//! the optional access token. It is constructed once by the caller and passed
//! explicitly to every command, so tests can point it at a mock server.
//!
//! The operations themselves live in `gists.rs` as an `impl` block extending
//! this client.

use crate::constants::gist::{ACCEPT, ACCESS_TOKEN_PARAM, DEFAULT_USER_AGENT};
use crate::utils::redact_access_token;
use anyhow::{Context, Result, anyhow, bail};
use colored::*;
use reqwest::{Client, Method, RequestBuilder, Response, Url};

/// Gist API client for interacting with a gist hosting REST API
///
/// ## Example
///
/// ```rust
/// use gost::gist::GistClient;
///
/// // Anonymous client against the public API
/// let public_client = GistClient::new("https://api.github.com", None);
/// assert!(!public_client.is_authenticated());
///
/// // Authenticated client
/// let client = GistClient::new("https://api.github.com/", Some("token".to_string()));
/// assert_eq!(client.base_url(), "https://api.github.com");
/// ```
#[derive(Clone)]
pub struct GistClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
    pub(crate) debug: bool,
}

impl GistClient {
    /// Create a new client
    ///
    /// A trailing slash on `base_url` is dropped. A blank token is treated as
    /// no token.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
            debug: false,
        }
    }

    /// Print each request line to stderr (token redacted)
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client has an access token configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build the absolute URL for the given path segments, appending the access token
    ///
    /// Segments are percent-encoded individually; `.` and `..` are rejected so
    /// a segment can never climb out of the endpoint it names.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API URL '{}'", self.base_url))?;

        for segment in segments {
            if !is_path_segment(segment) {
                bail!("Invalid path segment '{}'", segment);
            }
        }

        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid API URL '{}'", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair(ACCESS_TOKEN_PARAM, token);
        }

        Ok(url)
    }

    /// Start a request against the given path with the standard headers set
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;

        if self.debug {
            eprintln!(
                "{} {} {}",
                "debug:".dimmed(),
                method,
                redact_access_token(url.as_str())
            );
        }

        Ok(self
            .client
            .request(method, url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", ACCEPT))
    }

    /// Send a request; transport errors never carry the token-bearing URL
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build().map_err(reqwest::Error::without_url)?;
        let target = redact_access_token(request.url().as_str());

        self.client.execute(request).await.map_err(|e| {
            anyhow::Error::new(e.without_url()).context(format!("Request to {} failed", target))
        })
    }
}

fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '?', '#'])
}
