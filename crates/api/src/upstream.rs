//! HTTP client for the content backend.
//!
//! Wraps a pooled [`reqwest::Client`]. Every request asks for JSON and
//! carries the admin token as a bearer credential when the caller has one.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Method;

/// Client for the content backend at `base_url`.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client whose requests time out after `timeout`.
    ///
    /// * `base_url` - backend API root, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/{path}`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request to `path` with `Accept: application/json` and, when
    /// `token` is set, `Authorization: Bearer {token}`.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
