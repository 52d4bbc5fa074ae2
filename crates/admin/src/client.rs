//! HTTP client for the admin proxy routes.
//!
//! The console never talks to the content backend directly. Every call goes
//! through `/api/{resource}` on the same origin, which attaches the bearer
//! token and reshapes the query.

use async_trait::async_trait;
use glimit_core::forms::FormPart;
use glimit_core::pagination::DEFAULT_PAGE_SIZE;
use glimit_core::types::DbId;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::multipart::{Form, Part};

use crate::error::ConsoleError;

/// Name of the admin session cookie.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query of one list request, in the console's own parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub sort: Option<(String, SortOrder)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            search: None,
            sort: None,
        }
    }
}

impl ListQuery {
    /// Query pairs as the proxy routes read them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some((by, order)) = &self.sort {
            pairs.push(("sortBy", by.clone()));
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        pairs
    }
}

/// The calls a resource page makes. `path` is the resource path below
/// `/api`, e.g. `categories`.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    async fn list(&self, path: &str, query: &ListQuery) -> Result<serde_json::Value, ConsoleError>;

    async fn create(
        &self,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<serde_json::Value, ConsoleError>;

    async fn update(
        &self,
        path: &str,
        id: DbId,
        parts: Vec<FormPart>,
    ) -> Result<serde_json::Value, ConsoleError>;

    async fn delete(&self, path: &str, id: DbId) -> Result<(), ConsoleError>;
}

/// [`ResourceApi`] over HTTP against the proxy.
#[derive(Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ProxyClient {
    /// * `base_url` - origin of the back office, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Send `admin_token` with every request, as the browser does after login.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url).header(ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.header(COOKIE, format!("{ADMIN_TOKEN_COOKIE}={token}")),
            None => builder,
        }
    }

    // ---- private helpers ----

    /// Return the response on 2xx, else read the proxy's `{ error }` body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ConsoleError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ConsoleError::Upstream {
            status: status.as_u16(),
            message: error_message(&body, status.as_u16()),
        })
    }

    async fn parse_json(response: reqwest::Response) -> Result<serde_json::Value, ConsoleError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ResourceApi for ProxyClient {
    async fn list(&self, path: &str, query: &ListQuery) -> Result<serde_json::Value, ConsoleError> {
        let response = self
            .request(reqwest::Method::GET, self.url(path))
            .query(&query.to_pairs())
            .send()
            .await?;
        Self::parse_json(response).await
    }

    async fn create(
        &self,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<serde_json::Value, ConsoleError> {
        let response = self
            .request(reqwest::Method::POST, self.url(path))
            .multipart(to_form(parts)?)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    async fn update(
        &self,
        path: &str,
        id: DbId,
        parts: Vec<FormPart>,
    ) -> Result<serde_json::Value, ConsoleError> {
        let response = self
            .request(reqwest::Method::PUT, self.url(&format!("{path}/{id}")))
            .multipart(to_form(parts)?)
            .send()
            .await?;
        Self::parse_json(response).await
    }

    async fn delete(&self, path: &str, id: DbId) -> Result<(), ConsoleError> {
        let response = self
            .request(reqwest::Method::DELETE, self.url(&format!("{path}/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Encode form parts as a multipart body, in order.
fn to_form(parts: Vec<FormPart>) -> Result<Form, ConsoleError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File { name, file } => {
                let mut body = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    body = body.mime_str(&content_type)?;
                }
                form.part(name, body)
            }
        };
    }
    Ok(form)
}

/// The `error` (or `message`) of a JSON error body, else a generic line.
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}
