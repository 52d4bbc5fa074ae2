//! Forwarding of admin content requests to the backend.
//!
//! Each content resource is described by a [`ProxiedResource`]: where it lives
//! upstream, how its list query is reshaped and how an update is sent. The
//! functions here do the rest the same way for every resource: forward the
//! bearer token, stream the multipart body part by part, and relay the
//! backend's answer.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use glimit_core::forms::{FormPart, UploadFile};
use glimit_core::pagination::DEFAULT_PAGE_SIZE;
use glimit_core::types::DbId;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Header the news backend reads to treat a POST as a PUT.
pub const METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

/// Form field the hero sections backend reads to treat a POST as a PUT.
pub const METHOD_FIELD: &str = "_method";

/// How a client list query becomes the backend's query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `page`, `perPage`, both defaulted.
    Paged,
    /// `page`, `per_page`, `sort_by`, `sort_order`, optional `status` and
    /// `search`.
    HeroSections,
    /// `per_page` (from `per_page` or `perPage`), `page`.
    News,
    /// `category`, `page`, `perPage`, each only when given.
    Filtered,
    /// No query.
    Plain,
}

/// How an update reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    /// `PUT` with the multipart body.
    Put,
    /// `POST` with an extra `_method=PUT` field.
    PostWithMethodField,
    /// `POST` with `X-HTTP-Method-Override: PUT`.
    PostWithOverrideHeader,
    /// Plain `POST`.
    Post,
}

/// A content resource exposed through the proxy.
#[derive(Debug, Clone, Copy)]
pub struct ProxiedResource {
    /// Backend path below the API root.
    pub path: &'static str,
    /// Lower-case singular used in fallback messages, e.g. `hero section`.
    pub singular: &'static str,
    /// Lower-case plural used in fallback messages.
    pub plural: &'static str,
    /// Title used in the delete confirmation, e.g. `Hero section`.
    pub title: &'static str,
    pub list: ListStyle,
    pub update: UpdateMethod,
}

/// What the client asked the proxy to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Show,
    Create,
    Update,
    Delete,
}

impl ProxiedResource {
    /// Message used when the backend fails without a readable JSON body.
    pub fn fallback_message(&self, action: Action) -> String {
        match action {
            Action::List => format!("Failed to fetch {}", self.plural),
            Action::Show => format!("Failed to fetch {}", self.singular),
            Action::Create => format!("Failed to create {}", self.singular),
            Action::Update => format!("Failed to update {}", self.singular),
            Action::Delete => format!("Failed to delete {}", self.singular),
        }
    }

    fn item_path(&self, id: DbId) -> String {
        format!("{}/{id}", self.path)
    }
}

impl ListStyle {
    /// Reshape the client's query for the backend.
    pub fn upstream_query(self, params: &HashMap<String, String>) -> Vec<(&'static str, String)> {
        let get = |key: &str| params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let page = || get("page").unwrap_or("1").to_string();
        let per_page = || {
            get("perPage")
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_PAGE_SIZE.to_string())
        };

        match self {
            ListStyle::Paged => vec![("page", page()), ("perPage", per_page())],
            ListStyle::HeroSections => {
                let mut query = vec![
                    ("page", page()),
                    ("per_page", per_page()),
                    ("sort_by", get("sortBy").unwrap_or("created_at").to_string()),
                    ("sort_order", get("sortOrder").unwrap_or("desc").to_string()),
                ];
                if let Some(status) = get("status") {
                    query.push(("status", status.to_string()));
                }
                if let Some(search) = get("search") {
                    query.push(("search", search.to_string()));
                }
                query
            }
            ListStyle::News => {
                let per_page = get("per_page")
                    .map(str::to_string)
                    .unwrap_or_else(per_page);
                vec![("per_page", per_page), ("page", page())]
            }
            ListStyle::Filtered => ["category", "page", "perPage"]
                .into_iter()
                .filter_map(|key| get(key).map(|v| (key, v.to_string())))
                .collect(),
            ListStyle::Plain => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// `GET {path}` with the reshaped query. A 2xx list body is relayed as is.
pub async fn list(
    state: &AppState,
    resource: &ProxiedResource,
    token: Option<&str>,
    params: &HashMap<String, String>,
) -> AppResult<Response> {
    let query = resource.list.upstream_query(params);
    tracing::debug!(resource = resource.path, ?query, "Proxying list");
    let response = state
        .upstream
        .request(Method::GET, resource.path, token)
        .query(&query)
        .send()
        .await?;
    relay(resource, Action::List, response).await
}

/// `GET {path}/{id}`.
pub async fn show(
    state: &AppState,
    resource: &ProxiedResource,
    token: Option<&str>,
    id: DbId,
) -> AppResult<Response> {
    let response = state
        .upstream
        .request(Method::GET, &resource.item_path(id), token)
        .send()
        .await?;
    relay(resource, Action::Show, response).await
}

/// `POST {path}` with the client's multipart body. Answers `201 Created`.
pub async fn create(
    state: &AppState,
    resource: &ProxiedResource,
    token: Option<&str>,
    multipart: Multipart,
) -> AppResult<Response> {
    let parts = read_multipart(multipart).await?;
    tracing::info!(resource = resource.path, parts = parts.len(), "Proxying create");
    let response = state
        .upstream
        .request(Method::POST, resource.path, token)
        .multipart(to_form(parts)?)
        .send()
        .await?;
    relay(resource, Action::Create, response).await
}

/// Update `{path}/{id}` the way the resource's backend accepts it.
pub async fn update(
    state: &AppState,
    resource: &ProxiedResource,
    token: Option<&str>,
    id: DbId,
    multipart: Multipart,
) -> AppResult<Response> {
    let mut parts = read_multipart(multipart).await?;
    tracing::info!(resource = resource.path, id, parts = parts.len(), "Proxying update");

    let path = resource.item_path(id);
    let request = match resource.update {
        UpdateMethod::Put => state.upstream.request(Method::PUT, &path, token),
        UpdateMethod::PostWithMethodField => {
            parts.push(FormPart::text(METHOD_FIELD, "PUT"));
            state.upstream.request(Method::POST, &path, token)
        }
        UpdateMethod::PostWithOverrideHeader => state
            .upstream
            .request(Method::POST, &path, token)
            .header(METHOD_OVERRIDE_HEADER, "PUT"),
        UpdateMethod::Post => state.upstream.request(Method::POST, &path, token),
    };

    let response = request.multipart(to_form(parts)?).send().await?;
    relay(resource, Action::Update, response).await
}

/// `DELETE {path}/{id}`. An empty success body becomes a confirmation
/// message.
pub async fn destroy(
    state: &AppState,
    resource: &ProxiedResource,
    token: Option<&str>,
    id: DbId,
) -> AppResult<Response> {
    tracing::info!(resource = resource.path, id, "Proxying delete");
    let response = state
        .upstream
        .request(Method::DELETE, &resource.item_path(id), token)
        .send()
        .await?;
    relay(resource, Action::Delete, response).await
}

// ---------------------------------------------------------------------------
// Body handling
// ---------------------------------------------------------------------------

/// Read every field of the client's multipart body, in order. Fields with a
/// file name are files; everything else is text.
pub async fn read_multipart(mut multipart: Multipart) -> AppResult<Vec<FormPart>> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                parts.push(FormPart::file(
                    name,
                    UploadFile::new(file_name, content_type.as_deref(), bytes.to_vec()),
                ));
            }
            None => {
                let value = field.text().await?;
                parts.push(FormPart::text(name, value));
            }
        }
    }
    Ok(parts)
}

/// Encode parts as an outgoing multipart body, keeping file names and
/// content types.
pub fn to_form(parts: Vec<FormPart>) -> AppResult<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File { name, file } => {
                let mut body = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    body = body.mime_str(&content_type).map_err(|_| {
                        AppError::BadRequest(format!("Invalid content type '{content_type}'"))
                    })?;
                }
                form.part(name, body)
            }
        };
    }
    Ok(form)
}

/// Turn the backend's answer into the proxy's answer.
///
/// - 2xx: the JSON body with the same status (`201` for creates). An empty
///   body becomes a delete confirmation or `{}`. A body that is not JSON
///   is an internal error.
/// - non-2xx: [`AppError::Upstream`] with the backend's `error`/`message`,
///   else the resource's fallback message.
pub async fn relay(
    resource: &ProxiedResource,
    action: Action,
    response: reqwest::Response,
) -> AppResult<Response> {
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let bytes = response.bytes().await?;

    if !status.is_success() {
        tracing::warn!(
            resource = resource.path,
            ?action,
            %status,
            "Upstream returned an error",
        );
        return Err(upstream_error(status, &bytes, resource.fallback_message(action)));
    }

    let status = match action {
        Action::Create => StatusCode::CREATED,
        _ if status == StatusCode::NO_CONTENT => StatusCode::OK,
        _ => status,
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        let body = match action {
            Action::Delete => {
                json!({ "message": format!("{} deleted successfully", resource.title) })
            }
            _ => json!({}),
        };
        return Ok((status, Json(body)).into_response());
    }

    let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        AppError::InternalError(format!(
            "Upstream {} returned a non-JSON body: {e}",
            resource.path
        ))
    })?;
    Ok((status, Json(body)).into_response())
}

/// Build the relayed error for a non-2xx backend answer.
pub fn upstream_error(status: StatusCode, body: &[u8], fallback: String) -> AppError {
    let parsed = serde_json::from_slice::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("error").or_else(|| v.get("message")))
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or(fallback);
    let errors = parsed.and_then(|mut v| v.get_mut("errors").map(serde_json::Value::take));

    AppError::Upstream {
        status,
        message,
        errors,
    }
}
