//! Handlers for `/api/news`.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use glimit_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::admin_token::AdminToken;
use crate::proxy::{self, ListStyle, ProxiedResource, UpdateMethod};
use crate::state::AppState;

pub const NEWS: ProxiedResource = ProxiedResource {
    path: "news",
    singular: "news item",
    plural: "news",
    title: "News item",
    list: ListStyle::News,
    update: UpdateMethod::PostWithOverrideHeader,
};

/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    token: AdminToken,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    proxy::list(&state, &NEWS, token.as_deref(), &params).await
}

/// POST /api/news
///
/// Multipart `title`, `description`, `date` and one or more `images[]`.
pub async fn create_news(
    State(state): State<AppState>,
    token: AdminToken,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::create(&state, &NEWS, token.as_deref(), multipart).await
}

/// GET /api/news/{id}
pub async fn get_news_item(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::show(&state, &NEWS, token.as_deref(), id).await
}

/// PUT /api/news/{id}
///
/// Sent upstream as `POST` with `X-HTTP-Method-Override: PUT`.
pub async fn update_news_item(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::update(&state, &NEWS, token.as_deref(), id, multipart).await
}

/// DELETE /api/news/{id}
pub async fn delete_news_item(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::destroy(&state, &NEWS, token.as_deref(), id).await
}
