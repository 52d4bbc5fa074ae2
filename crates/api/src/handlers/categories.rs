//! Handlers for `/api/categories`.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use glimit_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::admin_token::AdminToken;
use crate::proxy::{self, ListStyle, ProxiedResource, UpdateMethod};
use crate::state::AppState;

pub const CATEGORIES: ProxiedResource = ProxiedResource {
    path: "categories",
    singular: "category",
    plural: "categories",
    title: "Category",
    list: ListStyle::Paged,
    update: UpdateMethod::Put,
};

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    token: AdminToken,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    proxy::list(&state, &CATEGORIES, token.as_deref(), &params).await
}

/// POST /api/categories
///
/// Multipart `name`, optional `description`, one or more `images[]`.
pub async fn create_category(
    State(state): State<AppState>,
    token: AdminToken,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::create(&state, &CATEGORIES, token.as_deref(), multipart).await
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::show(&state, &CATEGORIES, token.as_deref(), id).await
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::update(&state, &CATEGORIES, token.as_deref(), id, multipart).await
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::destroy(&state, &CATEGORIES, token.as_deref(), id).await
}
