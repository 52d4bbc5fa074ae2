//! Handlers for `/api/portfolio`.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use glimit_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::admin_token::AdminToken;
use crate::proxy::{self, ListStyle, ProxiedResource, UpdateMethod};
use crate::state::AppState;

pub const PORTFOLIO: ProxiedResource = ProxiedResource {
    path: "portfolio",
    singular: "portfolio item",
    plural: "portfolio items",
    title: "Portfolio item",
    list: ListStyle::Filtered,
    update: UpdateMethod::Post,
};

/// Distinct portfolio category names.
pub const PORTFOLIO_CATEGORIES: ProxiedResource = ProxiedResource {
    path: "portfolio/categories",
    singular: "category",
    plural: "categories",
    title: "Category",
    list: ListStyle::Plain,
    update: UpdateMethod::Post,
};

/// GET /api/portfolio
///
/// Query: optional `category`, `page`, `perPage`.
pub async fn list_portfolio(
    State(state): State<AppState>,
    token: AdminToken,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    proxy::list(&state, &PORTFOLIO, token.as_deref(), &params).await
}

/// GET /api/portfolio/category
pub async fn list_portfolio_categories(
    State(state): State<AppState>,
    token: AdminToken,
) -> AppResult<Response> {
    proxy::list(&state, &PORTFOLIO_CATEGORIES, token.as_deref(), &HashMap::new()).await
}

/// POST /api/portfolio
///
/// Multipart `title`, `category`, `camera`, `alt` and one `image`.
pub async fn create_portfolio_item(
    State(state): State<AppState>,
    token: AdminToken,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::create(&state, &PORTFOLIO, token.as_deref(), multipart).await
}

/// GET /api/portfolio/{id}
pub async fn get_portfolio_item(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::show(&state, &PORTFOLIO, token.as_deref(), id).await
}

/// PUT /api/portfolio/{id}
///
/// Sent upstream as `POST`.
pub async fn update_portfolio_item(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::update(&state, &PORTFOLIO, token.as_deref(), id, multipart).await
}

/// DELETE /api/portfolio/{id}
pub async fn delete_portfolio_item(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::destroy(&state, &PORTFOLIO, token.as_deref(), id).await
}
