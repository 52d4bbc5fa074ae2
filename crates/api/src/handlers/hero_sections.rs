//! Handlers for `/api/hero-sections`.
//!
//! The backend cannot read multipart `PUT` bodies for hero sections, so an
//! update is sent as a `POST` carrying `_method=PUT`.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use glimit_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::admin_token::AdminToken;
use crate::proxy::{self, ListStyle, ProxiedResource, UpdateMethod};
use crate::state::AppState;

pub const HERO_SECTIONS: ProxiedResource = ProxiedResource {
    path: "hero-sections",
    singular: "hero section",
    plural: "hero sections",
    title: "Hero section",
    list: ListStyle::HeroSections,
    update: UpdateMethod::PostWithMethodField,
};

/// GET /api/hero-sections
///
/// Query: `page`, `perPage`, `sortBy`, `sortOrder`, `status`, `search`.
pub async fn list_hero_sections(
    State(state): State<AppState>,
    token: AdminToken,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    proxy::list(&state, &HERO_SECTIONS, token.as_deref(), &params).await
}

/// POST /api/hero-sections
///
/// Multipart `status` and one or more `images[]`.
pub async fn create_hero_section(
    State(state): State<AppState>,
    token: AdminToken,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::create(&state, &HERO_SECTIONS, token.as_deref(), multipart).await
}

/// GET /api/hero-sections/{id}
pub async fn get_hero_section(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::show(&state, &HERO_SECTIONS, token.as_deref(), id).await
}

/// PUT /api/hero-sections/{id}
pub async fn update_hero_section(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::update(&state, &HERO_SECTIONS, token.as_deref(), id, multipart).await
}

/// DELETE /api/hero-sections/{id}
pub async fn delete_hero_section(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::destroy(&state, &HERO_SECTIONS, token.as_deref(), id).await
}
