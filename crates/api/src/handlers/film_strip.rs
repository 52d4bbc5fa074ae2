//! Handlers for `/api/film-strip`. The film strip has no detail or update
//! endpoint: images are added in batches and deleted one at a time.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use glimit_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::admin_token::AdminToken;
use crate::proxy::{self, ListStyle, ProxiedResource, UpdateMethod};
use crate::state::AppState;

pub const FILM_STRIP: ProxiedResource = ProxiedResource {
    path: "film-strip",
    singular: "film strip image",
    plural: "film strip images",
    title: "Image",
    list: ListStyle::Paged,
    update: UpdateMethod::Post,
};

/// GET /api/film-strip
pub async fn list_images(
    State(state): State<AppState>,
    token: AdminToken,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Response> {
    proxy::list(&state, &FILM_STRIP, token.as_deref(), &params).await
}

/// POST /api/film-strip
///
/// Multipart `images[]`.
pub async fn upload_images(
    State(state): State<AppState>,
    token: AdminToken,
    multipart: Multipart,
) -> AppResult<Response> {
    proxy::create(&state, &FILM_STRIP, token.as_deref(), multipart).await
}

/// DELETE /api/film-strip/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    token: AdminToken,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    proxy::destroy(&state, &FILM_STRIP, token.as_deref(), id).await
}
