use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::film_strip;
use crate::state::AppState;

/// Film strip routes mounted at `/api/film-strip`.
///
/// ```text
/// GET    /        -> list_images
/// POST   /        -> upload_images
/// DELETE /{id}    -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(film_strip::list_images).post(film_strip::upload_images),
        )
        .route("/{id}", delete(film_strip::delete_image))
}
