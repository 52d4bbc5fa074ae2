use axum::routing::get;
use axum::Router;

use crate::handlers::hero_sections;
use crate::state::AppState;

/// Hero section routes mounted at `/api/hero-sections`.
///
/// ```text
/// GET    /        -> list_hero_sections
/// POST   /        -> create_hero_section
/// GET    /{id}    -> get_hero_section
/// PUT    /{id}    -> update_hero_section
/// DELETE /{id}    -> delete_hero_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(hero_sections::list_hero_sections).post(hero_sections::create_hero_section),
        )
        .route(
            "/{id}",
            get(hero_sections::get_hero_section)
                .put(hero_sections::update_hero_section)
                .delete(hero_sections::delete_hero_section),
        )
}
