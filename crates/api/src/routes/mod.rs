pub mod admin;
pub mod admin_pages;
pub mod categories;
pub mod film_strip;
pub mod health;
pub mod hero_sections;
pub mod news;
pub mod portfolio;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                          list, create
/// /categories/{id}                     get, update (PUT), delete
///
/// /film-strip                          list, upload
/// /film-strip/{id}                     delete
///
/// /hero-sections                       list, create
/// /hero-sections/{id}                  get, update (PUT), delete
///
/// /news                                list, create
/// /news/{id}                           get, update (PUT), delete
///
/// /portfolio                           list, create
/// /portfolio/category                  distinct categories
/// /portfolio/{id}                      get, update (PUT), delete
///
/// /admin/login                         login (public)
/// /admin/logout                        logout
/// /admin/bookings/send-email           email a client about a booking
///
/// /chat                                assistant reply
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/film-strip", film_strip::router())
        .nest("/hero-sections", hero_sections::router())
        .nest("/news", news::router())
        .nest("/portfolio", portfolio::router())
        .nest("/admin", admin::router())
        .route("/chat", post(handlers::chat::reply))
}
