use axum::routing::post;
use axum::Router;

use crate::handlers::{auth, bookings};
use crate::state::AppState;

/// Admin session and booking routes mounted at `/api/admin`.
///
/// ```text
/// POST /login                   -> login
/// POST /logout                  -> logout
/// POST /bookings/send-email     -> send_email
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/bookings/send-email", post(bookings::send_email))
}
