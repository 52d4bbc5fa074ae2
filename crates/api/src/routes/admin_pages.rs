use std::path::Path;

use axum::middleware;
use axum::Router;
use tower_http::services::ServeDir;

use crate::middleware::admin_guard::admin_guard;
use crate::state::AppState;

/// Admin pages under `/admin`, served from `{public_dir}/admin` behind the
/// cookie guard.
///
/// The full request path maps onto `public_dir`, so `/admin/dashboard`
/// serves `admin/dashboard/index.html` and directory redirects keep their
/// `/admin` prefix.
pub fn router(public_dir: &Path) -> Router<AppState> {
    let pages = ServeDir::new(public_dir).append_index_html_on_directories(true);

    Router::new()
        .route_service("/admin", pages.clone())
        .route_service("/admin/{*path}", pages)
        .layer(middleware::from_fn(admin_guard))
}
