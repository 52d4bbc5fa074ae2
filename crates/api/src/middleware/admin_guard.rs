//! Cookie-presence guard for the `/admin` pages.
//!
//! The guard only checks that an `admin_token` cookie is present. Whether
//! the token is valid is for the backend to decide on the first API call.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::cookies::{cookie_value, ADMIN_TOKEN_COOKIE};

/// Admin login page.
pub const LOGIN_PATH: &str = "/admin/login";

/// Landing page after login.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Where a request for `path` must go instead, if anywhere.
///
/// - Any `/admin` page other than the login page without the cookie goes
///   to the login page.
/// - The login page with the cookie goes to the dashboard.
pub fn redirect_target(path: &str, has_token: bool) -> Option<&'static str> {
    if !path.starts_with("/admin") {
        return None;
    }
    let on_login = path.trim_end_matches('/') == LOGIN_PATH;
    match (on_login, has_token) {
        (true, true) => Some(DASHBOARD_PATH),
        (false, false) => Some(LOGIN_PATH),
        _ => None,
    }
}

/// `axum::middleware::from_fn` guard answering `307` redirects.
pub async fn admin_guard(request: Request, next: Next) -> Response {
    let has_token = cookie_value(request.headers(), ADMIN_TOKEN_COOKIE).is_some();
    if let Some(target) = redirect_target(request.uri().path(), has_token) {
        tracing::debug!(path = %request.uri().path(), target, "Redirecting admin page request");
        return Redirect::temporary(target).into_response();
    }
    next.run(request).await
}
