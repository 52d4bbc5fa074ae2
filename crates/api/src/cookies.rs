//! The `admin_token` session cookie.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Name of the admin session cookie.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Session lifetime: one day.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24;

/// Value of cookie `name` across all `Cookie` headers. Empty values count
/// as absent.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value that stores the session token.
pub fn session_cookie(token: &str, secure: bool) -> String {
    with_secure(
        format!(
            "{ADMIN_TOKEN_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={SESSION_MAX_AGE_SECS}"
        ),
        secure,
    )
}

/// `Set-Cookie` value that removes the session token.
pub fn clear_session_cookie(secure: bool) -> String {
    with_secure(
        format!("{ADMIN_TOKEN_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0"),
        secure,
    )
}

fn with_secure(cookie: String, secure: bool) -> String {
    if secure {
        format!("{cookie}; Secure")
    } else {
        cookie
    }
}
