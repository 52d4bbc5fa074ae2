//! Extractors for the admin session cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use glimit_core::error::CoreError;

use crate::cookies::{cookie_value, ADMIN_TOKEN_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// The `admin_token` cookie when present. Proxy handlers forward it to the
/// backend as a bearer token; requests without it go through anonymously.
#[derive(Debug, Clone, Default)]
pub struct AdminToken(pub Option<String>);

impl AdminToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AdminToken(cookie_value(&parts.headers, ADMIN_TOKEN_COOKIE)))
    }
}

/// The `admin_token` cookie, required. Rejects with 401 Unauthorized.
///
/// ```ignore
/// async fn admin_only(RequireAdminToken(token): RequireAdminToken) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdminToken(pub String);

impl FromRequestParts<AppState> for RequireAdminToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        cookie_value(&parts.headers, ADMIN_TOKEN_COOKIE)
            .map(RequireAdminToken)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unauthorized".into())))
    }
}
