//! Admin login and logout.
//!
//! Login is delegated to the backend. On success its token is stored in
//! the `admin_token` cookie, which the proxy later forwards as a bearer
//! token.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::Method;
use serde_json::json;

use crate::cookies::{clear_session_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::proxy::upstream_error;
use crate::state::AppState;

/// POST /api/admin/login
///
/// Forwards the JSON credentials to `{upstream}/login`. Answers
/// `{ success: true, user }` and sets the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<serde_json::Value>,
) -> AppResult<Response> {
    tracing::info!(
        email = credentials.get("email").and_then(|e| e.as_str()).unwrap_or_default(),
        "Admin login attempt",
    );

    let response = state
        .upstream
        .request(Method::POST, "login", None)
        .json(&credentials)
        .send()
        .await?;
    let status = StatusCode::from_u16(response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let bytes = response.bytes().await?;

    if !status.is_success() {
        tracing::warn!(%status, "Admin login rejected by backend");
        return Err(upstream_error(status, &bytes, "Login failed".to_string()));
    }

    let data: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::InternalError(format!("Login response is not JSON: {e}")))?;
    let token = data
        .get("token")
        .and_then(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::InternalError("Login response has no token".into()))?;

    tracing::info!("Admin logged in");
    let body = json!({
        "success": true,
        "user": data.get("user").cloned().unwrap_or(serde_json::Value::Null),
    });
    Ok((
        [(SET_COOKIE, session_cookie(token, state.config.production))],
        Json(body),
    )
        .into_response())
}

/// POST /api/admin/logout
///
/// Clears the session cookie. Always `204 No Content`.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Admin logged out");
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie(state.config.production))],
    )
}
