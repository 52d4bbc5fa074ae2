use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Content backend the proxy forwards to.
    pub upstream_url: String,
    /// Base URL stored image paths resolve against.
    pub asset_base_url: String,
    /// Whether booking emails can be sent.
    pub mail_enabled: bool,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        upstream_url: state.upstream.base_url().to_string(),
        asset_base_url: state.config.asset_base_url.clone(),
        mail_enabled: state.notifier.is_some(),
    })
}
