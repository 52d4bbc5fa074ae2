//! Admin-triggered booking emails.

use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use glimit_core::models::Booking;
use glimit_core::types::DbId;
use glimit_mailer::{EmailKind, MailError};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::admin_token::RequireAdminToken;
use crate::state::AppState;

/// The admin bookings page sends ids as numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BookingId {
    Number(DbId),
    Text(String),
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingId::Number(id) => write!(f, "{id}"),
            BookingId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub booking_id: BookingId,
    #[serde(default)]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub email_type: EmailKind,
}

/// Why a send attempt failed after authentication and lookup.
#[derive(Debug, thiserror::Error)]
enum SendFailure {
    #[error(transparent)]
    Mail(#[from] MailError),
    #[error("Failed to read booking: {0}")]
    Booking(String),
}

/// POST /api/admin/bookings/send-email
///
/// Body `{ bookingId, customMessage?, emailType? }`. Looks the booking up
/// on the backend with the admin's token, renders the message and sends it
/// to the client. One attempt, no retry. A body that does not parse is
/// answered like any other send failure.
pub async fn send_email(
    State(state): State<AppState>,
    RequireAdminToken(token): RequireAdminToken,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> AppResult<Response> {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Invalid send-email body");
            return Ok(failure_response(&rejection.body_text()));
        }
    };
    let booking_id = input.booking_id.to_string();

    let response = state
        .upstream
        .request(
            Method::GET,
            &format!("admin/bookings/{booking_id}"),
            Some(&token),
        )
        .send()
        .await;

    let response = match response {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            tracing::warn!(%booking_id, status = %r.status(), "Booking lookup failed");
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Err(e) => {
            tracing::error!(%booking_id, error = %e, "Booking lookup request failed");
            return Ok(failure_response(&e.to_string()));
        }
    };

    let result = async {
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SendFailure::Booking(e.to_string()))?;
        let booking = booking_from_body(body)?;
        let notifier = state.notifier.as_ref().ok_or(MailError::NotConfigured)?;
        let message_id = notifier
            .send_booking_message(
                &booking,
                input.custom_message.as_deref().unwrap_or_default(),
                input.email_type,
            )
            .await?;
        Ok::<_, SendFailure>(message_id)
    }
    .await;

    match result {
        Ok(message_id) => {
            tracing::info!(
                %booking_id,
                email_type = ?input.email_type,
                %message_id,
                "Booking email sent",
            );
            Ok(Json(json!({
                "success": true,
                "message": "Email sent successfully",
                "messageId": message_id,
            }))
            .into_response())
        }
        Err(e) => {
            tracing::error!(%booking_id, error = %e, "Booking email failed");
            Ok(failure_response(&e.to_string()))
        }
    }
}

/// The booking is either wrapped as `{ booking: {...} }` or the body itself.
fn booking_from_body(mut body: serde_json::Value) -> Result<Booking, SendFailure> {
    let wrapped = body.get("booking").is_some_and(serde_json::Value::is_object);
    let value = if wrapped { body["booking"].take() } else { body };
    serde_json::from_value(value).map_err(|e| SendFailure::Booking(e.to_string()))
}

fn failure_response(error: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": "Failed to send email",
            "error": error,
        })),
    )
        .into_response()
}
