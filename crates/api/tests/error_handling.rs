//! How backend failures and bad input surface to the client.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, multipart_request, send, FakeUpstream, Field};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: backend validation errors are relayed with their status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backend_validation_error_is_relayed() {
    let upstream = FakeUpstream::json(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({
            "message": "The name field is required.",
            "errors": { "name": ["The name field is required."] }
        }),
    )
    .await;
    let app = common::build_test_app(&upstream.api_url, None);

    let request = multipart_request(
        Method::POST,
        "/api/categories",
        Some("admin_token=tok"),
        &[Field::Text("name", "")],
    );
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "The name field is required.");
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["errors"]["name"][0], "The name field is required.");
}

#[tokio::test]
async fn backend_error_key_wins_over_message() {
    let upstream = FakeUpstream::json(
        StatusCode::FORBIDDEN,
        json!({ "error": "Forbidden", "message": "ignored" }),
    )
    .await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = get(app, "/api/news").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Forbidden");
}

// ---------------------------------------------------------------------------
// Test: a failure without a readable body uses the resource's message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backend_error_without_body_uses_fallback_message() {
    let upstream = FakeUpstream::empty(StatusCode::INTERNAL_SERVER_ERROR).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let list = get(app.clone(), "/api/hero-sections").await;
    assert_eq!(list.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(list).await["error"], "Failed to fetch hero sections");

    let show = get(app, "/api/portfolio/9").await;
    assert_eq!(body_json(show).await["error"], "Failed to fetch portfolio item");
}

// ---------------------------------------------------------------------------
// Test: an unreachable backend is an internal error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_backend_is_internal_error() {
    let api_url = common::unreachable_api_url().await;
    let app = common::build_test_app(&api_url, None);

    let response = get(app, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: a non-numeric id is rejected before forwarding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_id_is_rejected_before_forwarding() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({})).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = get(app, "/api/categories/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(upstream.requests().is_empty());
}

// ---------------------------------------------------------------------------
// Test: the chat endpoint rejects blank messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_chat_message_is_bad_request() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = common::post_json(app, "/api/chat", json!({ "message": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Message must not be empty");
}

#[tokio::test]
async fn chat_replies_by_keyword() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = common::post_json(
        app,
        "/api/chat",
        json!({ "message": "How much does it cost?" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["reply"],
        glimit_core::chatbot::PRICING_REPLY
    );
}
