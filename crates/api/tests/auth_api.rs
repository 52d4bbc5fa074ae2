//! Integration tests for admin login, logout and the admin page guard.

mod common;

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{Method, StatusCode};
use common::{body_json, body_text, get, get_with_cookie, post_json, FakeUpstream};
use serde_json::json;

fn credentials() -> serde_json::Value {
    json!({ "email": "admin@glimit.test", "password": "secret" })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_sets_session_cookie() {
    let upstream = FakeUpstream::json(
        StatusCode::OK,
        json!({ "token": "abc123", "user": { "id": 1, "name": "Admin" } }),
    )
    .await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = post_json(app, "/api/admin/login", credentials()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("admin_token=abc123;"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(!cookie.contains("Secure"));

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["user"]["name"], "Admin");

    let forwarded = upstream.single();
    assert_eq!(forwarded.method, Method::POST);
    assert_eq!(forwarded.path, "/api/login");
    assert_eq!(forwarded.header("authorization"), None);
    let sent: serde_json::Value = serde_json::from_slice(&forwarded.body).unwrap();
    assert_eq!(sent, credentials());
}

#[tokio::test]
async fn rejected_login_relays_backend_message() {
    let upstream = FakeUpstream::json(
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Invalid credentials" }),
    )
    .await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = post_json(app, "/api/admin/login", credentials()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
}

#[tokio::test]
async fn rejected_login_without_message_uses_fallback() {
    let upstream = FakeUpstream::empty(StatusCode::UNAUTHORIZED).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = post_json(app, "/api/admin/login", credentials()).await;

    assert_eq!(body_json(response).await["error"], "Login failed");
}

#[tokio::test]
async fn login_without_token_is_internal_error() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "user": { "id": 1 } })).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = post_json(app, "/api/admin/login", credentials()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_clears_cookie() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = post_json(app, "/api/admin/logout", json!({})).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("admin_token=;"));
    assert!(cookie.contains("Max-Age=0"));
}

// ---------------------------------------------------------------------------
// Admin page guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_page_without_cookie_redirects_to_login() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = get(app, "/admin/dashboard").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/admin/login");
}

#[tokio::test]
async fn login_page_is_served_without_cookie() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = get(app, "/admin/login/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Sign in"));
}

#[tokio::test]
async fn login_page_with_cookie_redirects_to_dashboard() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = get_with_cookie(app, "/admin/login", "admin_token=abc123").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/admin/dashboard");
}

#[tokio::test]
async fn dashboard_is_served_with_cookie() {
    let app = common::build_test_app("http://backend.test/api", None);

    let response = get_with_cookie(app, "/admin/dashboard/", "admin_token=abc123").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Dashboard"));
}

#[tokio::test]
async fn api_routes_are_not_guarded() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "data": [] })).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = get(app, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
}
