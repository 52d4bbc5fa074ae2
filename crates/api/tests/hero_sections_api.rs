//! Integration tests for the hero section proxy endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get_with_cookie, multipart_request, send, FakeUpstream, Field};
use serde_json::json;

const COOKIE: &str = "admin_token=tok-123";

fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Test: list queries are reshaped to the backend's snake_case names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_query_is_reshaped() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "data": [] })).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = get_with_cookie(
        app,
        "/api/hero-sections?page=2&perPage=5&status=active&sortBy=title&sortOrder=asc",
        COOKIE,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        upstream.single().query_pairs(),
        pairs(&[
            ("page", "2"),
            ("per_page", "5"),
            ("sort_by", "title"),
            ("sort_order", "asc"),
            ("status", "active"),
        ])
    );
}

#[tokio::test]
async fn list_query_defaults() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "data": [] })).await;
    let app = common::build_test_app(&upstream.api_url, None);

    get_with_cookie(app, "/api/hero-sections", COOKIE).await;

    assert_eq!(
        upstream.single().query_pairs(),
        pairs(&[
            ("page", "1"),
            ("per_page", "10"),
            ("sort_by", "created_at"),
            ("sort_order", "desc"),
        ])
    );
}

// ---------------------------------------------------------------------------
// Test: updates are POSTed with a `_method=PUT` field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_posts_with_method_field() {
    let upstream = FakeUpstream::json(
        StatusCode::OK,
        json!({ "data": { "id": 3, "status": "inactive", "images": ["hero/a.jpg"] } }),
    )
    .await;
    let app = common::build_test_app(&upstream.api_url, None);

    let request = multipart_request(
        Method::PUT,
        "/api/hero-sections/3",
        Some(COOKIE),
        &[
            Field::Text("status", "inactive"),
            Field::File {
                name: "images[]",
                file_name: "new.png",
                content_type: "image/png",
                bytes: b"png-bytes",
            },
        ],
    );
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "inactive");

    let forwarded = upstream.single();
    assert_eq!(forwarded.method, Method::POST);
    assert_eq!(forwarded.path, "/api/hero-sections/3");
    let body = forwarded.body_text();
    assert!(body.contains("name=\"_method\""));
    assert!(body.contains("PUT"));
    assert!(body.contains("name=\"status\""));
    assert!(body.contains("filename=\"new.png\""));
}

// ---------------------------------------------------------------------------
// Test: show and create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn show_fetches_single_section() {
    let section = json!({ "data": { "id": 3, "status": "active", "images": [] } });
    let upstream = FakeUpstream::json(StatusCode::OK, section.clone()).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let response = get_with_cookie(app, "/api/hero-sections/3", COOKIE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, section);
    assert_eq!(upstream.single().path, "/api/hero-sections/3");
}

#[tokio::test]
async fn create_answers_created() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "data": { "id": 4 } })).await;
    let app = common::build_test_app(&upstream.api_url, None);

    let request = multipart_request(
        Method::POST,
        "/api/hero-sections",
        Some(COOKIE),
        &[Field::Text("status", "active")],
    );
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let forwarded = upstream.single();
    assert_eq!(forwarded.method, Method::POST);
    assert!(!forwarded.body_text().contains("_method"));
}
