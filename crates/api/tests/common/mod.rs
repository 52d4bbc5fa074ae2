#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use glimit_api::config::ServerConfig;
use glimit_api::router::build_app_router;
use glimit_api::state::AppState;
use glimit_api::upstream::UpstreamClient;
use glimit_mailer::{BookingNotifier, MailError, MailIdentity, MailTransport, OutgoingEmail};

pub const ADMIN_EMAIL: &str = "admin@glimit.test";
pub const STUDIO_EMAIL: &str = "studio@glimit.test";

/// Build a test `ServerConfig` pointing at `api_url`.
pub fn test_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        upstream_timeout_secs: 5,
        max_upload_bytes: 10 * 1024 * 1024,
        api_url: api_url.to_string(),
        asset_base_url: "http://assets.test".to_string(),
        public_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public")),
        production: false,
    }
}

/// The full application router, forwarding to `api_url`.
pub fn build_test_app(api_url: &str, notifier: Option<BookingNotifier>) -> Router {
    let config = test_config(api_url);
    let state = AppState {
        config: Arc::new(config.clone()),
        upstream: UpstreamClient::with_client(reqwest::Client::new(), api_url),
        notifier,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fake content backend
// ---------------------------------------------------------------------------

/// One request the fake backend received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Query pairs in arrival order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .unwrap_or_default()
            .split('&')
            .filter(|p| !p.is_empty())
            .filter_map(|p| p.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    status: StatusCode,
    body: Option<serde_json::Value>,
}

/// A backend on `127.0.0.1:0` that records every request and answers all
/// of them with the same status and body.
pub struct FakeUpstream {
    /// API root to configure the proxy with, e.g. `http://127.0.0.1:4000/api`.
    pub api_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeUpstream {
    /// Answer every request with `status` and JSON `body`.
    pub async fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self::spawn(status, Some(body)).await
    }

    /// Answer every request with `status` and no body.
    pub async fn empty(status: StatusCode) -> Self {
        Self::spawn(status, None).await
    }

    async fn spawn(status: StatusCode, body: Option<serde_json::Value>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: Arc::clone(&requests),
            status,
            body,
        };
        let app = Router::new().fallback(record).with_state(state);
        let addr = serve(app).await;
        Self {
            api_url: format!("http://{addr}/api"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The only request received. Panics unless exactly one arrived.
    pub fn single(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one upstream request");
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(Recorded {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            headers,
            body,
        });
    match state.body {
        Some(body) => (state.status, Json(body)).into_response(),
        None => state.status.into_response(),
    }
}

/// Serve `app` on an ephemeral local port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An API URL nothing listens on.
pub async fn unreachable_api_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

// ---------------------------------------------------------------------------
// Mail
// ---------------------------------------------------------------------------

/// Keeps every email instead of sending it.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        if self.fail {
            return Err(MailError::Build("relay refused the message".into()));
        }
        let mut sent = self.sent.lock().unwrap_or_else(PoisonError::into_inner);
        sent.push(email.clone());
        Ok(format!("<{}@glimit.test>", sent.len()))
    }
}

pub fn notifier(transport: Arc<RecordingTransport>) -> BookingNotifier {
    BookingNotifier::new(
        transport,
        MailIdentity {
            admin_email: ADMIN_EMAIL.to_string(),
            studio_email: STUDIO_EMAIL.to_string(),
        },
    )
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::get(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_json_with_cookie(app, uri, body, None).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::delete(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// A field of a hand-built multipart body.
pub enum Field<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

const BOUNDARY: &str = "glimit-test-boundary";

/// A `multipart/form-data` request with `fields`, carrying `cookie`.
pub fn multipart_request(
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    fields: &[Field<'_>],
) -> Request<Body> {
    let mut body = Vec::new();
    for field in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match field {
            Field::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Field::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"));
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}
