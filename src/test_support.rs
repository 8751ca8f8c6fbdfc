//! Shared fixtures for HTTP-level tests: an in-process mock of the dashboard
//! API and a navigator that records redirects.

use std::sync::{Arc, Mutex, PoisonError};

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::net::pipeline::RequestPipeline;
use crate::router::Navigator;
use crate::session::{MemorySessionStore, Session};

pub(crate) const VALID_TOKEN: &str = "tok1";

/// Bind `app` on an ephemeral localhost port and return its base URL.
pub(crate) async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// HTTP client that ignores proxy env vars so localhost stays local.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub(crate) fn empty_store() -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::default())
}

pub(crate) fn seeded_store(token: &str, account_id: i64) -> Arc<MemorySessionStore> {
    Arc::new(MemorySessionStore::with_session(&Session::new(token, account_id)))
}

pub(crate) fn pipeline(store: Arc<MemorySessionStore>) -> RequestPipeline {
    RequestPipeline::with_client(http_client(), store)
}

// =============================================================================
// MOCK API
// =============================================================================

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "invalid or expired token" })))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "a@b.com" && body["password"] == "x" {
        return (
            StatusCode::OK,
            Json(json!({
                "access_token": VALID_TOKEN,
                "token_type": "bearer",
                "email": "a@b.com",
                "vni_cliente": 42
            })),
        );
    }
    if body["email"] == "min@b.com" && body["password"] == "x" {
        return (StatusCode::OK, Json(json!({ "access_token": "tokmin", "vni_cliente": 5 })));
    }
    if body["email"] == "silent@b.com" {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "bad credentials" })))
}

async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if bearer(&headers) != Some(VALID_TOKEN) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "email": "a@b.com",
            "vni_cliente": 42,
            "traffic_mirror_target_id": "tmt-0123456789",
            "created_at": 1_700_000_000
        })),
    )
}

async fn detections(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if bearer(&headers) != Some(VALID_TOKEN) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "detections": [
                { "id": "d1", "timestamp": 1_700_000_100, "malware_type": "Zeus" },
                { "id": "d2", "timestamp": 1_700_000_200.0, "malware_type": "Emotet" }
            ],
            "total_count": 2,
            "message": "detections retrieved"
        })),
    )
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let read = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(json!({
        "authorization": read("authorization"),
        "content_type": read("content-type"),
        "x_trace": read("x-trace"),
    }))
}

/// Mock of the dashboard API. Accepts `a@b.com` / `x`, issues `tok1`, and
/// only honours `tok1` on protected routes. `min@b.com` / `x` gets a login
/// payload with only the token and account id.
pub(crate) fn mock_api() -> Router {
    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/me", get(me))
        .route("/detections", get(detections))
        .route("/echo", get(echo_headers).post(echo_headers))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "database unavailable" }))) }),
        )
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/garbled", get(|| async { "not json" }))
}

// =============================================================================
// NAVIGATOR DOUBLE
// =============================================================================

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn redirects(&self) -> Vec<String> {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route_name: &str) -> bool {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route_name.to_owned());
        true
    }
}
