//! Shared test backend mimicking the console API.
//!
//! Serves the endpoints the client exercises, authenticates requests against
//! an in-memory token allowlist, and records the credential header and query
//! string of every request so tests can assert on what actually went over
//! the wire.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "tok1";
pub const TEST_PASSWORD: &str = "secret";

type ApiResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

#[derive(Default)]
struct BackendState {
    valid_tokens: Mutex<HashSet<String>>,
    seen_tokens: Mutex<Vec<Option<String>>>,
    seen_queries: Mutex<Vec<Option<String>>>,
    rate_limit_hits: Mutex<u32>,
}

#[derive(Clone, Default)]
pub struct TestBackend {
    state: Arc<BackendState>,
}

impl TestBackend {
    pub fn allow_token(&self, token: &str) {
        self.state.valid_tokens.lock().insert(token.to_string());
    }

    pub fn revoke_token(&self, token: &str) {
        self.state.valid_tokens.lock().remove(token);
    }

    /// Serve this many 429 responses on `/limited` before succeeding.
    pub fn set_rate_limit_hits(&self, hits: u32) {
        *self.state.rate_limit_hits.lock() = hits;
    }

    /// Credential header of the most recent request, if any was attached.
    pub fn last_seen_token(&self) -> Option<String> {
        self.state.seen_tokens.lock().last().cloned().flatten()
    }

    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.state.seen_tokens.lock().clone()
    }

    /// Query string of the most recent request.
    pub fn last_seen_query(&self) -> Option<String> {
        self.state.seen_queries.lock().last().cloned().flatten()
    }

    fn record(&self, headers: &HeaderMap, query: Option<String>) {
        let token = headers
            .get("x-session-token")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.state.seen_tokens.lock().push(token);
        self.state.seen_queries.lock().push(query);
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
        let token = headers.get("x-session-token").and_then(|v| v.to_str().ok());
        match token {
            None => Err(unauthorized("missing session token")),
            Some(token) if !self.state.valid_tokens.lock().contains(token) => {
                Err(unauthorized("invalid session"))
            }
            Some(_) => Ok(()),
        }
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message })))
}

fn ok(body: Value) -> ApiResult {
    Ok((StatusCode::OK, Json(body)))
}

async fn login(
    State(backend): State<TestBackend>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    Json(body): Json<Value>,
) -> ApiResult {
    backend.record(&headers, query);
    if body["password"] == TEST_PASSWORD {
        backend.allow_token(TEST_TOKEN);
        ok(json!({
            "session_token": TEST_TOKEN,
            "expires_at": (Utc::now() + Duration::hours(24)).to_rfc3339(),
        }))
    } else {
        Err(unauthorized("invalid credentials"))
    }
}

async fn logout(State(backend): State<TestBackend>, headers: HeaderMap) -> ApiResult {
    backend.record(&headers, None);
    backend.authorize(&headers)?;
    if let Some(token) = headers.get("x-session-token").and_then(|v| v.to_str().ok()) {
        backend.revoke_token(token);
    }
    ok(json!({ "status": "logged_out" }))
}

async fn list_keys(State(backend): State<TestBackend>, headers: HeaderMap) -> ApiResult {
    backend.record(&headers, None);
    backend.authorize(&headers)?;
    ok(json!({
        "data": [{
            "id": "key-1",
            "key_name": "production",
            "key_prefix": "otp_live_",
            "key_last_four": "a9f3",
            "environment": "live",
            "is_active": true,
            "usage_count": 1042,
            "created_at": "2026-07-15T10:00:00Z",
        }]
    }))
}

async fn key_usage(
    State(backend): State<TestBackend>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> ApiResult {
    backend.record(&headers, query);
    backend.authorize(&headers)?;
    if id == "err" {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "query error" })),
        ));
    }
    ok(usage_summary())
}

async fn list_mfa_users(
    State(backend): State<TestBackend>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> ApiResult {
    backend.record(&headers, query);
    backend.authorize(&headers)?;
    ok(json!({
        "data": [{
            "user_id": "alice",
            "account_name": "alice@example.com",
            "issuer": "Example Corp",
            "is_active": true,
            "created_at": "2026-06-01T08:00:00Z",
            "updated_at": "2026-07-01T08:00:00Z",
        }]
    }))
}

async fn billing_events(
    State(backend): State<TestBackend>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> ApiResult {
    backend.record(&headers, query);
    backend.authorize(&headers)?;
    ok(json!({
        "data": [{
            "id": "evt-1",
            "event_type": "invoice.paid",
            "created_at": "2026-07-01T00:00:00Z",
            "payload": { "customer": "cus_123" },
        }]
    }))
}

async fn billing_summary(State(backend): State<TestBackend>, headers: HeaderMap) -> ApiResult {
    backend.record(&headers, None);
    backend.authorize(&headers)?;
    ok(json!({
        "last_invoice": {
            "event_type": "invoice.paid",
            "created_at": "2026-07-01T00:00:00Z",
            "invoice_id": "in_123",
            "amount_due": 4200,
            "amount_paid": 4200,
            "currency": "usd",
            "status": "paid",
        },
        "subscription": {
            "status": "active",
            "current_period_start": "2026-07-01T00:00:00Z",
            "current_period_end": "2026-08-01T00:00:00Z",
        },
    }))
}

async fn customer_usage(
    State(backend): State<TestBackend>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> ApiResult {
    backend.record(&headers, query);
    backend.authorize(&headers)?;
    ok(usage_summary())
}

async fn limited(State(backend): State<TestBackend>, headers: HeaderMap) -> ApiResult {
    backend.record(&headers, None);
    let mut hits = backend.state.rate_limit_hits.lock();
    if *hits > 0 {
        *hits -= 1;
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "rate limited" })),
        ));
    }
    ok(json!({ "ok": true }))
}

fn usage_summary() -> Value {
    json!({
        "total": 120,
        "success": 118,
        "failed": 2,
        "estimated_cost_usd": 0.12,
        "first_event": "2026-07-02T00:00:00Z",
        "last_event": "2026-08-01T12:00:00Z",
        "by_day": [
            { "day": "2026-07-02T00:00:00Z", "total": 60, "success": 59 },
            { "day": "2026-07-03T00:00:00Z", "total": 60, "success": 59 },
        ],
        "by_endpoint": [
            { "endpoint": "/v1/verify", "total": 100, "success": 99 },
            { "endpoint": "/v1/enroll", "total": 20, "success": 19 },
        ],
    })
}

/// Start the backend on an ephemeral port; returns the handle and the base
/// URL to hand to `ApiClient::new`.
pub async fn spawn_backend() -> (TestBackend, String) {
    init_tracing();

    let backend = TestBackend::default();
    let app = Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/console/keys/", get(list_keys))
        .route("/api/v1/console/keys/{id}/usage", get(key_usage))
        .route("/api/v1/console/mfa/", get(list_mfa_users))
        .route("/api/v1/console/billing/events", get(billing_events))
        .route("/api/v1/console/billing/summary", get(billing_summary))
        .route("/api/v1/console/usage/summary", get(customer_usage))
        .route("/api/v1/limited", get(limited))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test backend");
    });

    (backend, format!("http://{}/api/v1", addr))
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
