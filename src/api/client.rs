//! HTTP pipeline for the console API.
//!
//! Every outbound request goes through `ApiClient`: it attaches the session
//! token when one is present, maps failure statuses to `ApiError`, and runs
//! the session-invalidation protocol when the backend answers 401.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::router::{login_redirect, Navigator, LOGIN_PATH};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Header carrying the session credential, as expected by the console backend.
pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
/// 3 retries with exponential backoff usually succeeds without excessive delay.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
/// 1 second is polite to the server while not making users wait too long.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// API client for the console backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a new API client against `base_url` (e.g. `http://host:8080/api/v1`).
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            session,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    /// Issue a GET request with query parameters and decode the JSON response.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    /// Issue a POST request with a JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    /// Build a request with the session token attached when one is present.
    ///
    /// Attachment never fails the request: a store that could not be seeded
    /// simply yields no token, and the request goes out unauthenticated for
    /// the server to judge.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(token) = self.session.token() {
            request = request.header(SESSION_TOKEN_HEADER, token);
        }
        request
    }

    /// Send a request, retrying on rate limiting with exponential backoff.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let attempt = request
                .try_clone()
                .ok_or_else(|| ApiError::InvalidResponse("request is not retryable".to_string()))?;
            let response = attempt.send().await?;

            match self.check_response(response).await? {
                Some(response) => return Ok(response),
                None => {
                    // Rate limited
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited);
                    }
                    warn!(retry = retries, backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
            }
        }
    }

    /// Classify a response: success passes through, 429 signals a retry,
    /// anything else becomes an `ApiError`. A 401 additionally runs the
    /// session-invalidation protocol before the error is returned.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(Some(response));
        }
        if status.as_u16() == 429 {
            return Ok(None);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        if err.is_unauthorized() {
            self.invalidate_session();
        }
        Err(err)
    }

    /// The invalidation protocol for an unauthorized response:
    /// clear the session, then redirect to the login view unless the client
    /// is already there. The caller still receives the original failure.
    fn invalidate_session(&self) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "session clear failed, removing persisted token directly");
            if let Err(e) = self.session.storage().remove() {
                warn!(error = %e, "failed to remove persisted session token");
            }
        }

        let current = self.navigator.current_location();
        if !current.starts_with(LOGIN_PATH) {
            let target = login_redirect(&current);
            debug!(from = %current, "session invalidated, redirecting to login");
            self.navigator.navigate(&target);
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}
