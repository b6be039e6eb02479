//! Authentication endpoints.
//!
//! Login and register are unauthenticated; they pass through the pipeline
//! without a credential. Callers store the returned session token via
//! [`SessionStore::set_token`](crate::auth::SessionStore::set_token) and
//! clear it after logout.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::api::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    /// Returned directly in dev deployments; production sends it by email.
    #[serde(default)]
    pub verification_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordResetRequested {
    pub status: String,
    /// Returned directly in dev deployments; production sends it by email.
    #[serde(default)]
    pub reset_token: Option<String>,
}

pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    client
        .post("/auth/login", &json!({ "email": email, "password": password }))
        .await
}

pub async fn logout(client: &ApiClient) -> Result<StatusResponse, ApiError> {
    client.post("/auth/logout", &json!({})).await
}

pub async fn register(
    client: &ApiClient,
    company_name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterResponse, ApiError> {
    client
        .post(
            "/auth/register",
            &json!({
                "company_name": company_name,
                "email": email,
                "password": password,
            }),
        )
        .await
}

pub async fn verify_email(client: &ApiClient, token: &str) -> Result<StatusResponse, ApiError> {
    client
        .post("/auth/verify_email", &json!({ "token": token }))
        .await
}

pub async fn request_password_reset(
    client: &ApiClient,
    email: &str,
) -> Result<PasswordResetRequested, ApiError> {
    client
        .post("/auth/password/request_reset", &json!({ "email": email }))
        .await
}

pub async fn reset_password(
    client: &ApiClient,
    token: &str,
    new_password: &str,
) -> Result<StatusResponse, ApiError> {
    client
        .post(
            "/auth/password/reset",
            &json!({ "token": token, "new_password": new_password }),
        )
        .await
}
