//! Console MFA user endpoints.

use serde_json::json;

use crate::api::{ApiClient, ApiError};
use crate::models::{BackupCodes, MfaEnrollment, MfaRegistration, MfaStatusFilter, MfaUser};

use super::DataEnvelope;

pub async fn list_mfa_users(
    client: &ApiClient,
    q: Option<&str>,
    status: Option<MfaStatusFilter>,
) -> Result<Vec<MfaUser>, ApiError> {
    let mut query: Vec<(&str, &str)> = Vec::new();
    if let Some(q) = q {
        query.push(("q", q));
    }
    if let Some(status) = status {
        query.push(("status", status.as_str()));
    }

    let envelope: DataEnvelope<MfaUser> = if query.is_empty() {
        client.get("/console/mfa/").await?
    } else {
        client.get_with_query("/console/mfa/", &query).await?
    };
    Ok(envelope.data)
}

pub async fn create_mfa_user(
    client: &ApiClient,
    registration: &MfaRegistration,
) -> Result<MfaEnrollment, ApiError> {
    client.post("/console/mfa/", registration).await
}

pub async fn disable_mfa_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .post(&format!("/console/mfa/{}/disable", id), &json!({}))
        .await?;
    Ok(())
}

/// Re-enroll a user: a new secret and backup codes are generated and the
/// previous ones stop working.
pub async fn reset_mfa_user(
    client: &ApiClient,
    id: &str,
    account_name: Option<&str>,
    issuer: Option<&str>,
) -> Result<MfaEnrollment, ApiError> {
    let mut body = serde_json::Map::new();
    if let Some(account_name) = account_name {
        body.insert("account_name".to_string(), json!(account_name));
    }
    if let Some(issuer) = issuer {
        body.insert("issuer".to_string(), json!(issuer));
    }
    client
        .post(&format!("/console/mfa/{}/reset", id), &body)
        .await
}

pub async fn regenerate_backup_codes(
    client: &ApiClient,
    id: &str,
) -> Result<BackupCodes, ApiError> {
    client
        .post(&format!("/console/mfa/{}/backup_codes/regenerate", id), &json!({}))
        .await
}

/// URL of the provisioning QR image for embedding in an `<img>` tag.
pub fn qr_image_url(client: &ApiClient, id: &str) -> String {
    format!("{}/console/mfa/{}/qr", client.base_url(), id)
}
