//! Console API key endpoints.

use serde_json::json;

use crate::api::{ApiClient, ApiError};
use crate::models::{ConsoleKey, CreatedKey, UsagePeriod, UsageSummary};

use super::DataEnvelope;

pub async fn list_keys(client: &ApiClient) -> Result<Vec<ConsoleKey>, ApiError> {
    let envelope: DataEnvelope<ConsoleKey> = client.get("/console/keys/").await?;
    Ok(envelope.data)
}

pub async fn create_key(
    client: &ApiClient,
    key_name: &str,
    environment: &str,
) -> Result<CreatedKey, ApiError> {
    client
        .post(
            "/console/keys/",
            &json!({ "key_name": key_name, "environment": environment }),
        )
        .await
}

pub async fn disable_key(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .post(&format!("/console/keys/{}/disable", id), &json!({}))
        .await?;
    Ok(())
}

/// Rotate a key: the old key is disabled and a fresh secret is returned.
pub async fn rotate_key(client: &ApiClient, id: &str) -> Result<CreatedKey, ApiError> {
    client
        .post(&format!("/console/keys/{}/rotate", id), &json!({}))
        .await
}

pub async fn key_usage(
    client: &ApiClient,
    id: &str,
    period: Option<UsagePeriod>,
) -> Result<UsageSummary, ApiError> {
    let path = format!("/console/keys/{}/usage", id);
    match period {
        Some(period) => {
            client
                .get_with_query(&path, &[("period", period.as_str())])
                .await
        }
        None => client.get(&path).await,
    }
}
