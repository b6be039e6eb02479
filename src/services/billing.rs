//! Console billing endpoints.

use chrono::{DateTime, Utc};

use crate::api::{ApiClient, ApiError};
use crate::models::{BillingEvent, BillingSummary};

use super::DataEnvelope;

pub async fn list_billing_events(
    client: &ApiClient,
    limit: Option<u32>,
    event_type: Option<&str>,
    since: Option<DateTime<Utc>>,
) -> Result<Vec<BillingEvent>, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    if let Some(event_type) = event_type {
        query.push(("type", event_type.to_string()));
    }
    if let Some(since) = since {
        query.push(("since", since.to_rfc3339()));
    }

    let envelope: DataEnvelope<BillingEvent> = if query.is_empty() {
        client.get("/console/billing/events").await?
    } else {
        client
            .get_with_query("/console/billing/events", &query)
            .await?
    };
    Ok(envelope.data)
}

pub async fn billing_summary(client: &ApiClient) -> Result<BillingSummary, ApiError> {
    client.get("/console/billing/summary").await
}
