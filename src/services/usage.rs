//! Customer-wide usage endpoint.

use crate::api::{ApiClient, ApiError};
use crate::models::{UsagePeriod, UsageSummary};

pub async fn customer_usage_summary(
    client: &ApiClient,
    period: Option<UsagePeriod>,
) -> Result<UsageSummary, ApiError> {
    match period {
        Some(period) => {
            client
                .get_with_query("/console/usage/summary", &[("period", period.as_str())])
                .await
        }
        None => client.get("/console/usage/summary").await,
    }
}
