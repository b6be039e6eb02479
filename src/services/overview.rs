//! Aggregate load for the dashboard landing view.

use futures::future::try_join;

use crate::api::{ApiClient, ApiError};
use crate::models::{BillingSummary, UsagePeriod, UsageSummary};

use super::{billing, usage};

#[derive(Debug, Clone)]
pub struct Overview {
    pub usage: UsageSummary,
    pub billing: BillingSummary,
}

/// Fetch the landing-view data in one round: usage for the default period
/// and the billing summary, concurrently. Either failure propagates.
pub async fn fetch_overview(client: &ApiClient) -> Result<Overview, ApiError> {
    let (usage, billing) = try_join(
        usage::customer_usage_summary(client, Some(UsagePeriod::Last30Days)),
        billing::billing_summary(client),
    )
    .await?;
    Ok(Overview { usage, billing })
}
