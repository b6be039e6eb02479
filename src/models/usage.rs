//! Usage reporting types, shared by the per-key and customer-wide summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Period filter accepted by the usage endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsagePeriod {
    Last24Hours,
    Last7Days,
    Last30Days,
    Last90Days,
    All,
}

impl UsagePeriod {
    /// Wire value for the `period` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UsagePeriod::Last24Hours => "24h",
            UsagePeriod::Last7Days => "7d",
            UsagePeriod::Last30Days => "30d",
            UsagePeriod::Last90Days => "90d",
            UsagePeriod::All => "all",
        }
    }
}

/// One day's worth of request counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsagePoint {
    pub day: DateTime<Utc>,
    pub total: i64,
    pub success: i64,
}

/// Request counts for a single endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageByEndpoint {
    pub endpoint: String,
    pub total: i64,
    pub success: i64,
}

/// Usage summary for a key or for the whole customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total: i64,
    pub success: i64,
    pub failed: i64,
    #[serde(default)]
    pub estimated_cost_usd: f64,
    #[serde(default)]
    pub first_event: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_event: Option<DateTime<Utc>>,
    #[serde(default)]
    pub by_day: Vec<UsagePoint>,
    #[serde(default)]
    pub by_endpoint: Vec<UsageByEndpoint>,
}
