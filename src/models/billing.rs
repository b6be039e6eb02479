//! Billing types mirrored from the payment provider's webhook events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw billing event. `payload` is the provider's event object, kept
/// opaque for display purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingEvent {
    pub id: String,
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

/// The most recent invoice, condensed. Amounts are in the currency's
/// minor unit (cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub amount_due: Option<i64>,
    #[serde(default)]
    pub amount_paid: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_period_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingSummary {
    #[serde(default)]
    pub last_invoice: Option<InvoiceSummary>,
    #[serde(default)]
    pub subscription: Option<SubscriptionSummary>,
}
