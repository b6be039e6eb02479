//! Wire types for the console API payloads.
//!
//! Shapes mirror the backend JSON exactly. List endpoints wrap their items
//! in a `{"data": [...]}` envelope, handled by the service wrappers.

pub mod billing;
pub mod key;
pub mod mfa;
pub mod usage;

pub use billing::{BillingEvent, BillingSummary, InvoiceSummary, SubscriptionSummary};
pub use key::{ConsoleKey, CreatedKey};
pub use mfa::{BackupCodes, MfaEnrollment, MfaRegistration, MfaStatusFilter, MfaUser};
pub use usage::{UsageByEndpoint, UsagePeriod, UsagePoint, UsageSummary};
