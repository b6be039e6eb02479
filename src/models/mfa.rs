//! MFA end-user types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An end user enrolled for TOTP MFA under this customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MfaUser {
    pub user_id: String,
    pub account_name: String,
    pub issuer: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enrollment material returned when a user is created or reset.
/// The QR code URL and backup codes are shown exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MfaEnrollment {
    pub qr_code_url: String,
    pub backup_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupCodes {
    pub backup_codes: Vec<String>,
}

/// Request body for enrolling or resetting a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MfaRegistration {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

/// Status filter for listing MFA users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MfaStatusFilter {
    Active,
    Disabled,
    All,
}

impl MfaStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MfaStatusFilter::Active => "active",
            MfaStatusFilter::Disabled => "disabled",
            MfaStatusFilter::All => "all",
        }
    }
}
