//! Disbursement data models and request parameters.

use serde::{Deserialize, Serialize};

/// Payout to a bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disbursement {
    /// Unique disbursement identifier
    pub id: String,
    /// Owner's business ID
    pub user_id: String,
    /// Merchant-provided identifier
    pub external_id: String,
    pub amount: i64,
    /// Destination bank code
    pub bank_code: String,
    pub account_holder_name: String,
    pub disbursement_description: String,
    /// Status: "PENDING", "COMPLETED" or "FAILED"
    pub status: String,
    pub email_to: Option<Vec<String>>,
    pub email_cc: Option<Vec<String>>,
    pub email_bcc: Option<Vec<String>>,
    /// Set when `status` is "FAILED"
    pub failure_code: Option<String>,
    pub is_instant: Option<bool>,
}

/// A bank that can receive disbursements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisbursementBank {
    pub name: String,
    pub code: String,
    pub can_disburse: bool,
    pub can_name_validate: bool,
}

/// Parameters for creating a disbursement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDisbursement {
    pub external_id: String,
    pub bank_code: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub description: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_bcc: Option<Vec<String>>,
}
