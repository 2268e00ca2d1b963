//! Fixed virtual account data models and request parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed virtual account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccount {
    /// Unique virtual account identifier
    pub id: String,
    /// Owner's business ID
    pub owner_id: String,
    /// Merchant-provided identifier
    pub external_id: String,
    /// Bank code, e.g. "BNI"
    pub bank_code: String,
    /// Prefix assigned to the merchant by the bank
    pub merchant_code: String,
    /// Name shown to the payer
    pub name: String,
    /// Full virtual account number
    pub account_number: String,
    /// Closed accounts only accept `expected_amount`
    pub is_closed: bool,
    /// Single-use accounts become inactive after one payment
    pub is_single_use: bool,
    /// Status: "PENDING", "ACTIVE" or "INACTIVE"
    pub status: String,
    pub suggested_amount: Option<i64>,
    pub expected_amount: Option<i64>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub currency: Option<String>,
    pub country: Option<String>,
}

/// A bank that can issue virtual accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualAccountBank {
    pub name: String,
    pub code: String,
}

/// A payment received into a virtual account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccountPayment {
    pub id: String,
    /// Bank-side payment identifier
    pub payment_id: String,
    /// ID of the virtual account that received the payment
    pub callback_virtual_account_id: String,
    pub external_id: String,
    pub merchant_code: String,
    pub account_number: String,
    pub bank_code: String,
    pub amount: i64,
    pub transaction_timestamp: DateTime<Utc>,
    pub sender_name: Option<String>,
    pub currency: Option<String>,
}

/// Parameters for creating a virtual account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateVirtualAccount {
    pub external_id: String,
    pub bank_code: String,
    pub name: String,
    /// Requested account number suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateVirtualAccount {
    /// Parameters with the required fields set and every option unset.
    pub fn new(
        external_id: impl Into<String>,
        bank_code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            bank_code: bank_code.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Fields that can be changed on an existing virtual account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVirtualAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
