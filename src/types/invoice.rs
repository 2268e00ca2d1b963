//! Invoice data models and request parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::json_list;

/// Bank transfer option attached to an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBank {
    /// Bank code (e.g. "BCA", "MANDIRI")
    pub bank_code: String,
    /// Collection type, e.g. "POOL"
    pub collection_type: String,
    /// Virtual account number to transfer to
    pub bank_account_number: Option<String>,
    /// Amount to transfer
    pub transfer_amount: i64,
    pub bank_branch: String,
    pub account_holder_name: String,
    pub identity_amount: Option<i64>,
}

/// E-wallet option attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceEwallet {
    /// E-wallet type, e.g. "OVO"
    pub ewallet_type: String,
}

/// Retail outlet option attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRetailOutlet {
    /// Retail outlet name, e.g. "ALFAMART"
    pub retail_outlet_name: String,
    pub payment_code: Option<String>,
    pub transfer_amount: Option<i64>,
}

/// Invoice information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice identifier
    pub id: String,
    /// Merchant-provided identifier
    pub external_id: String,
    /// Owner's business ID
    pub user_id: String,
    /// Status: "PENDING", "PAID", "SETTLED" or "EXPIRED"
    pub status: String,
    pub merchant_name: String,
    pub merchant_profile_picture_url: String,
    /// Amount to be paid
    pub amount: i64,
    pub payer_email: String,
    pub description: String,
    /// Checkout page for the payer
    pub invoice_url: String,
    /// When the invoice expires
    pub expiry_date: DateTime<Utc>,
    pub available_banks: Vec<InvoiceBank>,
    pub available_ewallets: Vec<InvoiceEwallet>,
    pub available_retail_outlets: Option<Vec<InvoiceRetailOutlet>>,
    pub should_exclude_credit_card: bool,
    pub should_send_email: bool,
    /// When the invoice was created
    pub created: DateTime<Utc>,
    /// When the invoice was last updated
    pub updated: DateTime<Utc>,
    /// ISO 4217 currency code
    pub currency: String,
    pub paid_amount: Option<i64>,
    pub paid_at: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub bank_code: Option<String>,
    pub payment_channel: Option<String>,
    pub payment_destination: Option<String>,
    pub success_redirect_url: Option<String>,
    pub failure_redirect_url: Option<String>,
    pub fixed_va: Option<bool>,
    pub mid_label: Option<String>,
    pub reminder_date: Option<DateTime<Utc>>,
}

/// Parameters for creating an invoice.
///
/// # Example
///
/// ```rust
/// use xendit::CreateInvoice;
///
/// let params = CreateInvoice {
///     currency: Some("IDR".to_string()),
///     invoice_duration: Some(86_400),
///     ..CreateInvoice::new("invoice-001", "payer@example.com", "Monthly plan", 50_000)
/// };
/// assert_eq!(params.amount, 50_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateInvoice {
    pub external_id: String,
    pub payer_email: String,
    pub description: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_virtual_account_id: Option<String>,
    /// Seconds until the invoice expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_redirect_url: Option<String>,
    /// Restrict the payment methods offered, e.g. `["BCA", "OVO"]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_va: Option<bool>,
    /// Days before expiry to send a reminder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<u32>,
}

impl CreateInvoice {
    /// Parameters with the required fields set and every option unset.
    pub fn new(
        external_id: impl Into<String>,
        payer_email: impl Into<String>,
        description: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            payer_email: payer_email.into(),
            description: description.into(),
            amount,
            ..Default::default()
        }
    }
}

/// Filters for listing invoices. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListInvoices {
    /// e.g. `["PAID", "SETTLED"]`
    #[serde(serialize_with = "json_list", skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_before: Option<DateTime<Utc>>,
    /// Cursor: list invoices after this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_invoice_id: Option<String>,
    #[serde(serialize_with = "json_list", skip_serializing_if = "Option::is_none")]
    pub client_types: Option<Vec<String>>,
    #[serde(serialize_with = "json_list", skip_serializing_if = "Option::is_none")]
    pub payment_channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_payment_id: Option<String>,
}
