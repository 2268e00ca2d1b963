//! Xendit client for Rust
//!
//! Async client for the Xendit payment API: balances, invoices, fixed
//! virtual accounts and disbursements.
//!
//! # Quick Start
//!
//! ```rust
//! use xendit::{CreateInvoice, RequestOptions, XenditClient, XenditConfig};
//!
//! let config = XenditConfig::new("xnd_development_key").unwrap();
//! let client = XenditClient::new(config).unwrap();
//!
//! // Build invoice parameters; unset options are never sent
//! let params = CreateInvoice::new("invoice-001", "payer@example.com", "Monthly plan", 50_000);
//! let options = RequestOptions::new().idempotency_key("invoice-001");
//! # let _ = (client, params, options);
//! ```
//!
//! Every operation returns `Result<T, Error>`. A non-2xx response becomes
//! [`Error::Xendit`] carrying the status code and raw body.

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod params;
pub mod requestor;
pub mod response;
pub mod types;

// Re-exports
pub use client::XenditClient;
pub use clients::{BalanceClient, DisbursementsClient, InvoicesClient, VirtualAccountsClient};
pub use config::{ApiKey, XenditConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, XenditError};
pub use params::RequestOptions;
pub use requestor::ApiRequestor;
pub use types::{
    AccountType, Balance, CreateDisbursement, CreateInvoice, CreateVirtualAccount, Disbursement,
    DisbursementBank, Invoice, InvoiceBank, InvoiceEwallet, InvoiceRetailOutlet, ListInvoices,
    UpdateVirtualAccount, VirtualAccount, VirtualAccountBank, VirtualAccountPayment,
};
