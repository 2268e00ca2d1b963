//! Xendit main client.
//!
//! Provides the primary interface for interacting with the Xendit API.

use std::sync::Arc;

use crate::clients::{BalanceClient, DisbursementsClient, InvoicesClient, VirtualAccountsClient};
use crate::config::XenditConfig;
use crate::error::Error;
use crate::requestor::ApiRequestor;

/// Main client for interacting with the Xendit API.
///
/// Aggregates all resource clients over one shared requestor.
///
/// # Example
///
/// ```rust,ignore
/// use xendit::{AccountType, CreateInvoice, RequestOptions, XenditClient, XenditConfig};
///
/// // Create client with explicit configuration
/// let client = XenditClient::new(XenditConfig::new("xnd_development_...")?)?;
///
/// // Or create from environment variables
/// let client = XenditClient::from_env()?;
///
/// // Use resource clients
/// let balance = client.balance().get(AccountType::Cash, &RequestOptions::new()).await?;
/// let invoice = client
///     .invoices()
///     .create(
///         &CreateInvoice::new("invoice-001", "payer@example.com", "Monthly plan", 50_000),
///         &RequestOptions::new().idempotency_key("invoice-001"),
///     )
///     .await?;
/// ```
pub struct XenditClient {
    requestor: Arc<ApiRequestor>,
    balance: BalanceClient,
    invoices: InvoicesClient,
    virtual_accounts: VirtualAccountsClient,
    disbursements: DisbursementsClient,
}

impl XenditClient {
    /// Create a new Xendit client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP requestor cannot be created.
    pub fn new(config: XenditConfig) -> Result<Self, Error> {
        let requestor = Arc::new(ApiRequestor::new(&config)?);

        Ok(Self {
            balance: BalanceClient::new(Arc::clone(&requestor)),
            invoices: InvoicesClient::new(Arc::clone(&requestor)),
            virtual_accounts: VirtualAccountsClient::new(Arc::clone(&requestor)),
            disbursements: DisbursementsClient::new(Arc::clone(&requestor)),
            requestor,
        })
    }

    /// Create a client configured from environment variables.
    ///
    /// See [`XenditConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or
    /// invalid.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(XenditConfig::from_env()?)
    }

    /// Get the underlying requestor (for endpoints without a resource client).
    #[must_use]
    pub fn requestor(&self) -> &Arc<ApiRequestor> {
        &self.requestor
    }

    /// Get the balance client.
    #[must_use]
    pub fn balance(&self) -> &BalanceClient {
        &self.balance
    }

    /// Get the invoices client.
    #[must_use]
    pub fn invoices(&self) -> &InvoicesClient {
        &self.invoices
    }

    /// Get the virtual accounts client.
    #[must_use]
    pub fn virtual_accounts(&self) -> &VirtualAccountsClient {
        &self.virtual_accounts
    }

    /// Get the disbursements client.
    #[must_use]
    pub fn disbursements(&self) -> &DisbursementsClient {
        &self.disbursements
    }
}
