//! Invoices resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::params::{to_body, RequestOptions};
use crate::requestor::ApiRequestor;
use crate::response::decode;
use crate::types::{CreateInvoice, Invoice, ListInvoices};

/// Client for invoice operations.
pub struct InvoicesClient {
    requestor: Arc<ApiRequestor>,
}

impl InvoicesClient {
    /// Create a new invoices client.
    pub fn new(requestor: Arc<ApiRequestor>) -> Self {
        Self { requestor }
    }

    /// Create an invoice.
    ///
    /// # Arguments
    ///
    /// * `params` - Invoice parameters; unset options are not sent
    /// * `options` - `for_user_id`, `idempotency_key` and `api_version` apply
    ///
    /// # Returns
    ///
    /// The created Invoice with its invoice_url
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the API rejects the request.
    pub async fn create(
        &self,
        params: &CreateInvoice,
        options: &RequestOptions,
    ) -> Result<Invoice, Error> {
        let body = to_body(params)?;
        let response = self
            .requestor
            .post(&["v2", "invoices"], Some(&body), options)
            .await?;

        decode("Invoice", response)
    }

    /// Get an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the invoice is not found.
    /// Returns `Error::InvalidParameter` if the ID is empty, `.` or `..`.
    pub async fn get(&self, invoice_id: &str, options: &RequestOptions) -> Result<Invoice, Error> {
        let response = self
            .requestor
            .get(&["v2", "invoices", invoice_id], None::<&()>, options)
            .await?;

        decode("Invoice", response)
    }

    /// Expire an invoice immediately.
    ///
    /// # Returns
    ///
    /// The invoice with status "EXPIRED"
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the invoice is not found or already paid.
    /// Returns `Error::InvalidParameter` if the ID is empty, `.` or `..`.
    pub async fn expire(
        &self,
        invoice_id: &str,
        options: &RequestOptions,
    ) -> Result<Invoice, Error> {
        let response = self
            .requestor
            .post(&["invoices", invoice_id, "expire!"], None, options)
            .await?;

        decode("Invoice", response)
    }

    /// List invoices matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the API rejects the filters.
    pub async fn list_all(
        &self,
        params: &ListInvoices,
        options: &RequestOptions,
    ) -> Result<Vec<Invoice>, Error> {
        let response = self
            .requestor
            .get(&["v2", "invoices"], Some(params), options)
            .await?;

        decode("Invoice", response)
    }
}
