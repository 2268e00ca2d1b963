//! Fixed virtual accounts resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::params::{to_body, RequestOptions};
use crate::requestor::ApiRequestor;
use crate::response::decode;
use crate::types::{
    CreateVirtualAccount, UpdateVirtualAccount, VirtualAccount, VirtualAccountBank,
    VirtualAccountPayment,
};

/// Client for fixed virtual account operations.
pub struct VirtualAccountsClient {
    requestor: Arc<ApiRequestor>,
}

impl VirtualAccountsClient {
    /// Create a new virtual accounts client.
    pub fn new(requestor: Arc<ApiRequestor>) -> Self {
        Self { requestor }
    }

    /// Create a fixed virtual account.
    ///
    /// # Arguments
    ///
    /// * `params` - Account parameters; unset options are not sent
    /// * `options` - `for_user_id`, `idempotency_key` and `api_version` apply
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the API rejects the request, e.g. a
    /// duplicate `external_id` or an unsupported bank.
    pub async fn create(
        &self,
        params: &CreateVirtualAccount,
        options: &RequestOptions,
    ) -> Result<VirtualAccount, Error> {
        let body = to_body(params)?;
        let response = self
            .requestor
            .post(&["callback_virtual_accounts"], Some(&body), options)
            .await?;

        decode("VirtualAccount", response)
    }

    /// List the banks that can issue virtual accounts.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the request fails.
    pub async fn get_banks(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<VirtualAccountBank>, Error> {
        let response = self
            .requestor
            .get(&["available_virtual_account_banks"], None::<&()>, options)
            .await?;

        decode("VirtualAccountBank", response)
    }

    /// Get a virtual account by ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the account is not found.
    /// Returns `Error::InvalidParameter` if the ID is empty, `.` or `..`.
    pub async fn get(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<VirtualAccount, Error> {
        let response = self
            .requestor
            .get(&["callback_virtual_accounts", id], None::<&()>, options)
            .await?;

        decode("VirtualAccount", response)
    }

    /// Update a virtual account. Only the fields set in `params` change.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the account is not found or the update is
    /// rejected.
    /// Returns `Error::InvalidParameter` if the ID is empty, `.` or `..`.
    pub async fn update(
        &self,
        id: &str,
        params: &UpdateVirtualAccount,
        options: &RequestOptions,
    ) -> Result<VirtualAccount, Error> {
        let body = to_body(params)?;
        let response = self
            .requestor
            .patch(&["callback_virtual_accounts", id], Some(&body), options)
            .await?;

        decode("VirtualAccount", response)
    }

    /// Get a payment made into a virtual account.
    ///
    /// # Arguments
    ///
    /// * `payment_id` - The bank-side payment ID from the payment callback
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the payment is not found.
    /// Returns `Error::InvalidParameter` if `payment_id` is empty.
    pub async fn get_payment(
        &self,
        payment_id: &str,
        options: &RequestOptions,
    ) -> Result<VirtualAccountPayment, Error> {
        if payment_id.is_empty() {
            return Err(Error::InvalidParameter("payment_id must not be empty".to_string()));
        }

        let segment = format!("payment_id={payment_id}");
        let response = self
            .requestor
            .get(
                &["callback_virtual_account_payments", &segment],
                None::<&()>,
                options,
            )
            .await?;

        decode("VirtualAccountPayment", response)
    }
}
