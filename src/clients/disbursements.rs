//! Disbursements resource client.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Error;
use crate::params::{to_body, RequestOptions};
use crate::requestor::ApiRequestor;
use crate::response::decode;
use crate::types::{CreateDisbursement, Disbursement, DisbursementBank};

#[derive(Serialize)]
struct ExternalIdQuery<'a> {
    external_id: &'a str,
}

/// Client for disbursement operations.
pub struct DisbursementsClient {
    requestor: Arc<ApiRequestor>,
}

impl DisbursementsClient {
    /// Create a new disbursements client.
    pub fn new(requestor: Arc<ApiRequestor>) -> Self {
        Self { requestor }
    }

    /// Send money to a bank account.
    ///
    /// # Arguments
    ///
    /// * `params` - Destination, amount and description
    /// * `options` - `idempotency_key` is strongly advised; `for_user_id` and
    ///   `with_fee_rule` apply for XenPlatform
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the API rejects the request, e.g. on
    /// insufficient balance.
    pub async fn create(
        &self,
        params: &CreateDisbursement,
        options: &RequestOptions,
    ) -> Result<Disbursement, Error> {
        let body = to_body(params)?;
        let response = self
            .requestor
            .post(&["disbursements"], Some(&body), options)
            .await?;

        decode("Disbursement", response)
    }

    /// Get a disbursement by ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the disbursement is not found.
    /// Returns `Error::InvalidParameter` if the ID is empty, `.` or `..`.
    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<Disbursement, Error> {
        let response = self
            .requestor
            .get(&["disbursements", id], None::<&()>, options)
            .await?;

        decode("Disbursement", response)
    }

    /// Get all disbursements created with an external ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if none are found.
    pub async fn get_by_ext_id(
        &self,
        external_id: &str,
        options: &RequestOptions,
    ) -> Result<Vec<Disbursement>, Error> {
        let query = ExternalIdQuery { external_id };
        let response = self
            .requestor
            .get(&["disbursements"], Some(&query), options)
            .await?;

        decode("Disbursement", response)
    }

    /// List the banks that can receive disbursements.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the request fails.
    pub async fn get_available_banks(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<DisbursementBank>, Error> {
        let response = self
            .requestor
            .get(&["available_disbursements_banks"], None::<&()>, options)
            .await?;

        decode("DisbursementBank", response)
    }
}
