//! Balance resource client.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Error;
use crate::params::RequestOptions;
use crate::requestor::ApiRequestor;
use crate::response::decode;
use crate::types::{AccountType, Balance};

#[derive(Serialize)]
struct BalanceQuery {
    account_type: AccountType,
}

/// Client for balance operations.
pub struct BalanceClient {
    requestor: Arc<ApiRequestor>,
}

impl BalanceClient {
    /// Create a new balance client.
    pub fn new(requestor: Arc<ApiRequestor>) -> Self {
        Self { requestor }
    }

    /// Get the balance of an account.
    ///
    /// # Arguments
    ///
    /// * `account_type` - Which balance to read (default: `AccountType::Cash`)
    /// * `options` - `for_user_id` reads a sub-account's balance (XenPlatform)
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` if the API rejects the request.
    pub async fn get(
        &self,
        account_type: AccountType,
        options: &RequestOptions,
    ) -> Result<Balance, Error> {
        let query = BalanceQuery { account_type };
        let response = self
            .requestor
            .get(&["balance"], Some(&query), options)
            .await?;

        decode("Balance", response)
    }
}
