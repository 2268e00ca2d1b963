//! Parameter extraction.
//!
//! Turns the header-bound options shared by all operations into a
//! `HeaderMap`, and typed request parameters into a JSON body. Unset
//! parameters never reach the wire.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::Error;

/// Act on behalf of a sub-account (XenPlatform).
pub const FOR_USER_ID_HEADER: HeaderName = HeaderName::from_static("for-user-id");
/// Deduplicates retried create requests.
pub const IDEMPOTENCY_KEY_HEADER: HeaderName = HeaderName::from_static("x-idempotency-key");
/// API version to use; the latest version when absent.
pub const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-api-version");
/// Fee rule applied to the transaction (XenPlatform).
pub const WITH_FEE_RULE_HEADER: HeaderName = HeaderName::from_static("with-fee-rule");

/// Header-bound options accepted by every operation.
///
/// # Example
///
/// ```rust
/// use xendit::RequestOptions;
///
/// let options = RequestOptions::new()
///     .for_user_id("5785e6334d7b410667d355c4")
///     .idempotency_key("invoice-2024-0001");
/// let headers = options.to_header_map().unwrap();
/// assert_eq!(headers["for-user-id"], "5785e6334d7b410667d355c4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Sent as `for-user-id`.
    pub for_user_id: Option<String>,
    /// Sent as `x-idempotency-key`.
    pub idempotency_key: Option<String>,
    /// Sent as `x-api-version`.
    pub api_version: Option<String>,
    /// Sent as `with-fee-rule`.
    pub with_fee_rule: Option<String>,
    /// Additional headers sent verbatim.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create options that send no extra headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Act on behalf of the sub-account `for_user_id`.
    #[must_use]
    pub fn for_user_id(mut self, for_user_id: impl Into<String>) -> Self {
        self.for_user_id = Some(for_user_id.into());
        self
    }

    /// Set the idempotency key for a create request.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Pin the API version, e.g. `2020-02-01`.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Apply a XenPlatform fee rule.
    #[must_use]
    pub fn with_fee_rule(mut self, fee_rule_id: impl Into<String>) -> Self {
        self.with_fee_rule = Some(fee_rule_id.into());
        self
    }

    /// Add a header sent verbatim. A later header with the same name
    /// replaces an earlier one.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the header map for a request.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a header name or value is not valid
    /// for HTTP.
    pub fn to_header_map(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        let named = [
            (FOR_USER_ID_HEADER, &self.for_user_id),
            (IDEMPOTENCY_KEY_HEADER, &self.idempotency_key),
            (API_VERSION_HEADER, &self.api_version),
            (WITH_FEE_RULE_HEADER, &self.with_fee_rule),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                let value = header_value(name.as_str(), value)?;
                headers.insert(name, value);
            }
        }

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Configuration(format!("Invalid header name: {name:?}")))?;
            headers.insert(header_name, header_value(name, value)?);
        }

        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Configuration(format!("Invalid value for header {name}")))
}

/// Serialize typed request parameters into a JSON body.
///
/// # Errors
///
/// Returns `Error::Serialization` if the parameters cannot be represented as
/// JSON.
pub fn to_body<T: Serialize>(params: &T) -> Result<Value, Error> {
    serde_json::to_value(params).map_err(Error::from)
}

/// Encode a list query parameter as a JSON array string (`["PAID","SETTLED"]`).
pub(crate) fn json_list<S: Serializer>(
    value: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(items) => {
            let encoded = serde_json::to_string(items).map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&encoded)
        }
        None => serializer.serialize_none(),
    }
}
