//! Response initialization: JSON body to typed model.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Decode a success body into `T`.
///
/// Required fields are the non-`Option` fields of `T`; a missing or `null`
/// required field fails with `Error::InvalidResponse` naming `resource`.
/// Unknown fields are ignored.
///
/// # Errors
///
/// Returns `Error::InvalidResponse` if the body does not match `T`.
pub fn decode<T: DeserializeOwned>(resource: &'static str, body: Value) -> Result<T, Error> {
    serde_json::from_value(body).map_err(|source| {
        tracing::warn!(resource, error = %source, "response failed validation");
        Error::InvalidResponse { resource, source }
    })
}
