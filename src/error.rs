//! Error types for the Xendit client.

use serde_json::Value;
use thiserror::Error;

/// Main error type for the Xendit client.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error (connection, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A success response whose body does not match the expected model
    #[error("Invalid {resource} response: {source}")]
    InvalidResponse {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request parameter that cannot be sent, such as an empty resource ID
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Xendit API error
    #[error(transparent)]
    Xendit(#[from] XenditError),
}

impl Error {
    /// The API error, if this error came from a non-2xx response.
    #[must_use]
    pub fn as_xendit(&self) -> Option<&XenditError> {
        match self {
            Self::Xendit(e) => Some(e),
            _ => None,
        }
    }
}

/// A response from the Xendit API with a status outside `[200, 300)`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{status_code}] {error_code}: {message}")]
pub struct XenditError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// `error_code` from the response body, or `UNKNOWN_ERROR`.
    pub error_code: String,
    /// `message` from the response body, or `HTTP <status>`.
    pub message: String,
    /// Raw response body. Non-JSON bodies are kept as a JSON string.
    pub body: Value,
}

impl XenditError {
    /// Build an API error from a status code and raw response body.
    #[must_use]
    pub fn from_response(status_code: u16, body: Value) -> Self {
        let error_code = body
            .get("error_code")
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN_ERROR")
            .to_string();
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| format!("HTTP {status_code}"), String::from);

        Self {
            status_code,
            error_code,
            message,
            body,
        }
    }

    /// 4xx responses.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}
