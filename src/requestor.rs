//! HTTP requestor shared by all resource clients.
//!
//! Handles authentication, header/body/query wiring and mapping non-2xx
//! responses into [`XenditError`].
//!
//! Paths are passed as segments. Each segment is percent-encoded on its own,
//! so a resource ID containing `/`, `?` or `#` can never change the endpoint.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ApiKey, XenditConfig};
use crate::error::{Error, XenditError};
use crate::params::RequestOptions;

/// HTTP transport for the Xendit API.
///
/// Authenticates with HTTP Basic auth: the secret key as username and an
/// empty password.
pub struct ApiRequestor {
    base_url: Url,
    api_key: ApiKey,
    client: Client,
}

impl ApiRequestor {
    /// Create a requestor from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the base URL
    /// does not parse.
    pub fn new(config: &XenditConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            Error::Configuration(format!("Invalid base URL {:?}: {e}", config.base_url()))
        })?;

        Ok(Self {
            base_url,
            api_key: config.api_key().clone(),
            client,
        })
    }

    /// Send a GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` on a non-2xx response and `Error::Http` on
    /// transport failure.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &[&str],
        query: Option<&Q>,
        options: &RequestOptions,
    ) -> Result<Value, Error> {
        self.request(Method::GET, path, query, None, options).await
    }

    /// Send a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` on a non-2xx response and `Error::Http` on
    /// transport failure.
    pub async fn post(
        &self,
        path: &[&str],
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<Value, Error> {
        self.request(Method::POST, path, None::<&()>, body, options)
            .await
    }

    /// Send a PATCH request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` on a non-2xx response and `Error::Http` on
    /// transport failure.
    pub async fn patch(
        &self,
        path: &[&str],
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<Value, Error> {
        self.request(Method::PATCH, path, None::<&()>, body, options)
            .await
    }

    /// Send a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` on a non-2xx response and `Error::Http` on
    /// transport failure.
    pub async fn delete(&self, path: &[&str], options: &RequestOptions) -> Result<Value, Error> {
        self.request(Method::DELETE, path, None::<&()>, None, options)
            .await
    }

    /// Send a request and return the parsed JSON body of a 2xx response.
    ///
    /// An empty success body is returned as `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Xendit` on a non-2xx response, `Error::Http` on
    /// transport failure, `Error::InvalidParameter` for an empty or dot path
    /// segment and `Error::Configuration` for invalid headers.
    pub async fn request<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&Q>,
        body: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<Value, Error> {
        let url = self.endpoint(path)?;
        let path = url.path().to_string();
        debug!(%method, path = %path, "sending request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .basic_auth(self.api_key.expose(), Some(""))
            .headers(options.to_header_map()?);

        if let Some(q) = query {
            request = request.query(q);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;
        let body = parse_body(&bytes);

        if status.is_success() {
            debug!(%method, path = %path, status = status.as_u16(), "request succeeded");
            return Ok(body);
        }

        let error = XenditError::from_response(status.as_u16(), body);
        warn!(
            %method,
            path = %path,
            status = error.status_code,
            error_code = %error.error_code,
            "request failed"
        );
        Err(Error::Xendit(error))
    }

    /// Build the URL for `segments` under the base URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if a segment is empty, `.` or `..`.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        if let Some(segment) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::InvalidParameter(format!(
                "Invalid path segment {segment:?}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::Configuration(format!("Base URL {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Get the base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

/// Parse a raw response body. Empty bodies become `Null`; bodies that are not
/// JSON are kept as a JSON string.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
