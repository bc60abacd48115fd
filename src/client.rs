//! Main client implementation for the storefront cart API

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use http::HeaderValue;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::{ClientConfig, LoggingConfig},
    error::{Error, Result, TransportError},
    http::{Method, Transport},
    resources::{Cart, ShippingRates},
    types::ApiResponse,
};

/// Client for a storefront's cart endpoints.
///
/// Every operation performs exactly one HTTP exchange against the configured
/// origin, optionally emits structured log records gated by the immutable
/// [`LoggingConfig`], and surfaces every failure as
/// [`Error::OperationFailed`]. Authentication is deliberately absent: the
/// cart endpoints are session-scoped and rely on the caller's cookie
/// context.
///
/// # Example
///
/// ```rust,no_run
/// use cartkit::{Client, LineItem};
///
/// # async fn example() -> cartkit::Result<()> {
/// let client = Client::new("https://shop.example.com");
/// let cart = client.cart().add_item(LineItem::new(39887860530)).await?;
/// println!("{cart}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Transport bound to the storefront origin.
    transport: Transport,

    /// Read-only logging toggles, threaded through every operation.
    logging: LoggingConfig,

    // Lazy-initialized resources
    cart: OnceLock<Cart>,
    shipping_rates: OnceLock<ShippingRates>,
}

impl Client {
    /// Create a new client for the given storefront origin.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the origin is not a valid http(s)
    /// URL. For fallible construction use [`Client::try_new`] or
    /// [`Client::builder`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::try_new(base_url).expect("failed to build client for the provided origin")
    }

    /// Create a new client for the given storefront origin (fallible
    /// version).
    ///
    /// # Errors
    ///
    /// Returns an error if the origin cannot be parsed as an http(s) URL or
    /// the HTTP client cannot be constructed.
    pub fn try_new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url))
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or invalid, or if the
    /// HTTP client cannot be constructed.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Transport::from_config(&config)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                logging: config.logging,
                cart: OnceLock::new(),
                shipping_rates: OnceLock::new(),
            }),
        })
    }

    /// Access the cart operations.
    pub fn cart(&self) -> &Cart {
        self.inner.cart.get_or_init(|| Cart::new(self.clone()))
    }

    /// Access the shipping-rate operations.
    pub fn shipping_rates(&self) -> &ShippingRates {
        self.inner
            .shipping_rates
            .get_or_init(|| ShippingRates::new(self.clone()))
    }

    /// The logging configuration this client was built with.
    pub fn logging(&self) -> LoggingConfig {
        self.inner.logging
    }

    /// The storefront origin requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.inner.transport.base_url()
    }

    /// Perform a mutating JSON-body exchange.
    pub(crate) async fn execute_json<B: Serialize>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        self.execute(operation, method, path, &[], true, Some(body))
            .await
    }

    /// Perform a body-less exchange, optionally with query parameters.
    pub(crate) async fn execute_bare(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        mutating: bool,
    ) -> Result<ApiResponse> {
        self.execute::<()>(operation, method, path, query, mutating, None)
            .await
    }

    /// The uniform exchange shared by every operation: log arguments, issue
    /// one request, translate any failure into the surfaced error, parse
    /// and log the response.
    async fn execute<B: Serialize>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        mutating: bool,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        match self
            .exchange(operation, method, path, query, mutating, body)
            .await
        {
            Ok(response) => {
                if self.inner.logging.log_responses {
                    debug!(operation, response = %response, "cart operation response");
                }
                Ok(response)
            }
            Err(source) => {
                if self.inner.logging.log_errors {
                    warn!(operation, error = %source, "cart operation failed");
                }
                Err(Error::OperationFailed { operation, source })
            }
        }
    }

    async fn exchange<B: Serialize>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        mutating: bool,
        body: Option<&B>,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let body_value = match body {
            Some(body) => Some(serde_json::to_value(body)?),
            None => None,
        };

        if self.inner.logging.log_arguments && mutating {
            let arguments = body_value.clone().unwrap_or_else(|| query_record(query));
            debug!(operation, arguments = %arguments, "cart operation arguments");
        }

        let mut request = self.inner.transport.request(method, path)?;
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(value) = &body_value {
            request = request
                .header(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )
                .body(serde_json::to_vec(value)?);
        }

        let response = request.send().await?;
        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status().as_u16(),
                body: response.text_lossy(),
            });
        }

        response.json()
    }
}

/// Render query pairs as a JSON object for the arguments log record.
fn query_record(query: &[(&str, &str)]) -> serde_json::Value {
    query
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// Builder for creating a [`Client`] with a fluent API.
///
/// # Example
///
/// ```rust,no_run
/// use cartkit::{Client, LoggingConfig};
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .base_url("https://shop.example.com")
///     .logging(LoggingConfig::new().log_errors(true))
///     .timeout(Duration::from_secs(30))
///     .build()
///     .expect("failed to build client");
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storefront origin. Required.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the logging toggles.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the transport timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the user-agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Add a default header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or invalid, or if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = Client::new("https://shop.example.com");
        assert_eq!(client.base_url(), "https://shop.example.com/");
        assert_eq!(client.logging(), LoggingConfig::default());
    }

    #[test]
    fn test_try_new_rejects_invalid_origin() {
        assert!(Client::try_new("not a url").is_err());
        assert!(Client::try_new("ftp://shop.example.com").is_err());
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = Client::builder().build();
        assert!(matches!(result, Err(Error::MissingConfig("base_url"))));
    }

    #[test]
    fn test_builder_carries_logging_config() {
        let client = Client::builder()
            .base_url("https://shop.example.com")
            .logging(LoggingConfig::verbose())
            .build()
            .unwrap();

        assert!(client.logging().log_arguments);
        assert!(client.logging().log_errors);
        assert!(client.logging().log_responses);
    }

    #[test]
    fn test_resources_are_cached() {
        let client = Client::new("https://shop.example.com");
        let first: *const _ = client.cart();
        let second: *const _ = client.cart();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_clones_share_inner_state() {
        let client = Client::new("https://shop.example.com");
        let clone = client.clone();
        assert_eq!(client.base_url(), clone.base_url());
    }

    #[test]
    fn test_query_record() {
        let record = query_record(&[("shipping_address[zip]", "90210")]);
        assert_eq!(
            record,
            serde_json::json!({"shipping_address[zip]": "90210"})
        );
    }
}
