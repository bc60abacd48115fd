//! Configuration for the cart client

use http::HeaderMap;
use std::time::Duration;

/// Logging configuration for a [`Client`](crate::Client).
///
/// Three independent toggles control what the client writes to the log
/// channel. All of them default to off. The configuration is read-only
/// once the client is built; there is no ambient or global logging state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log a record of `{operation, arguments}` before every mutating
    /// request.
    pub log_arguments: bool,

    /// Log the underlying failure message before it is wrapped into the
    /// generic surfaced error. This is the only channel through which the
    /// original error detail is observable.
    pub log_errors: bool,

    /// Log a record of `{operation, response}` after every successful
    /// exchange.
    pub log_responses: bool,
}

impl LoggingConfig {
    /// Create a configuration with all toggles off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with all toggles on.
    pub fn verbose() -> Self {
        Self {
            log_arguments: true,
            log_errors: true,
            log_responses: true,
        }
    }

    /// Set whether mutating operations log their arguments.
    pub fn log_arguments(mut self, enabled: bool) -> Self {
        self.log_arguments = enabled;
        self
    }

    /// Set whether failures log the underlying error message.
    pub fn log_errors(mut self, enabled: bool) -> Self {
        self.log_errors = enabled;
        self
    }

    /// Set whether successful operations log the parsed response.
    pub fn log_responses(mut self, enabled: bool) -> Self {
        self.log_responses = enabled;
        self
    }
}

/// Configuration for the cart client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Storefront origin the cart endpoints are resolved against,
    /// e.g. `https://shop.example.com`. Required.
    pub base_url: Option<String>,

    /// Logging toggles, all off unless set.
    pub logging: LoggingConfig,

    /// Optional timeout applied to the underlying HTTP client.
    ///
    /// The operation API itself offers no deadline or cancellation; this
    /// only bounds the transport. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,

    /// Custom headers to include with every request.
    pub default_headers: HeaderMap,

    /// User-agent header value. A crate default is used when unset.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the given storefront origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }
}

/// Builder for creating a [`ClientConfig`] with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storefront origin.
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

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to
    /// HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults_off() {
        let logging = LoggingConfig::new();
        assert!(!logging.log_arguments);
        assert!(!logging.log_errors);
        assert!(!logging.log_responses);
        assert_eq!(logging, LoggingConfig::default());
    }

    #[test]
    fn test_logging_flags_are_independent() {
        let logging = LoggingConfig::new().log_errors(true);
        assert!(!logging.log_arguments);
        assert!(logging.log_errors);
        assert!(!logging.log_responses);

        assert_eq!(LoggingConfig::verbose(), LoggingConfig {
            log_arguments: true,
            log_errors: true,
            log_responses: true,
        });
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfigBuilder::new()
            .base_url("https://shop.example.com")
            .logging(LoggingConfig::new().log_responses(true))
            .timeout(Duration::from_secs(30))
            .build();

        assert_eq!(
            config.base_url,
            Some("https://shop.example.com".to_string())
        );
        assert!(config.logging.log_responses);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_config_builder_custom_header() {
        let config = ClientConfigBuilder::new()
            .base_url("https://shop.example.com")
            .default_header("X-Storefront-Section", "cart")
            .unwrap()
            .build();

        assert!(config.default_headers.contains_key("x-storefront-section"));
    }

    #[test]
    fn test_config_builder_rejects_invalid_header() {
        let result = ClientConfigBuilder::new().default_header("bad header", "value");
        assert!(matches!(result, Err(crate::Error::InvalidHeaderName(_))));

        let result = ClientConfigBuilder::new().default_header("x-ok", "bad\nvalue");
        assert!(matches!(result, Err(crate::Error::InvalidHeaderValue(_))));
    }
}
