//! Storefront HTTP transport
//!
//! Owns the `reqwest` client and the validated storefront origin, and hands
//! out [`RequestBuilder`]s carrying the shared default headers.

use super::{Method, RequestBuilder};
use crate::config::ClientConfig;
use crate::error::{Error, Result, TransportError};
use http::HeaderMap;
use url::Url;

/// HTTP transport bound to a single storefront origin.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl Transport {
    /// Build a transport from client configuration.
    pub(crate) fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url_string = config
            .base_url
            .as_deref()
            .ok_or(Error::MissingConfig("base_url"))?;

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("base URL cannot be empty".to_string()));
        }

        let base_url: Url = base_url_string
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "invalid URL scheme '{}', only 'http' and 'https' are supported",
                    scheme
                )));
            }
        }

        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("cartkit/{}", crate::VERSION));

        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            default_headers: config.default_headers.clone(),
        })
    }

    /// Create a request builder for the given endpoint path.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
    ) -> std::result::Result<RequestBuilder, TransportError> {
        let url = self.base_url.join(path).map_err(|e| {
            TransportError::Url(format!("cannot resolve path '{}': {}", path, e))
        })?;

        let mut builder = RequestBuilder::new(method, url, self.http_client.clone());
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        Ok(builder)
    }

    /// The storefront origin this transport resolves paths against.
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_base_url() {
        let result = Transport::from_config(&ClientConfig::default());
        assert!(matches!(result, Err(Error::MissingConfig("base_url"))));
    }

    #[test]
    fn test_from_config_rejects_empty_base_url() {
        let result = Transport::from_config(&ClientConfig::new("  "));
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_from_config_rejects_bad_scheme() {
        let result = Transport::from_config(&ClientConfig::new("ftp://shop.example.com"));
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_request_resolves_paths_against_origin() {
        let transport = Transport::from_config(&ClientConfig::new("https://shop.example.com"))
            .expect("transport should build");

        let request = transport.request(Method::POST, "/cart/add.js").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://shop.example.com/cart/add.js"
        );
        assert_eq!(transport.base_url(), "https://shop.example.com/");
    }

    #[test]
    fn test_request_carries_default_headers() {
        let mut config = ClientConfig::new("https://shop.example.com");
        config
            .default_headers
            .insert("x-storefront-section", "cart".parse().unwrap());

        let transport = Transport::from_config(&config).unwrap();
        let request = transport.request(Method::GET, "/cart.js").unwrap();
        assert_eq!(
            request.headers().get("x-storefront-section").unwrap(),
            "cart"
        );
    }
}
