//! HTTP request builder

use super::Response;
use crate::error::TransportError;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

/// Builder for a single HTTP request.
///
/// `send` performs exactly one exchange. There is no retry loop: a failed
/// request is reported to the caller as-is.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    http_client: reqwest::Client,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url, http_client: reqwest::Client) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            http_client,
        }
    }

    /// Set a header.
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Append URL-encoded query pairs to the request URL.
    pub fn query(mut self, pairs: &[(&str, &str)]) -> Self {
        self.url.query_pairs_mut().extend_pairs(pairs);
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request and get a response.
    pub async fn send(self) -> Result<Response, TransportError> {
        let mut req = self
            .http_client
            .request(self.method, self.url)
            .headers(self.headers);

        if let Some(body) = self.body {
            req = req.body(body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
