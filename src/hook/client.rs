//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use crate::config::{ConfigError, defaults};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. `reqwest::Client` pools connections and is
/// cheap to clone, so one instance serves every execution of an executor.
///
/// # Example
///
/// ```no_run
/// use hookexec::hook::{HttpClient, HttpRequest, ReqwestClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let request = HttpRequest::new(http::Method::POST, "https://api.example.com/hook")
///     .with_body(b"hello".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (proxies, root certificates, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Creates an HTTP client with an overall request timeout and
    /// TLS verification policy.
    ///
    /// The timeout covers the whole exchange, from connecting until the
    /// response body has been read. Requests carry a `hookexec/<version>`
    /// User-Agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn from_options(
        timeout: Option<Duration>,
        insecure_skip_verify: bool,
    ) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(defaults::USER_AGENT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if insecure_skip_verify {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder.build().map_err(ConfigError::ClientBuild)?;

        Ok(Self { inner })
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        // Anything failing past this point happened after the response head arrived
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Body(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
