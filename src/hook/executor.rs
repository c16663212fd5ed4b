//! Hook executor: renders a request per call and sends it.

use tokio_util::sync::CancellationToken;

use crate::config::{ConfigError, HookConfig};

use super::builder::RequestBuilder;
use super::{
    HandlebarsRenderer, HookError, HttpClient, HttpError, HttpResponse, ReqwestClient,
    TemplateData, TemplateRenderer,
};

/// Executes a templated webhook.
///
/// Owns a validated copy of the [`HookConfig`], one HTTP client, and one
/// template renderer, all fixed for the executor's lifetime. Each call to
/// [`execute`](Self::execute) renders a fresh request from the caller's
/// data and sends it once.
///
/// # Type Parameters
///
/// - `C`: The HTTP client implementation (defaults to [`ReqwestClient`])
/// - `R`: The template renderer (defaults to [`HandlebarsRenderer`])
///
/// # Concurrency
///
/// `execute` takes `&self` and keeps no per-call state, so one executor
/// can serve any number of concurrent callers (e.g. behind an `Arc`).
///
/// # Example
///
/// ```no_run
/// use hookexec::config::HookConfig;
/// use hookexec::hook::{HookExecutor, TemplateData};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HookConfig::new("https://api.example.com/items/{{id}}").with_timeout("10s");
/// let executor = HookExecutor::new(config, None)?;
///
/// let data = TemplateData::new().with("id", "42");
/// let response = executor.execute(&CancellationToken::new(), &data).await?;
/// println!("{} {:?}", response.status, response.body_text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HookExecutor<C = ReqwestClient, R = HandlebarsRenderer> {
    builder: RequestBuilder,
    client: C,
    renderer: R,
}

impl HookExecutor<ReqwestClient, HandlebarsRenderer> {
    /// Creates an executor, optionally with a caller-supplied client.
    ///
    /// With `Some(client)` the client is used as-is and the config's
    /// `timeout` and `insecure_skip_verify` are ignored. With `None` a
    /// client is built from those two fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config is structurally invalid
    /// (bad timeout, header name, or content type) or the client cannot
    /// be built. No network access happens here.
    pub fn new(config: HookConfig, client: Option<ReqwestClient>) -> Result<Self, ConfigError> {
        let client = match client {
            Some(client) => client,
            None => {
                ReqwestClient::from_options(config.parse_timeout()?, config.insecure_skip_verify)?
            }
        };

        Self::with_client(config, client)
    }
}

impl<C: HttpClient> HookExecutor<C, HandlebarsRenderer> {
    /// Creates an executor that sends through the given client.
    ///
    /// The config's `timeout` and `insecure_skip_verify` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an invalid header name or content type.
    pub fn with_client(config: HookConfig, client: C) -> Result<Self, ConfigError> {
        Ok(Self {
            builder: RequestBuilder::new(&config)?,
            client,
            renderer: HandlebarsRenderer::new(),
        })
    }
}

impl<C, R> HookExecutor<C, R> {
    /// Replaces the template renderer.
    #[must_use]
    pub fn with_renderer<R2: TemplateRenderer>(self, renderer: R2) -> HookExecutor<C, R2> {
        HookExecutor {
            builder: self.builder,
            client: self.client,
            renderer,
        }
    }

    /// Returns the HTTP client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient, R: TemplateRenderer> HookExecutor<C, R> {
    /// Renders the request from `data` and sends it.
    ///
    /// The request is raced against `cancel`; cancelling drops the
    /// in-flight request. Any HTTP status counts as success here; the
    /// response is returned with its body fully read.
    ///
    /// # Errors
    ///
    /// - [`HookError::Render`] if a template fails; nothing is sent
    /// - [`HookError::Transport`] for timeouts, connection and TLS failures,
    ///   invalid URLs, and cancellation
    /// - [`HookError::Io`] if the response body cannot be read
    pub async fn execute(
        &self,
        cancel: &CancellationToken,
        data: &TemplateData,
    ) -> Result<HttpResponse, HookError> {
        let request = self.builder.build(&self.renderer, data)?;

        tracing::debug!(method = %request.method, url = %request.url, "Sending hook request");

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(HttpError::Cancelled),
            result = self.client.request(request) => result,
        }?;

        tracing::debug!(
            status = %response.status,
            bytes = response.body.len(),
            "Hook response received"
        );

        Ok(response)
    }
}
