//! The hook configuration value.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use super::ConfigError;

/// Describes how to build and send one kind of webhook request.
///
/// Every string except `content_type` and `timeout` is a template rendered
/// against the caller's [`TemplateData`](crate::hook::TemplateData) on each
/// execution. Headers live in a `BTreeMap` so they render in name order.
///
/// `timeout` and `insecure_skip_verify` only configure the client an
/// executor builds for itself; they are ignored when a client is injected.
///
/// # Example
///
/// ```
/// use hookexec::config::HookConfig;
///
/// let config = HookConfig::new("https://api.example.com/items/{{id}}")
///     .with_header("X-Source", "{{source}}")
///     .with_content_type("application/json")
///     .with_body(r#"{"id": "{{id}}"}"#)
///     .with_strict_templates(true)
///     .with_timeout("10s");
///
/// assert_eq!(config.headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    /// URL template
    pub url: String,

    /// Method template; empty selects POST or GET from the rendered body
    pub method: String,

    /// Header name to value template
    pub headers: BTreeMap<String, String>,

    /// Content-Type header, applied after templated headers
    pub content_type: Option<String>,

    /// Body template
    pub body: Option<String>,

    /// Treat references to missing keys as render errors
    pub strict_templates: bool,

    /// Overall request timeout, e.g. "500ms" or "30s"
    pub timeout: Option<String>,

    /// Skip TLS certificate verification
    pub insecure_skip_verify: bool,
}

impl HookConfig {
    /// Creates a configuration for the given URL template.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the method template.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adds a header value template.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the Content-Type header.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the body template.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Enables or disables strict template rendering.
    #[must_use]
    pub const fn with_strict_templates(mut self, strict: bool) -> Self {
        self.strict_templates = strict;
        self
    }

    /// Sets the timeout for the default client.
    #[must_use]
    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    /// Enables or disables TLS verification skipping for the default client.
    #[must_use]
    pub const fn with_insecure_skip_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify = insecure;
        self
    }

    /// Parses the timeout string.
    ///
    /// An unset, blank, or zero timeout means no timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDuration`] if the value is not a valid
    /// duration.
    pub fn parse_timeout(&self) -> Result<Option<Duration>, ConfigError> {
        let Some(raw) = self.timeout.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let duration =
            humantime::parse_duration(raw).map_err(|e| ConfigError::InvalidDuration {
                field: "timeout",
                reason: format!("'{raw}': {e}"),
            })?;

        Ok((!duration.is_zero()).then_some(duration))
    }
}
