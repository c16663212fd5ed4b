//! Error types for hook rendering and execution.

use std::fmt;

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// Raised by the transport, so an empty or malformed rendered URL
    /// surfaces here rather than during rendering.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// A response arrived but its body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error produced by a [`TemplateRenderer`](super::TemplateRenderer),
/// or by validating what it produced.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template engine rejected the template or failed to render it.
    ///
    /// Under strict mode this includes references to missing keys.
    #[error("{0}")]
    Engine(String),

    /// The rendered method is not a valid HTTP method token.
    #[error("'{0}' is not a valid HTTP method")]
    InvalidMethod(String),

    /// The rendered text is not a legal HTTP header value.
    #[error("rendered value is not a valid header value: {0}")]
    InvalidHeaderValue(String),
}

/// The part of a request a template belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderField {
    /// The URL template.
    Url,
    /// The method template.
    Method,
    /// A header value template, tagged with the header name.
    Header(String),
    /// The body template.
    Body,
}

impl fmt::Display for RenderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => f.write_str("url"),
            Self::Method => f.write_str("method"),
            Self::Header(name) => f.write_str(name),
            Self::Body => f.write_str("body"),
        }
    }
}

/// A templated field failed to render.
#[derive(Debug, Error)]
#[error("Failed to render {field} template '{template}': {source}")]
pub struct RenderError {
    /// Which field failed
    pub field: RenderField,
    /// The literal template text
    pub template: String,
    /// Underlying cause
    #[source]
    pub source: TemplateError,
}

impl RenderError {
    /// Creates a render error for the given field and template.
    #[must_use]
    pub fn new(field: RenderField, template: impl Into<String>, source: TemplateError) -> Self {
        Self {
            field,
            template: template.into(),
            source,
        }
    }
}

/// Error type returned by [`HookExecutor`](super::HookExecutor).
///
/// Each variant is a distinct failure stage so callers can branch on
/// render, transport, and body-read failures without inspecting messages.
/// Construction failures are reported separately as
/// [`ConfigError`](crate::config::ConfigError).
#[derive(Debug, Error)]
pub enum HookError {
    /// A template failed to render. No request was sent.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The request could not be completed over the network.
    #[error("Transport error: {0}")]
    Transport(#[source] HttpError),

    /// A response was received but its body could not be drained.
    #[error("Failed to read response body: {0}")]
    Io(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HookError {
    /// Returns the field that failed to render, if this is a render error.
    #[must_use]
    pub const fn render_field(&self) -> Option<&RenderField> {
        match self {
            Self::Render(e) => Some(&e.field),
            _ => None,
        }
    }

    /// Returns true if the transport reported a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(HttpError::Timeout))
    }
}

impl From<HttpError> for HookError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Body(source) => Self::Io(source),
            other => Self::Transport(other),
        }
    }
}
