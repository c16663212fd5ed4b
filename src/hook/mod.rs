//! Hook layer: templated request construction and execution.
//!
//! This module provides types and traits for:
//! - Template data and rendering ([`TemplateData`], [`TemplateRenderer`], [`HandlebarsRenderer`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Executing a configured hook ([`HookExecutor`])
//!
//! # Errors
//!
//! [`HookError`] separates the stages a call can fail in: rendering
//! (tagged with the failing [`RenderField`]), transport, and reading the
//! response body.

mod builder;
mod client;
mod error;
mod executor;
mod http;
mod template;

#[cfg(test)]
mod test_server;

pub use client::ReqwestClient;
pub use error::{HookError, HttpError, RenderError, RenderField, TemplateError};
pub use executor::HookExecutor;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use template::{HandlebarsRenderer, TemplateData, TemplateRenderer};
