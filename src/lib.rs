//! hookexec: templated webhook execution.
//!
//! Renders a webhook's URL, method, headers, and body from templates
//! against caller-supplied values, sends the request, and returns the
//! raw response.

pub mod config;
pub mod hook;
