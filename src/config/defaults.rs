//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default path written by `hookexec init`.
pub const CONFIG_FILE: &str = "hookexec.toml";

/// User-Agent sent by clients the executor builds for itself.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
