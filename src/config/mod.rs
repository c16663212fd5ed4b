//! Configuration layer for hookexec.
//!
//! This module provides:
//! - The hook configuration value ([`HookConfig`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated runner configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Runner configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Headers and template data merge by key: a `--header` or `--set` entry
//! replaces the TOML entry with the same key and leaves the others intact.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--strict`, `--insecure`) use OR semantics: if set `true`
//! in either CLI or TOML, the result is `true`.

mod cli;
pub mod defaults;
mod error;
mod hook;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use hook::HookConfig;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
