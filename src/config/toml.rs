//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{ConfigError, HookConfig};

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Hook definition
    #[serde(default)]
    pub hook: HookConfig,

    /// Default template values, overridable with `--set`
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# hookexec configuration file
#
# Every string in [hook] except content_type and timeout is a Handlebars
# template rendered against the values in [data] and `--set KEY=VALUE`.
# Example: url = "https://api.example.com/items/{{id}}?q={{urlencode query}}"

[hook]
# URL template (required here or via --url)
# url = "https://api.example.com/hook/{{id}}"

# HTTP method template (default: POST when the rendered body is non-empty, else GET)
# method = "PUT"

# Content-Type header; wins over a Content-Type entry in [hook.headers]
# content_type = "application/json"

# Body template
# body = '{"id": "{{id}}", "message": "{{message}}"}'

# Fail when a template references a key that has no value (default: false)
strict_templates = true

# Overall request timeout, e.g. "500ms", "10s", "1m" (default: none)
timeout = "30s"

# Skip TLS certificate verification (default: false)
# insecure_skip_verify = false

# Header value templates
# [hook.headers]
# X-Request-Source = "{{source}}"

[data]
# Default template values; `--set KEY=VALUE` overrides them
# source = "hookexec"
"#
    .to_string()
}
