//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the runner. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::hook::TemplateData;

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::hook::HookConfig;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the runner.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Hook definition with CLI overrides applied
    pub hook: HookConfig,

    /// Template values from `[data]` and `--set`
    pub data: TemplateData,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = if self.hook.method.is_empty() {
            "auto"
        } else {
            self.hook.method.as_str()
        };

        write!(
            f,
            "Config {{ url: {}, method: {}, headers: {}, body: {}, strict: {}, timeout: {}, \
             insecure: {}, values: {} }}",
            self.hook.url,
            method,
            self.hook.headers.len(),
            self.hook.body.is_some(),
            self.hook.strict_templates,
            self.hook.timeout.as_deref().unwrap_or("none"),
            self.hook.insecure_skip_verify,
            self.data.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing from both sources
    /// - A `--header` or `--set` entry is malformed
    /// - The timeout is invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let mut hook = toml.map(|t| t.hook.clone()).unwrap_or_default();

        // Priority: CLI explicit > TOML
        if let Some(url) = &cli.url {
            hook.url.clone_from(url);
        }
        if hook.url.trim().is_empty() {
            return Err(ConfigError::missing(
                field::URL,
                "Use --url or set hook.url in config file",
            ));
        }

        if let Some(method) = &cli.method {
            hook.method.clone_from(method);
        }
        if cli.content_type.is_some() {
            hook.content_type.clone_from(&cli.content_type);
        }
        if cli.body.is_some() {
            hook.body.clone_from(&cli.body);
        }
        if cli.timeout.is_some() {
            hook.timeout.clone_from(&cli.timeout);
        }

        // CLI headers override TOML headers with the same name
        for header_str in &cli.headers {
            let (name, value) = parse_pair("header", header_str, true)?;
            hook.headers.insert(name, value);
        }

        hook.strict_templates |= cli.strict;
        hook.insecure_skip_verify |= cli.insecure;

        // Fail fast; the executor parses it again when building its client
        hook.parse_timeout()?;

        let data = Self::resolve_data(cli, toml)?;

        Ok(Self {
            hook,
            data,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_data(cli: &Cli, toml: Option<&TomlConfig>) -> Result<TemplateData, ConfigError> {
        let mut data = TemplateData::new();

        if let Some(toml) = toml {
            data.extend(toml.data.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        for value_str in &cli.values {
            let (key, value) = parse_pair("data value", value_str, false)?;
            data.insert(key, value);
        }

        Ok(data)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// Splits `Key=Value` (and, when `allow_colon`, `Key: Value`).
///
/// Keys are trimmed. Header values are trimmed too; data values are kept
/// verbatim since surrounding whitespace may be meaningful in a template.
fn parse_pair(
    kind: &'static str,
    s: &str,
    allow_colon: bool,
) -> Result<(String, String), ConfigError> {
    let split = s.split_once('=').or_else(|| {
        if allow_colon {
            s.split_once(':')
        } else {
            None
        }
    });

    match split {
        Some((key, value)) if !key.trim().is_empty() => {
            let value = if allow_colon { value.trim() } else { value };
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidPair {
            kind,
            value: s.to_string(),
        }),
    }
}
