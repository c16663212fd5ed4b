//! Template data and the rendering capability used to build requests.

use std::collections::HashMap;

use handlebars::{Handlebars, handlebars_helper, no_escape};
use serde::Serialize;
use serde_json::Value as JsonValue;
use url::form_urlencoded;

use super::TemplateError;

/// String values made available to hook templates.
///
/// With the default renderer a value stored under `id` is referenced as
/// `{{id}}`. Owned by the caller; rendering only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateData {
    values: HashMap<String, String>,
}

impl TemplateData {
    /// Creates an empty data set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning the updated data set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for TemplateData {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TemplateData {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// The rendering capability consumed by the request builder.
///
/// `strict` selects the missing-key policy: when true, a reference to a key
/// absent from `data` is an error; when false it renders as the engine's
/// empty substitution.
///
/// Any `Fn(&str, &TemplateData, bool) -> Result<String, TemplateError>`
/// closure is a renderer, which keeps the engine swappable.
pub trait TemplateRenderer: Send + Sync {
    /// Renders `template` against `data`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Engine`] on syntax errors, or on missing keys
    /// in strict mode.
    fn render(&self, template: &str, data: &TemplateData, strict: bool)
    -> Result<String, TemplateError>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str, &TemplateData, bool) -> Result<String, TemplateError> + Send + Sync,
{
    fn render(
        &self,
        template: &str,
        data: &TemplateData,
        strict: bool,
    ) -> Result<String, TemplateError> {
        self(template, data, strict)
    }
}

handlebars_helper!(urlencode: |value: Json| {
    let raw = match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    };
    form_urlencoded::byte_serialize(raw.as_bytes()).collect::<String>()
});

/// Default renderer backed by Handlebars.
///
/// # Behavior
///
/// - HTML escaping is disabled: output lands in URLs, headers, and arbitrary
///   bodies, never in HTML.
/// - Missing keys render as `""` in lenient mode and fail in strict mode.
/// - The `urlencode` helper form-encodes its argument (`{{urlencode q}}`
///   turns `hello world` into `hello+world`).
#[derive(Debug)]
pub struct HandlebarsRenderer {
    strict: Handlebars<'static>,
    lenient: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Creates a renderer with the built-in helpers registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strict: Self::registry(true),
            lenient: Self::registry(false),
        }
    }

    fn registry(strict: bool) -> Handlebars<'static> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(strict);
        registry.register_escape_fn(no_escape);
        registry.register_helper("urlencode", Box::new(urlencode));
        registry
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(
        &self,
        template: &str,
        data: &TemplateData,
        strict: bool,
    ) -> Result<String, TemplateError> {
        if template.is_empty() {
            return Ok(String::new());
        }

        let registry = if strict { &self.strict } else { &self.lenient };
        registry
            .render_template(template, data)
            .map_err(|e| TemplateError::Engine(e.to_string()))
    }
}
