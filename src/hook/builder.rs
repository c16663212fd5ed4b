//! Renders a [`HookConfig`] into a transport-ready [`HttpRequest`].

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};

use crate::config::{ConfigError, HookConfig};

use super::{HttpRequest, RenderError, RenderField, TemplateData, TemplateError, TemplateRenderer};

/// A templated header: parsed name plus the value template.
#[derive(Debug, Clone)]
struct HeaderTemplate {
    /// Name as configured, used to tag render errors
    key: String,
    name: HeaderName,
    template: String,
}

/// Validated, render-ready form of a [`HookConfig`].
///
/// Static parts (header names, content type) are checked once at
/// construction; templated parts are rendered on every [`build`](Self::build).
#[derive(Debug, Clone)]
pub(crate) struct RequestBuilder {
    url: String,
    method: String,
    headers: Vec<HeaderTemplate>,
    content_type: Option<HeaderValue>,
    body: Option<String>,
    strict: bool,
}

impl RequestBuilder {
    /// Validates the static parts of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] for an illegal header name
    /// and [`ConfigError::InvalidHeaderValue`] for an illegal content type.
    pub(crate) fn new(config: &HookConfig) -> Result<Self, ConfigError> {
        let headers = config
            .headers
            .iter()
            .map(|(key, template)| {
                let name = key
                    .parse::<HeaderName>()
                    .map_err(|e| ConfigError::InvalidHeaderName {
                        name: key.clone(),
                        reason: e.to_string(),
                    })?;
                Ok(HeaderTemplate {
                    key: key.clone(),
                    name,
                    template: template.clone(),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let content_type = match config.content_type.as_deref() {
            Some(ct) if !ct.is_empty() => Some(HeaderValue::from_str(ct).map_err(|e| {
                ConfigError::InvalidHeaderValue {
                    name: CONTENT_TYPE.to_string(),
                    reason: e.to_string(),
                }
            })?),
            _ => None,
        };

        Ok(Self {
            url: config.url.clone(),
            method: config.method.clone(),
            headers,
            content_type,
            body: config.body.clone().filter(|b| !b.is_empty()),
            strict: config.strict_templates,
        })
    }

    /// Renders every templated field and assembles the request.
    ///
    /// Rendering order is URL, headers (by name), body, method; the first
    /// failure aborts the build. An empty method resolves to POST when the
    /// rendered body is non-empty and GET otherwise. The configured content
    /// type is applied last and replaces any templated `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] tagged with the field that failed.
    pub(crate) fn build<R>(&self, renderer: &R, data: &TemplateData) -> Result<HttpRequest, RenderError>
    where
        R: TemplateRenderer + ?Sized,
    {
        let url = self.render(renderer, RenderField::Url, &self.url, data)?;
        let headers = self.render_headers(renderer, data)?;

        let body = match &self.body {
            Some(template) => self.render(renderer, RenderField::Body, template, data)?,
            None => String::new(),
        };

        let method = self.render_method(renderer, data, !body.is_empty())?;

        let mut request = HttpRequest::new(method, url);
        request.headers = headers;
        if !body.is_empty() {
            request.body = Some(body.into_bytes());
        }

        Ok(request)
    }

    fn render_headers<R>(&self, renderer: &R, data: &TemplateData) -> Result<HeaderMap, RenderError>
    where
        R: TemplateRenderer + ?Sized,
    {
        let mut headers = HeaderMap::with_capacity(self.headers.len() + 1);

        for header in &self.headers {
            let field = RenderField::Header(header.key.clone());
            let rendered = self.render(renderer, field.clone(), &header.template, data)?;
            let value = HeaderValue::from_str(&rendered).map_err(|e| {
                RenderError::new(
                    field,
                    &header.template,
                    TemplateError::InvalidHeaderValue(e.to_string()),
                )
            })?;
            headers.insert(header.name.clone(), value);
        }

        if let Some(content_type) = &self.content_type {
            headers.insert(CONTENT_TYPE, content_type.clone());
        }

        Ok(headers)
    }

    fn render_method<R>(
        &self,
        renderer: &R,
        data: &TemplateData,
        has_body: bool,
    ) -> Result<Method, RenderError>
    where
        R: TemplateRenderer + ?Sized,
    {
        let rendered = self.render(renderer, RenderField::Method, &self.method, data)?;
        let rendered = rendered.trim();

        if rendered.is_empty() {
            return Ok(if has_body { Method::POST } else { Method::GET });
        }

        rendered.to_ascii_uppercase().parse::<Method>().map_err(|_| {
            RenderError::new(
                RenderField::Method,
                &self.method,
                TemplateError::InvalidMethod(rendered.to_string()),
            )
        })
    }

    fn render<R>(
        &self,
        renderer: &R,
        field: RenderField,
        template: &str,
        data: &TemplateData,
    ) -> Result<String, RenderError>
    where
        R: TemplateRenderer + ?Sized,
    {
        renderer
            .render(template, data, self.strict)
            .map_err(|source| RenderError::new(field, template, source))
    }
}
