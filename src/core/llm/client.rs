use std::fmt::{self, Debug};
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use super::error::{ConfigurationError, Result};
use super::providers::Provider;

/// Trait implemented by every client handle the factory returns.
/// Downstream code can post requests through [`LlmClient::http`] to
/// [`LlmClient::endpoint`] without knowing which provider it is talking to:
/// authentication headers and timeouts are already baked into the HTTP client.
pub trait LlmClient: Send + Sync + Debug {
    /// Everything the handle was constructed with.
    fn settings(&self) -> &ClientSettings;

    /// Pre-configured HTTP client for this provider.
    fn http(&self) -> &Client;

    /// URL of the provider's generation endpoint.
    fn endpoint(&self) -> String;

    fn provider(&self) -> Provider {
        self.settings().provider
    }

    fn model(&self) -> &str {
        &self.settings().model
    }
}

/// An API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First few characters followed by an ellipsis, for display.
    /// Keys too short to spare a prefix print as `***`.
    pub fn redacted(&self) -> String {
        if self.0.chars().count() <= 4 {
            return "***".to_string();
        }
        let prefix: String = self.0.chars().take(4).collect();
        format!("{prefix}…")
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Arguments a client handle was constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub provider: Provider,
    /// Model identifier exactly as selected, routing prefix included.
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub api_key: Option<ApiKey>,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

impl ClientSettings {
    /// Model identifier without the `<provider>/` routing prefix, as the
    /// provider's own API expects it.
    pub fn api_model(&self) -> &str {
        self.provider.strip_routing_prefix(&self.model)
    }

    /// `base_url` joined with `path`, with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `Authorization: Bearer <key>` header map, marked sensitive.
pub(crate) fn bearer_headers(provider: Provider, key: &ApiKey) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose()))
        .map_err(|source| ConfigurationError::InvalidHeader { provider, source })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(reqwest::header::AUTHORIZATION, value);
    Ok(headers)
}

/// Build the underlying reqwest client. Local servers bypass any proxy.
pub(crate) fn build_http_client(settings: &ClientSettings, headers: HeaderMap) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(settings.timeout)
        .default_headers(headers);
    if settings.provider.is_local() {
        builder = builder.no_proxy();
    }

    builder
        .build()
        .map_err(|source| ConfigurationError::HttpClient {
            provider: settings.provider,
            source,
        })
}
