//! Client handle for Anthropic's native messages API.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::client::{ClientSettings, LlmClient, build_http_client};
use super::error::{ConfigurationError, Result};

pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    settings: ClientSettings,
    http: Client,
}

impl AnthropicClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            HeaderValue::from_static(ANTHROPIC_API_VERSION),
        );
        if let Some(key) = &settings.api_key {
            let mut value = HeaderValue::from_str(key.expose()).map_err(|source| {
                ConfigurationError::InvalidHeader {
                    provider: settings.provider,
                    source,
                }
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http = build_http_client(&settings, headers)?;
        Ok(Self { settings, http })
    }
}

impl LlmClient for AnthropicClient {
    fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn http(&self) -> &Client {
        &self.http
    }

    fn endpoint(&self) -> String {
        self.settings.url("messages")
    }
}
