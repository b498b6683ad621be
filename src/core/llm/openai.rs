//! Client handle for the OpenAI chat-completions API and the providers that
//! speak the same protocol (Groq, Mistral, LM Studio).

use reqwest::Client;

use super::client::{ClientSettings, LlmClient, bearer_headers, build_http_client};
use super::error::Result;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1/";
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const MISTRAL_API_BASE: &str = "https://api.mistral.ai/v1";

/// LM Studio accepts any key; this is the one its documentation uses.
pub const LMSTUDIO_API_KEY: &str = "lm-studio";

#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    settings: ClientSettings,
    http: Client,
}

impl OpenAiCompatibleClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let headers = match &settings.api_key {
            Some(key) => bearer_headers(settings.provider, key)?,
            None => Default::default(),
        };
        let http = build_http_client(&settings, headers)?;
        Ok(Self { settings, http })
    }
}

impl LlmClient for OpenAiCompatibleClient {
    fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn http(&self) -> &Client {
        &self.http
    }

    fn endpoint(&self) -> String {
        self.settings.url("chat/completions")
    }
}
