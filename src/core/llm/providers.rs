//! The closed set of supported providers and the single dispatch that turns a
//! provider, model and credentials into a client handle.

use std::fmt;
use std::time::Duration;

use tracing::info;

use super::anthropic::{ANTHROPIC_API_BASE, AnthropicClient};
use super::client::{ApiKey, ClientSettings, LlmClient};
use super::credentials::{
    ANTHROPIC_API_KEY, Credentials, GROQ_API_KEY, HUGGINGFACE_API_KEY, LMSTUDIO_API_BASE,
    MISTRAL_API_KEY, OLLAMA_HOST, OPENAI_API_BASE, OPENAI_API_KEY,
};
use super::error::Result;
use super::huggingface::{HUGGINGFACE_INFERENCE_BASE, HuggingFaceClient};
use super::ollama::OllamaClient;
use super::openai::{
    DEFAULT_OPENAI_API_BASE, GROQ_API_BASE, LMSTUDIO_API_KEY, MISTRAL_API_BASE,
    OpenAiCompatibleClient,
};

/// Completion budget applied to providers that need an explicit one.
pub const DEFAULT_MAX_TOKENS: u32 = 4095;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    OpenAI,
    Groq,
    HuggingFace,
    Anthropic,
    Mistral,
    Ollama,
    LmStudio,
}

impl Provider {
    /// Every provider, in registry order.
    pub const ALL: [Provider; 7] = [
        Provider::OpenAI,
        Provider::Groq,
        Provider::HuggingFace,
        Provider::Anthropic,
        Provider::Mistral,
        Provider::Ollama,
        Provider::LmStudio,
    ];

    /// Name used in selectors and listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Groq => "Groq",
            Provider::HuggingFace => "HUGG",
            Provider::Anthropic => "Anthropic",
            Provider::Mistral => "Mistral.ai",
            Provider::Ollama => "Ollama",
            Provider::LmStudio => "LM Studio",
        }
    }

    /// Exact, case-sensitive match on the display name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.display_name() == name)
    }

    /// Built-in model list. Ollama has none: its models come from the
    /// environment or from discovery.
    pub fn default_models(self) -> &'static [&'static str] {
        match self {
            Provider::OpenAI => &["gpt-4o", "gpt-4o-mini", "gpt-3.5-turbo", "gpt-4-turbo"],
            Provider::Groq => &[
                "groq/llama3-8b-8192",
                "groq/llama3-70b-8192",
                "groq/mixtral-8x7b-32768",
            ],
            Provider::HuggingFace => &["meta-llama/Llama-3.2-3B-Instruct"],
            Provider::Anthropic => &[
                "anthropic/claude-3-sonnet-20240620",
                "claude-3-5-sonnet-20240620",
            ],
            Provider::Mistral => &["mistral/mistral-large-latest"],
            Provider::Ollama => &[],
            Provider::LmStudio => &["lms-default"],
        }
    }

    /// The variable a construction for this provider cannot do without.
    pub fn required_variable(self) -> &'static str {
        match self {
            Provider::OpenAI => OPENAI_API_KEY,
            Provider::Groq => GROQ_API_KEY,
            Provider::HuggingFace => HUGGINGFACE_API_KEY,
            Provider::Anthropic => ANTHROPIC_API_KEY,
            Provider::Mistral => MISTRAL_API_KEY,
            Provider::Ollama => OLLAMA_HOST,
            Provider::LmStudio => LMSTUDIO_API_BASE,
        }
    }

    /// Servers that normally run on the user's machine.
    pub fn is_local(self) -> bool {
        matches!(self, Provider::Ollama | Provider::LmStudio)
    }

    fn routing_prefix(self) -> Option<&'static str> {
        match self {
            Provider::Groq => Some("groq/"),
            Provider::Anthropic => Some("anthropic/"),
            Provider::Mistral => Some("mistral/"),
            _ => None,
        }
    }

    pub fn strip_routing_prefix(self, model: &str) -> &str {
        self.routing_prefix()
            .and_then(|prefix| model.strip_prefix(prefix))
            .unwrap_or(model)
    }

    /// Construct a client for `model`. Reads only from `credentials`.
    pub fn build(
        self,
        model: &str,
        temperature: f32,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Box<dyn LlmClient>> {
        let settings = |base_url: &str, api_key: Option<ApiKey>, max_tokens: Option<u32>| {
            ClientSettings {
                provider: self,
                model: model.to_string(),
                temperature,
                base_url: base_url.to_string(),
                api_key,
                max_tokens,
                timeout,
            }
        };

        let client: Box<dyn LlmClient> = match self {
            Provider::OpenAI => {
                let key = credentials.require(self, OPENAI_API_KEY)?;
                let base = credentials
                    .get(OPENAI_API_BASE)
                    .unwrap_or(DEFAULT_OPENAI_API_BASE);
                Box::new(OpenAiCompatibleClient::new(settings(
                    base,
                    Some(ApiKey::new(key)),
                    None,
                ))?)
            }
            Provider::Groq => {
                let key = credentials.require(self, GROQ_API_KEY)?;
                Box::new(OpenAiCompatibleClient::new(settings(
                    GROQ_API_BASE,
                    Some(ApiKey::new(key)),
                    Some(DEFAULT_MAX_TOKENS),
                ))?)
            }
            Provider::HuggingFace => {
                let key = credentials.require(self, HUGGINGFACE_API_KEY)?;
                Box::new(HuggingFaceClient::new(settings(
                    HUGGINGFACE_INFERENCE_BASE,
                    Some(ApiKey::new(key)),
                    None,
                ))?)
            }
            Provider::Anthropic => {
                let key = credentials.require(self, ANTHROPIC_API_KEY)?;
                Box::new(AnthropicClient::new(settings(
                    ANTHROPIC_API_BASE,
                    Some(ApiKey::new(key)),
                    Some(DEFAULT_MAX_TOKENS),
                ))?)
            }
            Provider::Mistral => {
                let key = credentials.require(self, MISTRAL_API_KEY)?;
                Box::new(OpenAiCompatibleClient::new(settings(
                    MISTRAL_API_BASE,
                    Some(ApiKey::new(key)),
                    Some(DEFAULT_MAX_TOKENS),
                ))?)
            }
            Provider::Ollama => {
                let host = credentials.require(self, OLLAMA_HOST)?;
                Box::new(OllamaClient::new(settings(host, None, None)))
            }
            Provider::LmStudio => {
                let base = credentials.require(self, LMSTUDIO_API_BASE)?;
                Box::new(OpenAiCompatibleClient::new(settings(
                    base,
                    Some(ApiKey::new(LMSTUDIO_API_KEY)),
                    Some(DEFAULT_MAX_TOKENS),
                ))?)
            }
        };

        info!(
            provider = %self,
            model = %model,
            endpoint = %client.endpoint(),
            "Constructed LLM client"
        );
        Ok(client)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
