//! Client handle for the Hugging Face serverless inference API.

use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};

use super::client::{ClientSettings, LlmClient, bearer_headers, build_http_client};
use super::error::Result;

pub const HUGGINGFACE_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Text-generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub repetition_penalty: f32,
    pub temperature: f32,
}

impl GenerationParameters {
    pub fn new(temperature: f32) -> Self {
        Self {
            max_new_tokens: 512,
            do_sample: false,
            repetition_penalty: 1.03,
            temperature,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    settings: ClientSettings,
    parameters: GenerationParameters,
    http: Client,
}

impl HuggingFaceClient {
    /// Task the endpoint is invoked for.
    pub const TASK: &'static str = "text-generation";

    pub fn new(settings: ClientSettings) -> Result<Self> {
        let headers = match &settings.api_key {
            Some(key) => bearer_headers(settings.provider, key)?,
            None => Default::default(),
        };
        let http = build_http_client(&settings, headers)?;
        let parameters = GenerationParameters::new(settings.temperature);
        Ok(Self {
            settings,
            parameters,
            http,
        })
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }

    /// Request body for `inputs`, with the generation parameters attached.
    pub fn request_body(&self, inputs: &str) -> Value {
        json!({
            "inputs": inputs,
            "parameters": self.parameters,
        })
    }
}

impl LlmClient for HuggingFaceClient {
    fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn http(&self) -> &Client {
        &self.http
    }

    // The repository id is part of the path.
    fn endpoint(&self) -> String {
        self.settings.url(&self.settings.model)
    }
}
