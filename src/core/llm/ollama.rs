use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::client::{ClientSettings, LlmClient, join_url};

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Ask an Ollama host which models it has pulled.
pub async fn list_models(client: &Client, host: &str) -> anyhow::Result<Vec<String>> {
    let url = join_url(host, "api/tags");
    debug!("Listing Ollama models at {}", url);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Failed to list models: {}",
            response.status()
        ));
    }

    let tags: TagsResponse = response.json().await?;
    Ok(tags.models.into_iter().map(|tag| tag.name).collect())
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    settings: ClientSettings,
    http: Client,
}

impl OllamaClient {
    /// Ollama needs no credentials, so construction cannot fail: if the
    /// proxy-free client cannot be built we fall back to the default one.
    pub fn new(settings: ClientSettings) -> Self {
        let http = Client::builder()
            .no_proxy()
            .timeout(settings.timeout)
            .build()
            .unwrap_or_else(|error| {
                warn!(
                    "Failed to build reqwest client with no_proxy, falling back to default client: {}",
                    error
                );
                Client::new()
            });

        Self { settings, http }
    }
}

impl LlmClient for OllamaClient {
    fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn http(&self) -> &Client {
        &self.http
    }

    fn endpoint(&self) -> String {
        self.settings.url("api/chat")
    }
}
