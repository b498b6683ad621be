//! Provider registry: which models each provider offers, and the factory
//! entry point that turns a selector into a client.

use std::time::Duration;

use tracing::{debug, warn};

use super::client::LlmClient;
use super::credentials::Credentials;
use super::error::{ConfigurationError, Result};
use super::providers::Provider;
use super::selector::Selector;

/// Temperature used when the caller does not pick one.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Timeout applied to every HTTP client the registry builds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// One provider and the models offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    pub provider: Provider,
    pub models: Vec<String>,
}

impl ProviderEntry {
    fn push_model(&mut self, model: String) {
        if self.models.contains(&model) {
            warn!(provider = %self.provider, model = %model, "Ignoring duplicate model");
            return;
        }
        self.models.push(model);
    }
}

/// Immutable table of providers in presentation order.
///
/// Holds exactly one entry per [`Provider`], so provider keys cannot collide.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    entries: Vec<ProviderEntry>,
    timeout: Duration,
}

impl ProviderRegistry {
    /// Built-in model lists, with `ollama_models` as the Ollama list.
    pub fn new<I, S>(ollama_models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<ProviderEntry> = Provider::ALL
            .into_iter()
            .map(|provider| ProviderEntry {
                provider,
                models: Vec::new(),
            })
            .collect();

        for entry in &mut entries {
            for model in entry.provider.default_models() {
                entry.push_model((*model).to_string());
            }
        }

        let registry = Self {
            entries,
            timeout: DEFAULT_TIMEOUT,
        }
        .with_models(Provider::Ollama, ollama_models);

        debug!(
            selectors = registry.entries.iter().map(|e| e.models.len()).sum::<usize>(),
            "Built provider registry"
        );
        registry
    }

    /// Registry whose Ollama models come from `OLLAMA_MODELS` in `credentials`.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.ollama_models())
    }

    pub fn from_env() -> Self {
        Self::from_credentials(&Credentials::from_env())
    }

    /// Append models to a provider's list. Models already listed are skipped.
    pub fn with_models<I, S>(mut self, provider: Provider, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entry_mut(provider);
        for model in models {
            let model: String = model.into();
            let model = model.trim();
            if model.is_empty() {
                continue;
            }
            entry.push_model(model.to_string());
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn entries(&self) -> &[ProviderEntry] {
        &self.entries
    }

    pub fn models(&self, provider: Provider) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.provider == provider)
            .map(|entry| entry.models.as_slice())
            .unwrap_or_default()
    }

    /// Every `"<Provider>: <Model>"` selector, in registry order.
    pub fn enumerate(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .models
                    .iter()
                    .map(|model| Selector::new(entry.provider, model.as_str()).to_string())
            })
            .collect()
    }

    /// Parse `selector` and build a client for it.
    ///
    /// The model does not have to be listed for its provider; the provider's
    /// API is the judge of that.
    pub fn create(
        &self,
        selector: &str,
        temperature: f32,
        credentials: &Credentials,
    ) -> Result<Box<dyn LlmClient>> {
        let selector: Selector = selector.parse()?;
        self.create_from(&selector, temperature, credentials)
    }

    /// Like [`ProviderRegistry::create`] with an already parsed selector.
    pub fn create_from(
        &self,
        selector: &Selector,
        temperature: f32,
        credentials: &Credentials,
    ) -> Result<Box<dyn LlmClient>> {
        if !temperature.is_finite() {
            return Err(ConfigurationError::InvalidTemperature(temperature));
        }

        if !self
            .models(selector.provider)
            .iter()
            .any(|model| *model == selector.model)
        {
            debug!(%selector, "Model is not in the registry, passing it through");
        }

        selector
            .provider
            .build(&selector.model, temperature, credentials, self.timeout)
    }

    fn entry_mut(&mut self, provider: Provider) -> &mut ProviderEntry {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.provider == provider)
            .unwrap_or_else(|| {
                self.entries.push(ProviderEntry {
                    provider,
                    models: Vec::new(),
                });
                self.entries.len() - 1
            });
        &mut self.entries[index]
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
