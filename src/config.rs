//! Configuration management for LLMForge.
//!
//! An optional configuration file adjusts the factory: default temperature,
//! HTTP timeout, extra models per provider and credential overrides. Values
//! that are not set fall back to the environment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::llm::credentials::VARIABLES;
use crate::core::llm::{Credentials, DEFAULT_TEMPERATURE, Provider, ProviderRegistry};

/// Application configuration
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgeConfig {
    /// Temperature used when none is given on the command line
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Dotenv file to read credentials from
    #[serde(default)]
    pub env_file: Option<PathBuf>,

    /// Timeout for every constructed HTTP client, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Extra models, keyed by provider display name
    #[serde(default)]
    pub models: BTreeMap<String, Vec<String>>,

    /// Values that take precedence over the environment, keyed by variable name
    #[serde(default)]
    pub credentials: BTreeMap<String, String>,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            env_file: None,
            request_timeout_secs: default_request_timeout_secs(),
            models: BTreeMap::new(),
            credentials: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for ForgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForgeConfig")
            .field("temperature", &self.temperature)
            .field("env_file", &self.env_file)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("models", &self.models)
            .field("credentials", &self.credentials.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

pub fn default_request_timeout_secs() -> u64 {
    60
}

impl ForgeConfig {
    /// Create a new configuration from a file path (auto-detect format by extension)
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to parse JSON config file '{}': {}",
                    path.display(),
                    e
                )
            })?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to parse YAML config file '{}': {}",
                    path.display(),
                    e
                )
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to parse TOML config file '{}': {}",
                    path.display(),
                    e
                )
            })?,
            Some(ext) => {
                return Err(anyhow::anyhow!(
                    "Unsupported config format: {} (file: {})",
                    ext,
                    path.display()
                ));
            }
            None => {
                return Err(anyhow::anyhow!(
                    "Config file has no extension, cannot determine format: {}",
                    path.display()
                ));
            }
        };

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.temperature.is_finite() {
            return Err(anyhow::anyhow!(
                "Temperature {} is not a finite number",
                self.temperature
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "request_timeout_secs must be greater than 0"
            ));
        }

        for provider in self.models.keys() {
            if Provider::from_display_name(provider).is_none() {
                return Err(anyhow::anyhow!(
                    "Unknown provider '{}' in models section",
                    provider
                ));
            }
        }

        for variable in self.credentials.keys() {
            if !VARIABLES.iter().any(|known| *known == variable.as_str()) {
                return Err(anyhow::anyhow!(
                    "Unknown variable '{}' in credentials section",
                    variable
                ));
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve credentials: the dotenv file (`env_file` argument first, then
    /// the configured one) over the environment, then the configured overrides.
    pub fn credentials(&self, env_file: Option<&Path>) -> anyhow::Result<Credentials> {
        let base = match env_file.or(self.env_file.as_deref()) {
            Some(path) => Credentials::from_env_file(path).map_err(|e| {
                anyhow::anyhow!("Failed to read env file '{}': {}", path.display(), e)
            })?,
            None => Credentials::from_env(),
        };

        let mut overrides = Credentials::new();
        for (variable, value) in &self.credentials {
            overrides.set(variable, value.clone());
        }

        Ok(base.overlay(&overrides))
    }

    /// Build the registry for `credentials` with this configuration applied.
    pub fn registry(&self, credentials: &Credentials) -> ProviderRegistry {
        let mut registry =
            ProviderRegistry::from_credentials(credentials).with_timeout(self.request_timeout());

        for (name, models) in &self.models {
            if let Some(provider) = Provider::from_display_name(name) {
                registry = registry.with_models(provider, models.iter().cloned());
            }
        }

        registry
    }
}
