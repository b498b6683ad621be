pub mod anthropic;
pub mod client;
pub mod credentials;
pub mod error;
pub mod huggingface;
pub mod ollama;
pub mod openai;
pub mod providers;
pub mod registry;
pub mod selector;

use once_cell::sync::Lazy;

pub use client::{ApiKey, ClientSettings, LlmClient};
pub use credentials::Credentials;
pub use error::ConfigurationError;
pub use providers::Provider;
pub use registry::{DEFAULT_TEMPERATURE, ProviderEntry, ProviderRegistry};
pub use selector::Selector;

// Model lists are read from the environment once, on first use.
static REGISTRY: Lazy<ProviderRegistry> = Lazy::new(ProviderRegistry::from_env);

/// Process-wide registry built from the environment.
pub fn registry() -> &'static ProviderRegistry {
    &REGISTRY
}

/// Every `"<Provider>: <Model>"` selector of the process-wide registry.
pub fn enumerate() -> Vec<String> {
    REGISTRY.enumerate()
}

/// Build a client from the process-wide registry, reading credentials from
/// the environment at call time.
pub fn create(selector: &str, temperature: f32) -> error::Result<Box<dyn LlmClient>> {
    REGISTRY.create(selector, temperature, &Credentials::from_env())
}
