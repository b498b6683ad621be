//! Errors raised while resolving a selector into a client.

use thiserror::Error;

use super::providers::Provider;

/// Everything that can go wrong while building a client.
///
/// Every variant is a configuration problem on the caller's side: nothing is
/// retried, and the caller is expected to fix the configuration and call the
/// factory again.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid selector '{0}': expected \"<Provider>: <Model>\"")]
    InvalidSelector(String),

    #[error("LLM provider {0} is not recognized or not supported")]
    UnknownProvider(String),

    #[error("{variable} is not set; the {provider} provider requires it")]
    MissingVariable {
        provider: Provider,
        variable: &'static str,
    },

    #[error("temperature {0} is not a finite number")]
    InvalidTemperature(f32),

    #[error("failed to build HTTP client for {provider}: {source}")]
    HttpClient {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("credential for {provider} cannot be sent as an HTTP header")]
    InvalidHeader {
        provider: Provider,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
}

impl ConfigurationError {
    /// Name of the environment variable the caller has to supply, if that is
    /// what went wrong.
    pub fn missing_variable(&self) -> Option<&'static str> {
        match self {
            Self::MissingVariable { variable, .. } => Some(variable),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
