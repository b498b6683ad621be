//! Explicit snapshot of the environment variables the factory consumes.
//!
//! Constructors never read or write the process environment themselves. The
//! caller takes a [`Credentials`] snapshot (from the environment, a dotenv
//! file, or by hand) and passes it into [`ProviderRegistry::create`], so two
//! constructions in the same process cannot see each other's credentials.
//!
//! [`ProviderRegistry::create`]: super::ProviderRegistry::create

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fmt;
use std::path::Path;

use super::error::{ConfigurationError, Result};
use super::providers::Provider;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const HUGGINGFACE_API_KEY: &str = "HUGGINGFACE_API_KEY";
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const MISTRAL_API_KEY: &str = "MISTRAL_API_KEY";
pub const OLLAMA_HOST: &str = "OLLAMA_HOST";
pub const OLLAMA_MODELS: &str = "OLLAMA_MODELS";
pub const LMSTUDIO_API_BASE: &str = "LMSTUDIO_API_BASE";

/// Every variable a [`Credentials`] snapshot can hold.
pub const VARIABLES: [&str; 9] = [
    OPENAI_API_KEY,
    OPENAI_API_BASE,
    GROQ_API_KEY,
    HUGGINGFACE_API_KEY,
    ANTHROPIC_API_KEY,
    MISTRAL_API_KEY,
    OLLAMA_HOST,
    OLLAMA_MODELS,
    LMSTUDIO_API_BASE,
];

/// Values of the known provider variables, keyed by variable name.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    values: BTreeMap<&'static str, String>,
}

impl Credentials {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the known variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Snapshot the known variables through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = VARIABLES
            .iter()
            .filter_map(|&name| lookup(name).map(|value| (name, value)))
            .collect();
        Self { values }
    }

    /// Snapshot from a dotenv file layered over the process environment.
    ///
    /// Values in the file win over the environment. The process environment
    /// itself is left untouched.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, dotenvy::Error> {
        let mut file_values = HashMap::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            file_values.insert(key, value);
        }

        Ok(Self::from_lookup(|name| {
            file_values
                .get(name)
                .cloned()
                .or_else(|| env::var(name).ok())
        }))
    }

    /// Set a known variable. Returns `false` if `variable` is not one the
    /// factory consumes, in which case nothing is stored.
    pub fn set(&mut self, variable: &str, value: impl Into<String>) -> bool {
        match VARIABLES.iter().find(|known| **known == variable) {
            Some(known) => {
                self.values.insert(*known, value.into());
                true
            }
            None => false,
        }
    }

    /// Builder form of [`Credentials::set`]. Unknown variables are ignored.
    pub fn with(mut self, variable: &str, value: impl Into<String>) -> Self {
        self.set(variable, value);
        self
    }

    /// Remove a variable from the snapshot.
    pub fn unset(&mut self, variable: &str) {
        self.values.remove(variable);
    }

    /// Copy every value of `other` over this snapshot.
    pub fn overlay(mut self, other: &Credentials) -> Self {
        for (&name, value) in &other.values {
            self.values.insert(name, value.clone());
        }
        self
    }

    /// Trimmed value of a variable. Unset and blank values both read as `None`.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.values
            .get(variable)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Like [`Credentials::get`] but a missing value is an error naming the
    /// variable and the provider that needed it.
    pub fn require(&self, provider: Provider, variable: &'static str) -> Result<&str> {
        self.get(variable)
            .ok_or(ConfigurationError::MissingVariable { provider, variable })
    }

    /// Models listed in `OLLAMA_MODELS`, comma separated.
    pub fn ollama_models(&self) -> Vec<String> {
        self.get(OLLAMA_MODELS)
            .map(parse_model_list)
            .unwrap_or_default()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only names: values are secrets.
        f.debug_set().entries(self.values.keys()).finish()
    }
}

/// Split a comma separated model list, dropping blank entries.
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_string)
        .collect()
}
