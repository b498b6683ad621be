//! Parsing of `"<Provider>: <Model>"` selector strings.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigurationError;
use super::providers::Provider;

/// Separator between provider and model. Both characters are significant.
pub const SEPARATOR: &str = ": ";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub provider: Provider,
    pub model: String,
}

impl Selector {
    pub fn new(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

impl FromStr for Selector {
    type Err = ConfigurationError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        if selector.matches(SEPARATOR).count() != 1 {
            return Err(ConfigurationError::InvalidSelector(selector.to_string()));
        }
        let Some((provider, model)) = selector.split_once(SEPARATOR) else {
            return Err(ConfigurationError::InvalidSelector(selector.to_string()));
        };
        if provider.is_empty() || model.is_empty() {
            return Err(ConfigurationError::InvalidSelector(selector.to_string()));
        }

        let provider = Provider::from_display_name(provider)
            .ok_or_else(|| ConfigurationError::UnknownProvider(provider.to_string()))?;
        Ok(Self::new(provider, model))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.provider, SEPARATOR, self.model)
    }
}
