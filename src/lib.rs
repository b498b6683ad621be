#![allow(non_snake_case)]

//! LLMForge library crate.
//!
//! Builds ready-to-use LLM client handles from `"<Provider>: <Model>"`
//! selectors and explicitly passed credentials.

pub mod cli;
pub mod config;
pub mod core;

// Re-export main items for easier access
pub use config::ForgeConfig;
pub use self::core::llm::{
    ConfigurationError, Credentials, LlmClient, Provider, ProviderRegistry, Selector, create,
    enumerate,
};
