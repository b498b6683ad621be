//! Core services for LLMForge.
//!
//! Everything here is independent of how the caller is reached (CLI, UI, or a
//! host application linking the library).

pub mod llm;
