use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "LLMForge",
    about = "List LLM provider selectors and build configured clients",
    version
)]
pub struct Args {
    /// Configuration file (.json, .yaml, .yml or .toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dotenv file layered over the process environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every "<Provider>: <Model>" selector
    List {
        /// Also ask the Ollama host for its pulled models
        #[arg(long, default_value_t = false)]
        discover: bool,
    },
    /// Build a client for a selector and print its settings
    Create {
        /// Selector such as "OpenAI: gpt-4o"
        selector: String,

        /// Sampling temperature, overrides the configuration file
        #[arg(short, long)]
        temperature: Option<f32>,
    },
}
