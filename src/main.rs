use LLMForge::cli::{Args, Command};
use LLMForge::config::ForgeConfig;
use LLMForge::core::llm::credentials::OLLAMA_HOST;
use LLMForge::core::llm::ollama::list_models;
use LLMForge::core::llm::{LlmClient, Provider};
use clap::Parser;
use reqwest::Client;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => ForgeConfig::from_file(path)?,
        None => ForgeConfig::default(),
    };
    config.validate()?;

    let credentials = config.credentials(args.env_file.as_deref())?;
    let mut registry = config.registry(&credentials);

    match args.command {
        Command::List { discover } => {
            if discover {
                let host = credentials.require(Provider::Ollama, OLLAMA_HOST)?;
                let client = Client::builder()
                    .no_proxy()
                    .timeout(config.request_timeout())
                    .build()?;
                let models = list_models(&client, host).await?;
                info!("Discovered {} Ollama models at {}", models.len(), host);
                registry = registry.with_models(Provider::Ollama, models);
            }

            for selector in registry.enumerate() {
                println!("{}", selector);
            }
        }
        Command::Create {
            selector,
            temperature,
        } => {
            let temperature = temperature.unwrap_or(config.temperature);
            let client = registry.create(&selector, temperature, &credentials)?;
            print_client(client.as_ref());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_client(client: &dyn LlmClient) {
    let settings = client.settings();
    println!("provider:    {}", settings.provider);
    println!("model:       {}", settings.model);
    println!("api model:   {}", settings.api_model());
    println!("endpoint:    {}", client.endpoint());
    println!("temperature: {}", settings.temperature);
    match settings.max_tokens {
        Some(max_tokens) => println!("max tokens:  {}", max_tokens),
        None => println!("max tokens:  -"),
    }
    match &settings.api_key {
        Some(key) => println!("api key:     {}", key.redacted()),
        None => println!("api key:     -"),
    }
    println!("timeout:     {}s", settings.timeout.as_secs());
}
