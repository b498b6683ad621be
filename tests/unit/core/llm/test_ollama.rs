use LLMForge::core::llm::ollama::list_models;
use LLMForge::core::llm::{Provider, ProviderRegistry};
use httpmock::prelude::*;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn test_list_models_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "models": [
                    {"name": "llama3:latest", "size": 4661224676u64},
                    {"name": "qwen2.5:7b"}
                ]
            }));
    });

    let client = Client::builder().no_proxy().build().unwrap();
    let result = list_models(&client, &server.base_url()).await;

    mock.assert();
    assert_eq!(result.unwrap(), vec!["llama3:latest", "qwen2.5:7b"]);
}

#[tokio::test]
async fn test_list_models_tolerates_trailing_slash() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "models": [] }));
    });

    let client = Client::builder().no_proxy().build().unwrap();
    let host = format!("{}/", server.base_url());
    let models = list_models(&client, &host).await.unwrap();

    mock.assert();
    assert!(models.is_empty());
}

#[tokio::test]
async fn test_list_models_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/tags");
        then.status(500);
    });

    let client = Client::builder().no_proxy().build().unwrap();
    let result = list_models(&client, &server.base_url()).await;

    mock.assert();
    assert!(result.is_err());
}

#[tokio::test]
async fn test_discovered_models_extend_registry() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/tags");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "models": [{"name": "llama3"}, {"name": "phi3:mini"}]
            }));
    });

    let client = Client::builder().no_proxy().build().unwrap();
    let models = list_models(&client, &server.base_url()).await.unwrap();
    let registry = ProviderRegistry::new(["llama3"]).with_models(Provider::Ollama, models);

    assert_eq!(
        registry.models(Provider::Ollama),
        ["llama3".to_string(), "phi3:mini".to_string()]
    );
}
