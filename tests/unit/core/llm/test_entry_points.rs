use LLMForge::core::llm::{self, ConfigurationError, DEFAULT_TEMPERATURE, Provider};

#[test]
fn test_create_unknown_provider() {
    let result = LLMForge::create("UnknownProvider: x", DEFAULT_TEMPERATURE);
    match result {
        Err(ConfigurationError::UnknownProvider(name)) => assert_eq!(name, "UnknownProvider"),
        other => panic!("expected UnknownProvider, got {other:?}"),
    }
}

#[test]
fn test_create_malformed_selector() {
    let result = LLMForge::create("OpenAI gpt-4o", DEFAULT_TEMPERATURE);
    assert!(matches!(result, Err(ConfigurationError::InvalidSelector(_))));
}

#[test]
fn test_enumerate_matches_global_registry() {
    let listed = LLMForge::enumerate();
    assert_eq!(listed, llm::registry().enumerate());

    for provider in Provider::ALL {
        for model in provider.default_models() {
            let selector = format!("{provider}: {model}");
            assert_eq!(
                listed.iter().filter(|s| **s == selector).count(),
                1,
                "{selector}"
            );
        }
    }
}
