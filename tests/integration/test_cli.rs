//! End-to-end tests of the LLMForge binary.

use LLMForge::core::llm::credentials::VARIABLES;
use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

/// Binary with none of the provider variables inherited from the test runner.
fn forge() -> Command {
    let mut cmd = Command::cargo_bin("LLMForge").unwrap();
    for variable in VARIABLES {
        cmd.env_remove(variable);
    }
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_help_output() {
    forge().arg("--help").assert().success();
}

#[test]
fn test_list_prints_every_selector() {
    let stdout = stdout_of(forge().arg("list").env("OLLAMA_MODELS", "llama3,phi3"));
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.first(), Some(&"OpenAI: gpt-4o"));
    assert!(lines.contains(&"Ollama: llama3"));
    assert!(lines.contains(&"Ollama: phi3"));
    assert!(lines.contains(&"Anthropic: claude-3-5-sonnet-20240620"));
    assert_eq!(lines.last(), Some(&"LM Studio: lms-default"));
}

#[test]
fn test_create_openai_without_key_fails() {
    let output = forge()
        .args(["create", "OpenAI: gpt-4o"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"), "{stderr}");
}

#[test]
fn test_create_unknown_provider_fails() {
    let output = forge()
        .args(["create", "UnknownProvider: x"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not recognized"), "{stderr}");
}

#[test]
fn test_create_openai_prints_redacted_settings() {
    let stdout = stdout_of(
        forge()
            .args(["create", "OpenAI: gpt-4o", "--temperature", "0.5"])
            .env("OPENAI_API_KEY", "sk-integration-secret"),
    );

    assert!(stdout.contains("provider:    OpenAI"));
    assert!(stdout.contains("endpoint:    https://api.openai.com/v1/chat/completions"));
    assert!(stdout.contains("temperature: 0.5"));
    assert!(stdout.contains("api key:     sk-i…"));
    assert!(!stdout.contains("sk-integration-secret"));
}

#[test]
fn test_create_ollama_uses_host() {
    let stdout = stdout_of(
        forge()
            .args(["create", "Ollama: llama3"])
            .env("OLLAMA_HOST", "http://127.0.0.1:11434"),
    );

    assert!(stdout.contains("endpoint:    http://127.0.0.1:11434/api/chat"));
    assert!(stdout.contains("temperature: 0.1"));
}

#[test]
fn test_env_file_and_config_file() {
    let dir = tempdir().unwrap();
    let env_path = dir.path().join(".env");
    fs::write(&env_path, "MISTRAL_API_KEY=from-env-file\n").unwrap();
    let config_path = dir.path().join("forge.toml");
    fs::write(&config_path, "temperature = 0.3\n").unwrap();

    let mut cmd = forge();
    cmd.arg("--config")
        .arg(&config_path)
        .arg("--env-file")
        .arg(&env_path)
        .args(["create", "Mistral.ai: mistral/mistral-large-latest"]);
    let stdout = stdout_of(&mut cmd);

    assert!(stdout.contains("api model:   mistral-large-latest"));
    assert!(stdout.contains("temperature: 0.3"));
    assert!(stdout.contains("max tokens:  4095"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("forge.json");
    fs::write(&config_path, r#"{ "models": { "NotAProvider": ["x"] } }"#).unwrap();

    let output = forge()
        .arg("--config")
        .arg(&config_path)
        .arg("list")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NotAProvider"), "{stderr}");
}
