use roadsafe_core::config::GenerationConfig;
use roadsafe_core::constants::DEFAULT_SYSTEM_PROMPT;
use roadsafe_core::errors::GenerationError;
use roadsafe_core::traits::IAdvisoryGenerator;
use roadsafe_core::RoadSafeError;
use roadsafe_generation::{build_prompt, load_system_prompt, OllamaGenerator};

fn unreachable_config() -> GenerationConfig {
    GenerationConfig {
        // Nothing listens on the discard port locally.
        base_url: "http://127.0.0.1:9/".to_string(),
        timeout_secs: 2,
        health_check_timeout_secs: 2,
        ..GenerationConfig::default()
    }
}

#[test]
fn unreachable_server_reports_unavailable() {
    let generator = OllamaGenerator::new(&unreachable_config());
    assert_eq!(generator.base_url(), "http://127.0.0.1:9");
    assert_eq!(generator.model(), "llama3.1:8b");
    assert!(!generator.is_available());
    assert!(!generator.health_check());

    let err = generator
        .generate("pothole", "context", DEFAULT_SYSTEM_PROMPT)
        .unwrap_err();
    assert!(matches!(
        err,
        RoadSafeError::GenerationError(
            GenerationError::BackendUnavailable { .. } | GenerationError::RequestFailed { .. }
        )
    ));
    assert!(!generator.is_available());
    assert_eq!(generator.name(), "ollama");
}

#[test]
fn prompt_contains_context_then_query() {
    let prompt = build_prompt("vehicles speeding near school", "RELEVANT ROAD SAFETY INTERVENTIONS:\n\n");
    let ctx = prompt.find("RELEVANT ROAD SAFETY INTERVENTIONS").unwrap();
    let query = prompt.find("USER QUERY: vehicles speeding near school").unwrap();
    assert!(ctx < query);
    assert!(prompt.trim_end().ends_with("from the database above."));
}

#[test]
fn system_prompt_file_is_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_prompt.txt");
    std::fs::write(&path, "You audit roads against IRC codes.").unwrap();
    assert_eq!(load_system_prompt(&path), "You audit roads against IRC codes.");
}

#[test]
fn missing_system_prompt_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let prompt = load_system_prompt(&dir.path().join("absent.txt"));
    assert_eq!(prompt, "You are a Road Safety Expert AI assistant.");
}

#[tokio::test]
async fn calls_from_async_code_do_not_panic() {
    let generator = OllamaGenerator::new(&unreachable_config());
    assert!(!generator.health_check());
    assert!(generator
        .generate("pothole", "context", DEFAULT_SYSTEM_PROMPT)
        .is_err());
    assert!(!generator.is_available());
}
