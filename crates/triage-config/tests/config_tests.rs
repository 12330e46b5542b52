// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Triage configuration system.

use std::io::Write;

use triage_config::diagnostic::ConfigError;
use triage_config::model::{ClassifierBackend, TriageConfig};
use triage_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use triage_core::{DifficultyLevel, TaskType};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_triage_config() {
    let toml = r#"
[agent]
log_level = "debug"

[classifier]
backend = "heuristic"
model = "gpt-4.1-mini"
api_key = "sk-test"
base_url = "http://localhost:8080/v1"
temperature = 0.2
max_tokens = 64
timeout_secs = 10

[routing]
enabled = true
default_model = "light"
fallback_model = "safe"
high_model = "high"
mid_model = "mid"

[[routing.rules]]
task = "Coding"
min_difficulty = 5
strong_model = "big-coder"
light_model = "small-coder"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.classifier.backend, ClassifierBackend::Heuristic);
    assert_eq!(config.classifier.model, "gpt-4.1-mini");
    assert_eq!(config.classifier.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.classifier.base_url, "http://localhost:8080/v1");
    assert_eq!(config.classifier.max_tokens, 64);
    assert_eq!(config.classifier.timeout_secs, 10);
    assert_eq!(config.routing.default_model, "light");
    assert_eq!(config.routing.fallback_model, "safe");
    assert_eq!(config.routing.high_model, "high");
    assert_eq!(config.routing.mid_model, "mid");

    // An explicit rule list replaces the built-in table.
    assert_eq!(config.routing.rules.len(), 1);
    let rule = &config.routing.rules[0];
    assert_eq!(rule.task, TaskType::Coding);
    assert_eq!(rule.min_difficulty, DifficultyLevel::Five);
    assert_eq!(rule.strong_model, "big-coder");
    assert_eq!(rule.light_model, "small-coder");
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.classifier.backend, ClassifierBackend::Openai);
    assert_eq!(config.classifier.model, "gpt-4o-mini");
    assert!(config.classifier.api_key.is_none());
    assert_eq!(config.classifier.temperature, 0.0);
    assert_eq!(config.classifier.max_tokens, 100);
    assert_eq!(config.classifier.timeout_secs, 30);
    assert!(config.routing.enabled);
    assert_eq!(config.routing.default_model, "gemma3");
    assert_eq!(config.routing.fallback_model, "gemma3");
    assert_eq!(config.routing.high_model, "o4-mini");
    assert_eq!(config.routing.mid_model, "qwq");
    assert_eq!(config.routing.rules.len(), 4);
}

/// Unknown field in [routing] produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_field_in_routing_suggests_correction() {
    let toml = r#"
[routing]
defualt_model = "x"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let found = errors.iter().any(|e| {
        matches!(
            e,
            ConfigError::UnknownKey { key, suggestion: Some(s), .. }
                if key == "defualt_model" && s == "default_model"
        )
    });
    assert!(found, "expected unknown key with suggestion, got: {errors:?}");
}

/// Unknown task names in rules are rejected at load time.
#[test]
fn unknown_task_in_rule_is_rejected() {
    let toml = r#"
[[routing.rules]]
task = "coding"
min_difficulty = 3
strong_model = "a"
light_model = "b"
"#;

    let errors = load_and_validate_str(toml).expect_err("lowercase task name should fail");
    assert!(!errors.is_empty());
}

/// Semantic validation runs after a successful load.
#[test]
fn duplicate_rules_fail_validation() {
    let toml = r#"
[[routing.rules]]
task = "Math"
min_difficulty = 3
strong_model = "a"
light_model = "b"

[[routing.rules]]
task = "Math"
min_difficulty = 4
strong_model = "c"
light_model = "d"
"#;

    let errors = load_and_validate_str(toml).expect_err("duplicate task rule");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("duplicate rule"))
    ));
}

/// Layered merge: later providers override earlier ones.
#[test]
fn override_layer_wins() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: TriageConfig = Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(Toml::string("[classifier]\nmodel = \"from-toml\"\n"))
        .merge(("classifier.model", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.classifier.model, "from-env");
}

/// An explicit --config path is loaded and validated.
#[test]
fn explicit_path_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[routing]\nhigh_model = \"big\"").unwrap();

    let config = load_and_validate_path(file.path()).expect("file should load");
    assert_eq!(config.routing.high_model, "big");
}

/// A missing explicit config file is an error, not silently skipped.
#[test]
fn explicit_missing_path_is_error() {
    let errors = load_and_validate_path(std::path::Path::new("/nonexistent/triage.toml"))
        .expect_err("missing file should fail");
    assert!(matches!(&errors[0], ConfigError::Other(m) if m.contains("does not exist")));
}
