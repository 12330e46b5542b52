// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Covers constraints serde attributes cannot express: one rule per task,
//! non-empty model names, sane classifier limits.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::TriageConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TriageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let classifier = &config.classifier;
    if classifier.model.trim().is_empty() {
        errors.push(validation("classifier.model must not be empty"));
    }
    if classifier.base_url.trim().is_empty() {
        errors.push(validation("classifier.base_url must not be empty"));
    }
    if classifier.timeout_secs == 0 {
        errors.push(validation("classifier.timeout_secs must be greater than 0"));
    }
    if classifier.max_tokens == 0 {
        errors.push(validation("classifier.max_tokens must be greater than 0"));
    }
    if !(0.0..=2.0).contains(&classifier.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "classifier.temperature must be between 0.0 and 2.0, got {}",
                classifier.temperature
            ),
        });
    }

    let routing = &config.routing;
    for (key, value) in [
        ("routing.default_model", &routing.default_model),
        ("routing.fallback_model", &routing.fallback_model),
        ("routing.high_model", &routing.high_model),
        ("routing.mid_model", &routing.mid_model),
    ] {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    let mut seen_tasks = HashSet::new();
    for (i, rule) in routing.rules.iter().enumerate() {
        if !seen_tasks.insert(rule.task) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate rule for task `{}` in [[routing.rules]]",
                    rule.task
                ),
            });
        }
        if rule.strong_model.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("routing.rules[{i}].strong_model must not be empty"),
            });
        }
        if rule.light_model.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("routing.rules[{i}].light_model must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::Validation {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use triage_core::{DifficultyLevel, TaskType};

    use super::*;
    use crate::model::TaskRuleConfig;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&TriageConfig::default()).is_ok());
    }

    #[test]
    fn empty_model_names_fail_validation() {
        let mut config = TriageConfig::default();
        config.routing.high_model = "  ".to_string();
        config.routing.rules[0].light_model = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "routing.high_model"));
        assert!(has_error(&errors, "routing.rules[0].light_model"));
    }

    #[test]
    fn duplicate_task_rules_fail_validation() {
        let mut config = TriageConfig::default();
        config.routing.rules.push(TaskRuleConfig::new(
            TaskType::Coding,
            DifficultyLevel::Two,
            "a",
            "b",
        ));
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "duplicate rule for task `Coding`"));
    }

    #[test]
    fn classifier_limits_are_checked() {
        let mut config = TriageConfig::default();
        config.classifier.timeout_secs = 0;
        config.classifier.max_tokens = 0;
        config.classifier.temperature = 3.5;
        config.classifier.base_url = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(has_error(&errors, "timeout_secs"));
        assert!(has_error(&errors, "max_tokens"));
        assert!(has_error(&errors, "temperature"));
        assert!(has_error(&errors, "base_url"));
    }

    #[test]
    fn empty_rule_list_is_valid() {
        let mut config = TriageConfig::default();
        config.routing.rules.clear();
        assert!(validate_config(&config).is_ok());
    }
}
