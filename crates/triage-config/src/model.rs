// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Triage query router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use triage_core::{DifficultyLevel, TaskType};

/// Top-level Triage configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TriageConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Classification backend settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Model routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Process-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Which classifier implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// OpenAI-compatible chat completions API.
    #[default]
    Openai,
    /// Offline keyword heuristics, no network.
    Heuristic,
}

/// Classification backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Backend used to classify queries.
    #[serde(default)]
    pub backend: ClassifierBackend,

    /// Model used for classification requests.
    #[serde(default = "default_classifier_model")]
    pub model: String,

    /// API key. `None` falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat completions API (without `/chat/completions`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature for classification requests.
    #[serde(default)]
    pub temperature: f32,

    /// Maximum tokens the classifier may generate.
    #[serde(default = "default_classifier_max_tokens")]
    pub max_tokens: u32,

    /// Seconds to wait for a classification before degrading the query.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::default(),
            model: default_classifier_model(),
            api_key: None,
            base_url: default_base_url(),
            temperature: 0.0,
            max_tokens: default_classifier_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_classifier_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_classifier_max_tokens() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

/// Model routing configuration.
///
/// Per-task threshold rules are checked first; task types without a rule
/// fall through to the difficulty-only tiers (`high_model` for 4-5,
/// `mid_model` for 3, `default_model` for 1-2).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Enable routing. When false, every query goes to `default_model`
    /// without being classified.
    #[serde(default = "default_routing_enabled")]
    pub enabled: bool,

    /// Light-weight default model.
    #[serde(default = "default_light_model")]
    pub default_model: String,

    /// Model used when a query cannot be classified.
    #[serde(default = "default_light_model")]
    pub fallback_model: String,

    /// High-capability default for difficulty 4-5 without a task rule.
    #[serde(default = "default_high_model")]
    pub high_model: String,

    /// Mid-capability default for difficulty 3 without a task rule.
    #[serde(default = "default_mid_model")]
    pub mid_model: String,

    /// Per-task threshold rules. Replaces the built-in table when set.
    #[serde(default = "default_rules")]
    pub rules: Vec<TaskRuleConfig>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            enabled: default_routing_enabled(),
            default_model: default_light_model(),
            fallback_model: default_light_model(),
            high_model: default_high_model(),
            mid_model: default_mid_model(),
            rules: default_rules(),
        }
    }
}

/// A per-task threshold rule: `strong_model` at or above `min_difficulty`,
/// `light_model` below it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaskRuleConfig {
    pub task: TaskType,
    pub min_difficulty: DifficultyLevel,
    pub strong_model: String,
    pub light_model: String,
}

impl TaskRuleConfig {
    pub fn new(
        task: TaskType,
        min_difficulty: DifficultyLevel,
        strong_model: impl Into<String>,
        light_model: impl Into<String>,
    ) -> Self {
        Self {
            task,
            min_difficulty,
            strong_model: strong_model.into(),
            light_model: light_model.into(),
        }
    }
}

fn default_routing_enabled() -> bool {
    true
}

fn default_light_model() -> String {
    "gemma3".to_string()
}

fn default_high_model() -> String {
    "o4-mini".to_string()
}

fn default_mid_model() -> String {
    "qwq".to_string()
}

fn default_rules() -> Vec<TaskRuleConfig> {
    vec![
        TaskRuleConfig::new(
            TaskType::Coding,
            DifficultyLevel::Four,
            "qwen2.5",
            "deepseek-coder",
        ),
        TaskRuleConfig::new(
            TaskType::Writing,
            DifficultyLevel::Three,
            "deepseek-r1",
            "gemma3",
        ),
        TaskRuleConfig::new(
            TaskType::Creativity,
            DifficultyLevel::Three,
            "deepseek-r1",
            "gemma3",
        ),
        TaskRuleConfig::new(TaskType::Math, DifficultyLevel::Three, "gpt-4o", "gemma3"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_cover_four_tasks() {
        let tasks: Vec<TaskType> = RoutingConfig::default()
            .rules
            .iter()
            .map(|r| r.task)
            .collect();
        assert_eq!(
            tasks,
            vec![
                TaskType::Coding,
                TaskType::Writing,
                TaskType::Creativity,
                TaskType::Math
            ]
        );
    }

    #[test]
    fn backend_names_are_lowercase() {
        let config: ClassifierConfig = toml::from_str("backend = \"heuristic\"").unwrap();
        assert_eq!(config.backend, ClassifierBackend::Heuristic);
        assert!(toml::from_str::<ClassifierConfig>("backend = \"Heuristic\"").is_err());
    }

    #[test]
    fn rules_reject_unknown_task() {
        let toml_str = r#"
[[rules]]
task = "Poetry"
min_difficulty = 3
strong_model = "a"
light_model = "b"
"#;
        assert!(toml::from_str::<RoutingConfig>(toml_str).is_err());
    }

    #[test]
    fn rules_reject_out_of_range_threshold() {
        let toml_str = r#"
[[rules]]
task = "Coding"
min_difficulty = 6
strong_model = "a"
light_model = "b"
"#;
        assert!(toml::from_str::<RoutingConfig>(toml_str).is_err());
    }
}
