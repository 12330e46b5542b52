// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decision-table model routing.
//!
//! Precedence: per-task threshold rule > difficulty-only fallback. Both are
//! built once from [`RoutingConfig`] and never mutated, so routing is pure.

use std::collections::HashMap;

use serde::Serialize;
use triage_config::model::RoutingConfig;
use triage_core::{Classification, DifficultyLevel, TaskType};

/// Which branch of the decision table produced a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// A per-task threshold rule matched.
    TaskRule,
    /// No rule for the task; the difficulty tiers decided.
    DifficultyFallback,
}

/// Routing decision for one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    /// Selected model identifier.
    pub model: String,
    /// Classification the decision was made for.
    pub classification: Classification,
    /// Branch of the table that matched.
    pub source: RouteSource,
    /// Human-readable reason.
    pub reason: String,
}

/// Step function over difficulty for a single task type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdRule {
    pub min_difficulty: DifficultyLevel,
    pub strong_model: String,
    pub light_model: String,
}

impl ThresholdRule {
    /// `strong_model` at or above the threshold, `light_model` below.
    pub fn select(&self, difficulty: DifficultyLevel) -> &str {
        if difficulty >= self.min_difficulty {
            &self.strong_model
        } else {
            &self.light_model
        }
    }
}

/// Difficulty-only tiers for task types without a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyTiers {
    pub high: String,
    pub mid: String,
    pub light: String,
}

impl DifficultyTiers {
    pub fn select(&self, difficulty: DifficultyLevel) -> &str {
        match difficulty {
            DifficultyLevel::Four | DifficultyLevel::Five => &self.high,
            DifficultyLevel::Three => &self.mid,
            DifficultyLevel::One | DifficultyLevel::Two => &self.light,
        }
    }
}

/// Maps a validated [`Classification`] to a model identifier.
#[derive(Debug, Clone)]
pub struct ModelRouter {
    rules: HashMap<TaskType, ThresholdRule>,
    tiers: DifficultyTiers,
}

impl ModelRouter {
    /// Build the decision table from configuration.
    ///
    /// Duplicate rules are rejected by config validation; if one slips
    /// through, the last rule for a task wins.
    pub fn new(config: &RoutingConfig) -> Self {
        let rules = config
            .rules
            .iter()
            .map(|rule| {
                (
                    rule.task,
                    ThresholdRule {
                        min_difficulty: rule.min_difficulty,
                        strong_model: rule.strong_model.clone(),
                        light_model: rule.light_model.clone(),
                    },
                )
            })
            .collect();

        Self {
            rules,
            tiers: DifficultyTiers {
                high: config.high_model.clone(),
                mid: config.mid_model.clone(),
                light: config.default_model.clone(),
            },
        }
    }

    /// Model identifier for a classification. Total: every input has an answer.
    pub fn route(&self, classification: Classification) -> &str {
        match self.rules.get(&classification.task) {
            Some(rule) => rule.select(classification.difficulty),
            None => self.tiers.select(classification.difficulty),
        }
    }

    /// Same selection as [`route`](Self::route), with the branch taken and a reason.
    pub fn decide(&self, classification: Classification) -> RoutingDecision {
        let Classification { difficulty, task } = classification;

        let (model, source, reason) = match self.rules.get(&task) {
            Some(rule) => {
                let comparison = if difficulty >= rule.min_difficulty {
                    ">="
                } else {
                    "<"
                };
                (
                    rule.select(difficulty),
                    RouteSource::TaskRule,
                    format!(
                        "{task} rule: difficulty {difficulty} {comparison} {}",
                        rule.min_difficulty
                    ),
                )
            }
            None => {
                let tier = match difficulty {
                    DifficultyLevel::Four | DifficultyLevel::Five => "high-capability",
                    DifficultyLevel::Three => "mid-capability",
                    DifficultyLevel::One | DifficultyLevel::Two => "light-weight",
                };
                (
                    self.tiers.select(difficulty),
                    RouteSource::DifficultyFallback,
                    format!("no {task} rule: {tier} default for difficulty {difficulty}"),
                )
            }
        };

        RoutingDecision {
            model: model.to_string(),
            classification,
            source,
            reason,
        }
    }

    /// Whether `task` has a per-task rule.
    pub fn has_rule(&self, task: TaskType) -> bool {
        self.rules.contains_key(&task)
    }

    /// The light-weight default model.
    pub fn default_model(&self) -> &str {
        &self.tiers.light
    }
}
