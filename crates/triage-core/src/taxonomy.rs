// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed classification taxonomy: difficulty levels and task types.
//!
//! Both sets are fixed at compile time. Raw classifier output is only ever
//! turned into a [`Classification`] through [`parse_difficulty`] and
//! [`parse_task_type`], which accept the canonical string forms exactly.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::TriageError;
use crate::types::RawClassification;

/// Ordinal 1-5 estimate of query complexity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum DifficultyLevel {
    #[strum(to_string = "1")]
    One,
    #[strum(to_string = "2")]
    Two,
    #[strum(to_string = "3")]
    Three,
    #[strum(to_string = "4")]
    Four,
    #[strum(to_string = "5")]
    Five,
}

impl DifficultyLevel {
    /// Every level, in ascending order.
    pub const ALL: [DifficultyLevel; 5] = [
        DifficultyLevel::One,
        DifficultyLevel::Two,
        DifficultyLevel::Three,
        DifficultyLevel::Four,
        DifficultyLevel::Five,
    ];

    /// Integer form, 1-5.
    pub fn as_u8(self) -> u8 {
        match self {
            DifficultyLevel::One => 1,
            DifficultyLevel::Two => 2,
            DifficultyLevel::Three => 3,
            DifficultyLevel::Four => 4,
            DifficultyLevel::Five => 5,
        }
    }

    /// One-line description used for presentation and prompting.
    pub fn describe(self) -> &'static str {
        match self {
            DifficultyLevel::One => "This query is just a greeting or basic interaction.",
            DifficultyLevel::Two => "Simple question, answerable in one sentence.",
            DifficultyLevel::Three => "Needs basic logic, short code, or brief reasoning.",
            DifficultyLevel::Four => "Requires paragraph answers, more logic, or detailed coding.",
            DifficultyLevel::Five => {
                "Complex reasoning, intricate logic, long answers or deep coding."
            }
        }
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = TriageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DifficultyLevel::One),
            2 => Ok(DifficultyLevel::Two),
            3 => Ok(DifficultyLevel::Three),
            4 => Ok(DifficultyLevel::Four),
            5 => Ok(DifficultyLevel::Five),
            other => Err(TriageError::InvalidDifficulty {
                raw: other.to_string(),
            }),
        }
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> u8 {
        level.as_u8()
    }
}

/// Categorical label describing the nature of the requested work.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum TaskType {
    Writing,
    Questions,
    Math,
    Roleplay,
    Analysis,
    Creativity,
    Coding,
    Education,
    Research,
    Translation,
}

impl TaskType {
    /// Every task type, in canonical presentation order.
    pub const ALL: [TaskType; 10] = [
        TaskType::Writing,
        TaskType::Questions,
        TaskType::Math,
        TaskType::Roleplay,
        TaskType::Analysis,
        TaskType::Creativity,
        TaskType::Coding,
        TaskType::Education,
        TaskType::Research,
        TaskType::Translation,
    ];

    /// One-line description used for presentation and prompting.
    pub fn describe(self) -> &'static str {
        match self {
            TaskType::Writing => "Narrative and creative text generation.",
            TaskType::Questions => "Answering general inquiries.",
            TaskType::Math => "Calculations and data interpretation.",
            TaskType::Roleplay => "Simulated dialogues or scenarios.",
            TaskType::Analysis => "Summarization, sentiment, or entity analysis.",
            TaskType::Creativity => "Idea generation and design concepts.",
            TaskType::Coding => "Code assistance and generation.",
            TaskType::Education => "Teaching, explanations, and learning materials.",
            TaskType::Research => "Gathering and compiling information.",
            TaskType::Translation => "Text translation between languages.",
        }
    }
}

/// Parse a raw difficulty. Only the exact strings "1" through "5" are accepted.
pub fn parse_difficulty(raw: &str) -> Result<DifficultyLevel, TriageError> {
    raw.parse().map_err(|_| TriageError::InvalidDifficulty {
        raw: raw.to_string(),
    })
}

/// Parse a raw task type. Matching is exact and case-sensitive.
pub fn parse_task_type(raw: &str) -> Result<TaskType, TriageError> {
    raw.parse().map_err(|_| TriageError::InvalidTaskType {
        raw: raw.to_string(),
    })
}

/// A validated (difficulty, task type) pair for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    pub difficulty: DifficultyLevel,
    pub task: TaskType,
}

impl Classification {
    pub fn new(difficulty: DifficultyLevel, task: TaskType) -> Self {
        Self { difficulty, task }
    }

    /// Validate raw classifier output. Both fields must parse; a half-valid
    /// response never yields a `Classification`.
    pub fn parse(raw: &RawClassification) -> Result<Self, TriageError> {
        let difficulty = parse_difficulty(&raw.difficulty)?;
        let task = parse_task_type(&raw.task_type)?;
        Ok(Self { difficulty, task })
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "difficulty {} / {}", self.difficulty, self.task)
    }
}
