// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic query classification.
//!
//! Offline [`Classifier`] backend: difficulty from a signed score over
//! length and keyword signals, task type from ordered keyword tables.
//! No network, no latency.

use async_trait::async_trait;
use triage_core::{
    Classification, Classifier, DifficultyLevel, RawClassification, TaskType, TriageError,
};

/// Greeting/farewell patterns (exact match, case-insensitive).
const SIMPLE_EXACT: &[&str] = &[
    "hi", "hello", "hey", "thanks", "thank you", "bye", "ok", "okay", "yes", "no", "sure",
    "good morning", "good night", "how are you", "how are you?", "hello, how are you?",
];

/// Single-fact question openers (prefix match, case-insensitive).
const SIMPLE_QUESTIONS: &[&str] = &[
    "what is", "what's", "who is", "who was", "when did", "when is", "where is", "how many",
    "how much", "what time", "what day",
];

/// Complex indicator patterns (contains, case-insensitive).
const COMPLEX_INDICATORS: &[&str] = &[
    "analyze", "compare", "evaluate", "implement", "design", "architecture", "trade-off",
    "tradeoff", "pros and cons", "step by step", "explain in detail", "debug", "refactor",
    "optimize", "algorithm", "strategy", "in depth", "comprehensive", "including",
];

/// Task keyword tables, checked in order; the first table with a hit wins.
/// Single words match whole words, phrases match as substrings.
const TASK_KEYWORDS: &[(TaskType, &[&str])] = &[
    (
        TaskType::Translation,
        &["translate", "translation", "into spanish", "into french", "into german", "into english"],
    ),
    (
        TaskType::Coding,
        &[
            "```", "code", "function", "python", "rust", "javascript", "typescript", "sql",
            "bug", "compile", "refactor", "debug", "script", "program", "api", "fastapi",
        ],
    ),
    (
        TaskType::Math,
        &[
            "calculate", "solve", "equation", "integral", "derivative", "probability",
            "percent", "percentage", "algebra", "math",
        ],
    ),
    (
        TaskType::Roleplay,
        &["act as", "pretend", "roleplay", "role-play", "imagine you are", "you are a"],
    ),
    (
        TaskType::Writing,
        &["story", "poem", "essay", "blog post", "article", "letter", "novel", "lyrics"],
    ),
    (
        TaskType::Creativity,
        &["ideas", "brainstorm", "concepts", "concept", "creative", "invent", "slogan", "name for"],
    ),
    (
        TaskType::Analysis,
        &["summarize", "summarise", "summary", "sentiment", "analyze", "analyse", "pros and cons"],
    ),
    (
        TaskType::Research,
        &["compare", "research", "sources", "history of", "overview", "versus", "vs"],
    ),
    (
        TaskType::Education,
        &["explain", "teach", "learn", "lesson", "tutorial", "in simple terms", "how does"],
    ),
];

/// Heuristic query classifier with zero cost and zero latency.
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify without going through the raw string form.
    pub fn assess(&self, query: &str) -> Classification {
        let trimmed = query.trim();
        let lower = trimmed.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '\''))
            .filter(|w| !w.is_empty())
            .collect();

        Classification::new(
            Self::score_to_difficulty(Self::score(trimmed, &lower, words.len())),
            Self::task_type(&lower, &words),
        )
    }

    fn score(trimmed: &str, lower: &str, word_count: usize) -> i32 {
        let mut score = Self::length_score(word_count);

        if SIMPLE_EXACT.iter().any(|p| lower == *p) {
            score -= 3;
        }

        if SIMPLE_QUESTIONS.iter().any(|q| lower.starts_with(q)) {
            score -= 2;
        }

        if COMPLEX_INDICATORS.iter().any(|c| lower.contains(c)) {
            score += 2;
        }

        if trimmed.contains("```") {
            score += 3;
        }

        if Self::count_sentences(trimmed) >= 3 {
            score += 1;
        }

        score
    }

    fn length_score(word_count: usize) -> i32 {
        match word_count {
            0..=3 => -2,
            4..=15 => 0,
            16..=50 => 1,
            _ => 2,
        }
    }

    fn count_sentences(text: &str) -> usize {
        text.chars()
            .filter(|c| matches!(c, '.' | '?' | '!'))
            .count()
            .max(1)
    }

    fn score_to_difficulty(score: i32) -> DifficultyLevel {
        match score {
            i32::MIN..=-3 => DifficultyLevel::One,
            -2..=-1 => DifficultyLevel::Two,
            0..=1 => DifficultyLevel::Three,
            2..=3 => DifficultyLevel::Four,
            _ => DifficultyLevel::Five,
        }
    }

    fn task_type(lower: &str, words: &[&str]) -> TaskType {
        TASK_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|kw| {
                    if kw.contains(' ') || kw.contains('`') {
                        lower.contains(kw)
                    } else {
                        words.contains(kw)
                    }
                })
            })
            .map(|(task, _)| *task)
            .unwrap_or(TaskType::Questions)
    }
}

#[async_trait]
impl Classifier for HeuristicClassifier {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn classify(&self, query: &str) -> Result<RawClassification, TriageError> {
        let Classification { difficulty, task } = self.assess(query);
        Ok(RawClassification::new(difficulty.to_string(), task.to_string()))
    }
}
