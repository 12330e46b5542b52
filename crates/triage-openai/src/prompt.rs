// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification prompt assembly and reply parsing.

use std::sync::LazyLock;

use serde_json::Value;
use triage_core::{DifficultyLevel, RawClassification, TaskType, TriageError};

/// Worked examples appended to the instructions, as (query, difficulty, task).
const FEW_SHOT: &[(&str, &str, &str)] = &[
    ("Hello, how are you?", "1", "Questions"),
    ("What's the capital of France?", "2", "Questions"),
    (
        "Can you write a short story about a robot and a cat?",
        "4",
        "Writing",
    ),
    (
        "please write a code in python to calculate the sum of the first 10 Fibonacci numbers.",
        "3",
        "Coding",
    ),
    ("Write a Python function to add two numbers.", "3", "Coding"),
    (
        "Act as a product manager and help me draft a user story for the login flow on my web application.",
        "4",
        "Roleplay",
    ),
    (
        "Explain the core concepts of quantum computing in simple terms.",
        "4",
        "Education",
    ),
    (
        "Compare and contrast the FastAPI and Flask frameworks for Python web development, highlighting their strengths and weaknesses.",
        "5",
        "Research",
    ),
    (
        "Please provide a Python code implementation for a user signup flow using FastAPI, including input validation.",
        "5",
        "Coding",
    ),
    (
        "Summarize the main arguments for and against universal basic income.",
        "3",
        "Analysis",
    ),
    (
        "Generate three distinct creative concepts for a new eco-friendly product aimed at reducing plastic waste in households.",
        "4",
        "Creativity",
    ),
    (
        "Translate the following sentence into Spanish: \"The quick brown fox jumps over the lazy dog.\"",
        "2",
        "Translation",
    ),
];

/// Everything before the user query. Built once; depends only on the taxonomy.
static PREAMBLE: LazyLock<String> = LazyLock::new(build_preamble);

fn build_preamble() -> String {
    let difficulties = json_object(
        DifficultyLevel::ALL
            .iter()
            .map(|d| (d.to_string(), d.describe())),
    );
    let tasks = json_object(TaskType::ALL.iter().map(|t| (t.to_string(), t.describe())));

    let mut prompt = format!(
        "You are an expert AI query classifier. Your task is to determine the difficulty level (1-5) \
and the most appropriate task type for user queries.

Difficulty Levels:
{difficulties}

Task Types:
{tasks}

Follow these rules carefully:
- Analyze the user query thoroughly to understand its complexity and intent.
- Classify the query into exactly one difficulty level (a single number from 1 to 5) and exactly \
one task type, using only the names listed above.
- Reply with the JSON object only, in the format shown below.

Output JSON Format:
{{\"difficulty\": \"string\", \"task_type\": \"string\"}}

Examples:
"
    );

    for (query, difficulty, task) in FEW_SHOT {
        let output = serde_json::json!({ "difficulty": difficulty, "task_type": task });
        prompt.push_str(&format!("User query: {query}\nOutput: {output}\n\n"));
    }

    prompt
}

/// Render `(key, description)` pairs as a pretty JSON object, keeping order.
fn json_object<'a>(entries: impl Iterator<Item = (String, &'a str)>) -> String {
    let lines: Vec<String> = entries
        .map(|(key, value)| format!("  {}: {}", Value::from(key), Value::from(value)))
        .collect();
    format!("{{\n{}\n}}", lines.join(",\n"))
}

/// Build the full classification prompt for one query.
pub fn build_prompt(query: &str) -> String {
    format!("{}User query: {query}\nOutput:", PREAMBLE.as_str())
}

/// Extract the two raw labels from the model's reply.
///
/// Tolerates a Markdown code fence and prose around the JSON object. A bare
/// integer difficulty is accepted and stringified; any other shape is
/// [`TriageError::MalformedResponse`].
pub fn parse_reply(content: &str) -> Result<RawClassification, TriageError> {
    let malformed = |message: String| TriageError::MalformedResponse { message };

    let start = content.find('{');
    let end = content.rfind('}');
    let object = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Err(malformed(format!("no JSON object in reply: {content:?}"))),
    };

    let value: Value = serde_json::from_str(object)
        .map_err(|e| malformed(format!("invalid JSON in reply: {e}")))?;

    let difficulty = match value.get("difficulty") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.is_u64() => n.to_string(),
        Some(other) => return Err(malformed(format!("unexpected difficulty value {other}"))),
        None => return Err(malformed("reply is missing `difficulty`".to_string())),
    };

    let task_type = match value.get("task_type") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(malformed(format!("unexpected task_type value {other}"))),
        None => return Err(malformed("reply is missing `task_type`".to_string())),
    };

    Ok(RawClassification::new(difficulty, task_type))
}
