// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat completions API request/response types.

use serde::{Deserialize, Serialize};

/// A request to the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,

    /// Conversation messages.
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature.
    pub temperature: f32,

    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user" or "assistant".
    pub role: String,

    /// Text content.
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A non-streaming chat completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,

    pub message: ResponseMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message within a choice. `content` is null for refusals and
/// tool calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,

    #[serde(rename = "type", default)]
    pub type_: Option<String>,
}
