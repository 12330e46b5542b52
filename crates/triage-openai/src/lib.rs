// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible classifier backend for Triage.
//!
//! This crate implements [`Classifier`] by asking a chat completions model to
//! label the query, using a fixed few-shot prompt and a two-field JSON reply.

pub mod client;
pub mod prompt;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use triage_config::model::ClassifierConfig;
use triage_core::{Classifier, RawClassification, TriageError};

use crate::client::OpenAiClient;
use crate::types::{ChatMessage, ChatRequest};

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Chat-completions classifier implementing [`Classifier`].
///
/// API key resolution order: config -> `OPENAI_API_KEY` env var -> error.
pub struct OpenAiClassifier {
    client: OpenAiClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClassifier {
    /// Creates a classifier from the `[classifier]` config section.
    pub fn new(config: &ClassifierConfig) -> Result<Self, TriageError> {
        let api_key = resolve_api_key(&config.api_key)?;
        let client = OpenAiClient::new(
            &api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(
            model = config.model,
            endpoint = client.endpoint(),
            "OpenAI classifier initialized"
        );

        Ok(Self::with_client(client, config))
    }

    /// Creates a classifier around an existing client.
    pub fn with_client(client: OpenAiClient, config: &ClassifierConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn to_request(&self, query: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt::build_prompt(query))],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    fn name(&self) -> &str {
        "openai"
    }

    async fn classify(&self, query: &str) -> Result<RawClassification, TriageError> {
        let response = self.client.complete(&self.to_request(query)).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TriageError::MalformedResponse {
                message: "response contained no choices".into(),
            })?;

        let content = choice
            .message
            .content
            .ok_or_else(|| TriageError::MalformedResponse {
                message: format!(
                    "response message had no content (finish_reason: {})",
                    choice.finish_reason.as_deref().unwrap_or("none")
                ),
            })?;

        debug!(reply = content.as_str(), "classifier reply");
        prompt::parse_reply(&content)
    }
}

/// Resolves the API key: non-empty config value first, then the environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, TriageError> {
    if let Some(key) = config_key.as_deref().filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(TriageError::Config(format!(
            "OpenAI API key not found. Set classifier.api_key in config or the {API_KEY_ENV} environment variable."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> ClassifierConfig {
        ClassifierConfig {
            api_key: Some("sk-test".into()),
            base_url: base_url.to_string(),
            ..ClassifierConfig::default()
        }
    }

    fn reply(content: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}]
        }))
    }

    async fn classify_with(response: ResponseTemplate) -> Result<RawClassification, TriageError> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(response)
            .mount(&server)
            .await;
        OpenAiClassifier::new(&config(&server.uri()))?
            .classify("What's the capital of France?")
            .await
    }

    #[test]
    fn resolve_api_key_from_config() {
        assert_eq!(resolve_api_key(&Some("sk-abc".into())).unwrap(), "sk-abc");
    }

    #[test]
    #[serial]
    fn resolve_api_key_falls_back_to_env() {
        // SAFETY: env mutation is confined to #[serial] tests.
        unsafe { std::env::set_var(API_KEY_ENV, "sk-from-env") };
        let from_none = resolve_api_key(&None);
        let from_empty = resolve_api_key(&Some(String::new()));
        unsafe { std::env::remove_var(API_KEY_ENV) };

        assert_eq!(from_none.unwrap(), "sk-from-env");
        assert_eq!(from_empty.unwrap(), "sk-from-env");
    }

    #[test]
    #[serial]
    fn missing_api_key_is_config_error() {
        unsafe { std::env::remove_var(API_KEY_ENV) };
        let err = resolve_api_key(&None).unwrap_err();
        assert!(matches!(err, TriageError::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV), "got: {err}");
    }

    #[test]
    fn request_carries_config_and_prompt() {
        let classifier = OpenAiClassifier::new(&config("http://localhost:1")).unwrap();
        let request = classifier.to_request("How do tides work?");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.max_tokens, 100);
        assert_eq!(request.messages.len(), 1);
        assert!(
            request.messages[0]
                .content
                .ends_with("User query: How do tides work?\nOutput:")
        );
    }

    #[tokio::test]
    async fn classifies_from_json_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains("User query: Sort a list in Rust"))
            .respond_with(reply(
                r#"{"difficulty": "3", "task_type": "Coding"}"#.into(),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let raw = OpenAiClassifier::new(&config(&server.uri()))
            .unwrap()
            .classify("Sort a list in Rust")
            .await
            .unwrap();
        assert_eq!(raw, RawClassification::new("3", "Coding"));
    }

    #[tokio::test]
    async fn fenced_reply_is_accepted() {
        let raw = classify_with(reply(
            "```json\n{\"difficulty\": \"2\", \"task_type\": \"Questions\"}\n```".into(),
        ))
        .await
        .unwrap();
        assert_eq!(raw, RawClassification::new("2", "Questions"));
    }

    #[tokio::test]
    async fn prose_reply_is_malformed() {
        let err = classify_with(reply("This looks like a geography question.".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, TriageError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn null_content_is_malformed() {
        let err = classify_with(reply(serde_json::Value::Null))
            .await
            .unwrap_err();
        assert!(matches!(err, TriageError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn empty_choices_is_malformed() {
        let err = classify_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, TriageError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn http_error_is_classifier_error() {
        let err = classify_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .await
            .unwrap_err();
        assert!(matches!(err, TriageError::Classifier { .. }));
    }
}
