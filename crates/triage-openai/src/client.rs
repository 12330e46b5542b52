// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat completions endpoints.
//!
//! Provides [`OpenAiClient`] which handles bearer authentication, request
//! construction, and a single retry on transient errors.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use triage_core::TriageError;

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

/// HTTP client for chat completions.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - bearer token sent on every request
    /// * `base_url` - API root, e.g. "https://api.openai.com/v1"
    /// * `timeout` - per-request HTTP timeout
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, TriageError> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| TriageError::Config(format!("invalid API key header value: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| TriageError::Classifier {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            max_retries: 1,
            retry_delay: Duration::from_secs(1),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[cfg(test)]
    fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Sends a completion request and returns the parsed response.
    ///
    /// On transient errors (429, 500, 502, 503), retries once after a short delay.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, TriageError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|e| TriageError::Classifier {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| TriageError::Classifier {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&body).map_err(|e| TriageError::MalformedResponse {
                    message: format!("failed to parse API response: {e}"),
                });
            }

            let body = response.text().await.unwrap_or_default();

            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(api_error(status, &body));
                continue;
            }

            return Err(api_error(status, &body));
        }

        Err(last_error.unwrap_or_else(|| TriageError::Classifier {
            message: "completion request failed after retries".into(),
            source: None,
        }))
    }
}

fn api_error(status: reqwest::StatusCode, body: &str) -> TriageError {
    let message = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(api_err) => format!(
            "API error {status} ({}): {}",
            api_err.error.type_.as_deref().unwrap_or("unknown"),
            api_err.error.message
        ),
        Err(_) => format!("API returned {status}: {body}"),
    };
    TriageError::Classifier {
        message,
        source: None,
    }
}

/// Returns true for HTTP status codes worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503)
}
