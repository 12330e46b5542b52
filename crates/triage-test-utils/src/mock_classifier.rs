// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock classifier for deterministic testing.
//!
//! `MockClassifier` implements `Classifier` with pre-configured results,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use triage_core::{Classifier, RawClassification, TriageError};

/// A mock classifier that returns pre-configured results.
///
/// Results are popped from a FIFO queue. When the queue is empty, the
/// classification `("1", "Questions")` is returned. Every query received is
/// recorded for later assertions.
pub struct MockClassifier {
    responses: Arc<Mutex<VecDeque<Result<RawClassification, TriageError>>>>,
    queries: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockClassifier {
    /// Create a new mock classifier with an empty response queue.
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Create a mock classifier pre-loaded with the given results.
    pub fn with_responses(responses: Vec<Result<RawClassification, TriageError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            queries: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Sleep before answering, to exercise timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Add a result to the end of the queue.
    pub async fn add_response(&self, response: Result<RawClassification, TriageError>) {
        self.responses.lock().await.push_back(response);
    }

    /// Queries received so far, in order.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }

    async fn next_response(&self) -> Result<RawClassification, TriageError> {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(RawClassification::new("1", "Questions")))
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    fn name(&self) -> &str {
        "mock-classifier"
    }

    async fn classify(&self, query: &str) -> Result<RawClassification, TriageError> {
        self.queries.lock().await.push(query.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.next_response().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_fifo_then_default() {
        let mock = MockClassifier::with_responses(vec![Ok(RawClassification::new("4", "Math"))]);
        mock.add_response(Err(TriageError::MalformedResponse {
            message: "bad".into(),
        }))
        .await;

        assert_eq!(
            mock.classify("a").await.unwrap(),
            RawClassification::new("4", "Math")
        );
        assert!(mock.classify("b").await.is_err());
        assert_eq!(
            mock.classify("c").await.unwrap(),
            RawClassification::new("1", "Questions")
        );
        assert_eq!(mock.queries().await, vec!["a", "b", "c"]);
    }
}
