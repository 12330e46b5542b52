// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One query end-to-end: classify, validate, route.
//!
//! The query is the unit of failure isolation. A classifier error, timeout
//! or unparseable label degrades that query to the fallback model and the
//! caller carries on with the next one.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use triage_config::model::RoutingConfig;
use triage_core::{Classification, Classifier, TriageError};

use crate::router::{ModelRouter, RoutingDecision};

/// Result of handling one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Classified and routed through the decision table.
    Routed(RoutingDecision),
    /// Classification was skipped or failed; the fallback model applies.
    Fallback { model: String, error: String },
}

impl Outcome {
    /// The model the query should be sent to.
    pub fn model(&self) -> &str {
        match self {
            Outcome::Routed(decision) => &decision.model,
            Outcome::Fallback { model, .. } => model,
        }
    }
}

/// Classifier + router, with the degradation policy applied per query.
pub struct QueryPipeline {
    classifier: Arc<dyn Classifier>,
    router: ModelRouter,
    fallback_model: String,
    timeout: Duration,
    enabled: bool,
}

impl QueryPipeline {
    pub fn new(classifier: Arc<dyn Classifier>, config: &RoutingConfig, timeout: Duration) -> Self {
        Self {
            classifier,
            router: ModelRouter::new(config),
            fallback_model: config.fallback_model.clone(),
            timeout,
            enabled: config.enabled,
        }
    }

    /// Handle one query.
    ///
    /// Only an empty query is an error; it is rejected before the classifier
    /// is called. Every other failure becomes [`Outcome::Fallback`].
    pub async fn handle(&self, query: &str) -> Result<Outcome, TriageError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TriageError::EmptyQuery);
        }

        if !self.enabled {
            return Ok(Outcome::Fallback {
                model: self.router.default_model().to_string(),
                error: "routing disabled".to_string(),
            });
        }

        match self.classify(query).await {
            Ok(classification) => {
                let decision = self.router.decide(classification);
                debug!(
                    difficulty = %classification.difficulty,
                    task = %classification.task,
                    model = decision.model.as_str(),
                    source = ?decision.source,
                    "query routed"
                );
                Ok(Outcome::Routed(decision))
            }
            Err(e) => {
                warn!(
                    classifier = self.classifier.name(),
                    error = %e,
                    fallback = self.fallback_model.as_str(),
                    "classification failed, using fallback model"
                );
                Ok(Outcome::Fallback {
                    model: self.fallback_model.clone(),
                    error: e.to_string(),
                })
            }
        }
    }

    async fn classify(&self, query: &str) -> Result<Classification, TriageError> {
        let raw = tokio::time::timeout(self.timeout, self.classifier.classify(query))
            .await
            .map_err(|_| TriageError::Timeout {
                duration: self.timeout,
            })??;

        debug!(
            classifier = self.classifier.name(),
            difficulty = raw.difficulty.as_str(),
            task_type = raw.task_type.as_str(),
            "raw classification received"
        );

        Classification::parse(&raw)
    }
}
