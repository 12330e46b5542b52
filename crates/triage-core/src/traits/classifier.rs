// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classifier trait for query classification backends (LLM, heuristic, stubs).

use async_trait::async_trait;

use crate::error::TriageError;
use crate::types::RawClassification;

/// A backend that assigns a raw difficulty and task type to a query.
///
/// Implementations return the two labels as strings; callers must run them
/// through the taxonomy parsers before acting on them. Any failure (backend
/// unavailable, malformed answer, timeout) is reported as an error and no
/// partial result is returned.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Classify a trimmed, non-empty query.
    async fn classify(&self, query: &str) -> Result<RawClassification, TriageError>;
}
