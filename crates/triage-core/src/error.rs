// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Triage query router.

use thiserror::Error;

/// The primary error type used across classification, parsing and routing.
///
/// Classifier failures (`Classifier`, `MalformedResponse`, `Timeout`) and
/// taxonomy failures (`InvalidDifficulty`, `InvalidTaskType`) are all
/// recoverable: the pipeline degrades the affected query to the fallback model.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Configuration errors (invalid values, missing API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// Classifier backend errors (connection failure, HTTP error status).
    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The classifier answered, but not with the expected two-field structure.
    #[error("malformed classifier response: {message}")]
    MalformedResponse { message: String },

    /// The classifier did not answer within the configured timeout.
    #[error("classification timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Raw difficulty was not exactly one of "1".."5".
    #[error("invalid difficulty level `{raw}`: expected one of 1, 2, 3, 4, 5")]
    InvalidDifficulty { raw: String },

    /// Raw task type did not match a canonical task name.
    #[error("invalid task type `{raw}`")]
    InvalidTaskType { raw: String },

    /// The query was empty or whitespace-only.
    #[error("query must not be empty")]
    EmptyQuery,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
