// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Triage query router.
//!
//! Defines the closed classification taxonomy, the shared error type, and the
//! [`Classifier`] trait every classification backend implements.

pub mod error;
pub mod taxonomy;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TriageError;
pub use taxonomy::{parse_difficulty, parse_task_type, Classification, DifficultyLevel, TaskType};
pub use traits::Classifier;
pub use types::RawClassification;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triage_error_has_all_variants() {
        let _config = TriageError::Config("test".into());
        let _classifier = TriageError::Classifier {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _malformed = TriageError::MalformedResponse {
            message: "test".into(),
        };
        let _timeout = TriageError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _difficulty = TriageError::InvalidDifficulty { raw: "7".into() };
        let _task = TriageError::InvalidTaskType { raw: "Poetry".into() };
        let _empty = TriageError::EmptyQuery;
        let _internal = TriageError::Internal("test".into());
    }

    #[test]
    fn taxonomy_sets_are_closed() {
        assert_eq!(DifficultyLevel::ALL.len(), 5);
        assert_eq!(TaskType::ALL.len(), 10);
    }

    #[test]
    fn classifier_is_object_safe() {
        fn _assert_dyn(_: &dyn Classifier) {}
    }
}
