// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by classifier backends and the router.

use serde::{Deserialize, Serialize};

/// Unvalidated classifier output.
///
/// Both fields are expected to hold canonical taxonomy strings, but nothing
/// guarantees it; see [`crate::taxonomy::Classification::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClassification {
    /// Raw difficulty, e.g. `"3"`.
    pub difficulty: String,
    /// Raw task type, e.g. `"Coding"`.
    pub task_type: String,
}

impl RawClassification {
    pub fn new(difficulty: impl Into<String>, task_type: impl Into<String>) -> Self {
        Self {
            difficulty: difficulty.into(),
            task_type: task_type.into(),
        }
    }
}
