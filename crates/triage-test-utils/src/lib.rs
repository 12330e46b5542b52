// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Triage integration tests.
//!
//! Provides a deterministic classifier stub so the pipeline and the CLI can
//! be tested without a network backend.
//!
//! # Components
//!
//! - [`MockClassifier`] - Classifier with pre-configured responses

pub mod mock_classifier;

pub use mock_classifier::MockClassifier;
