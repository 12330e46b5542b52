// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification routing for Triage.
//!
//! This crate provides:
//! - [`ModelRouter`]: decision table from (difficulty, task type) to a model
//! - [`HeuristicClassifier`]: offline keyword-based classifier backend
//! - [`QueryPipeline`]: one query end-to-end, degrading to the fallback
//!   model when classification fails

pub mod classifier;
pub mod pipeline;
pub mod router;

pub use classifier::HeuristicClassifier;
pub use pipeline::{Outcome, QueryPipeline};
pub use router::{ModelRouter, RouteSource, RoutingDecision};
