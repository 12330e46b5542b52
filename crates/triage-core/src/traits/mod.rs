// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams for swappable backends.

pub mod classifier;

pub use classifier::Classifier;
