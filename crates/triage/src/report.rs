// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human and machine-readable rendering of routing results.

use colored::Colorize;
use serde::Serialize;
use triage_core::{DifficultyLevel, TaskType, TriageError};
use triage_router::{ModelRouter, Outcome, RouteSource};

/// JSON document printed by `triage route --json`.
#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    query: &'a str,
    model: &'a str,
    difficulty_description: Option<&'static str>,
    task_description: Option<&'static str>,
    result: &'a Outcome,
}

/// Multi-line report for one handled query.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Routed(decision) => {
            let difficulty = decision.classification.difficulty;
            let task = decision.classification.task;
            let source = match decision.source {
                RouteSource::TaskRule => "task rule",
                RouteSource::DifficultyFallback => "difficulty default",
            };
            format!(
                "{}  {} ({})\n{}   {} ({})\n{}       {}\n{}      {} [{source}]",
                "Difficulty:".bold(),
                difficulty.to_string().cyan(),
                difficulty.describe(),
                "Task type:".bold(),
                task.to_string().cyan(),
                task.describe(),
                "Model:".bold(),
                decision.model.green().bold(),
                "Reason:".bold(),
                decision.reason.dimmed(),
            )
        }
        Outcome::Fallback { model, error } => format!(
            "{} {error}\n{}       {} (fallback)",
            "warning:".yellow().bold(),
            "Model:".bold(),
            model.green().bold(),
        ),
    }
}

/// Pretty-printed JSON report for one handled query.
pub fn render_json(query: &str, outcome: &Outcome) -> Result<String, TriageError> {
    let (difficulty_description, task_description) = match outcome {
        Outcome::Routed(decision) => (
            Some(decision.classification.difficulty.describe()),
            Some(decision.classification.task.describe()),
        ),
        Outcome::Fallback { .. } => (None, None),
    };

    let report = RouteReport {
        query,
        model: outcome.model(),
        difficulty_description,
        task_description,
        result: outcome,
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| TriageError::Internal(format!("failed to serialize report: {e}")))
}

/// Both description tables.
pub fn render_taxonomy() -> String {
    let mut out = format!("{}\n", "Difficulty levels".bold());
    for level in DifficultyLevel::ALL {
        out.push_str(&format!("  {}  {}\n", level.to_string().cyan(), level.describe()));
    }

    out.push_str(&format!("\n{}\n", "Task types".bold()));
    for task in TaskType::ALL {
        out.push_str(&format!("  {:<12} {}\n", task.to_string().cyan(), task.describe()));
    }
    out
}

/// The full task x difficulty decision table for the configured router.
///
/// Tasks with a rule are marked with `*`.
pub fn render_table(router: &ModelRouter) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(TaskType::ALL.len() + 1);

    let mut header = vec!["task".to_string()];
    header.extend(DifficultyLevel::ALL.iter().map(|d| d.to_string()));
    rows.push(header);

    for task in TaskType::ALL {
        let marker = if router.has_rule(task) { "*" } else { "" };
        let mut row = vec![format!("{task}{marker}")];
        row.extend(
            DifficultyLevel::ALL
                .iter()
                .map(|&d| router.route(triage_core::Classification::new(d, task)).to_string()),
        );
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|col| rows.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out.push_str("\n* per-task rule; other tasks use the difficulty defaults\n");
    out
}
