// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `triage shell` command implementation.
//!
//! Reads one query per line, routes it, and prints the report. A failed
//! classification degrades that query only; the loop keeps going until
//! `exit`, Ctrl-C or Ctrl-D.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;
use triage_core::TriageError;
use triage_router::QueryPipeline;

use crate::report;

/// What one line of input asks the session to do.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellInput<'a> {
    Exit,
    Empty,
    Query(&'a str),
}

/// Interpret a line. `exit` matches case-insensitively after trimming.
pub fn parse_line(line: &str) -> ShellInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        ShellInput::Empty
    } else if trimmed.eq_ignore_ascii_case("exit") {
        ShellInput::Exit
    } else {
        ShellInput::Query(trimmed)
    }
}

/// Handle one query and return the text to print.
pub async fn respond(pipeline: &QueryPipeline, query: &str) -> String {
    match pipeline.handle(query).await {
        Ok(outcome) => report::render_outcome(&outcome),
        Err(e) => format!("{} {e}", "warning:".yellow().bold()),
    }
}

/// Runs the interactive session until the user quits.
pub async fn run_shell(pipeline: &QueryPipeline) -> Result<(), TriageError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| TriageError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "triage shell".bold().green());
    println!("Type a query to route it, or {} to quit.\n", "exit".yellow());

    loop {
        match rl.readline("> ") {
            Ok(line) => match parse_line(&line) {
                ShellInput::Exit => break,
                ShellInput::Empty => {
                    println!("{} please enter a query", "warning:".yellow().bold());
                }
                ShellInput::Query(query) => {
                    let _ = rl.add_history_entry(query);
                    println!("{}\n", respond(pipeline, query).await);
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    debug!("shell session ended");
    println!("{}", "goodbye".dimmed());
    Ok(())
}
