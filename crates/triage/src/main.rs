// SPDX-FileCopyrightText: 2026 Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triage - route LLM queries to a model by difficulty and task type.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod report;
mod shell;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use triage_config::model::{ClassifierBackend, ClassifierConfig, TriageConfig};
use triage_core::{Classifier, TriageError};
use triage_openai::OpenAiClassifier;
use triage_router::{HeuristicClassifier, ModelRouter, QueryPipeline};

/// Triage - route LLM queries to a model by difficulty and task type.
#[derive(Parser, Debug)]
#[command(name = "triage", version, about, long_about = None)]
struct Cli {
    /// Load this config file instead of searching the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive routing session (default).
    Shell,
    /// Classify and route a single query.
    Route {
        /// The query to route.
        query: String,
        /// Print a machine-readable JSON report.
        #[arg(long)]
        json: bool,
    },
    /// Print the difficulty and task type descriptions.
    Taxonomy,
    /// Print the decision table for the configured routing.
    Table,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => triage_config::load_and_validate_path(path),
        None => triage_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            triage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    if let Err(e) = run(cli.command.unwrap_or(Commands::Shell), &config).await {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &TriageConfig) -> Result<(), TriageError> {
    match command {
        Commands::Taxonomy => {
            print!("{}", report::render_taxonomy());
        }
        Commands::Table => {
            print!("{}", report::render_table(&ModelRouter::new(&config.routing)));
        }
        Commands::Route { query, json } => {
            let pipeline = build_pipeline(config)?;
            let outcome = pipeline.handle(&query).await?;
            if json {
                println!("{}", report::render_json(&query, &outcome)?);
            } else {
                println!("{}", report::render_outcome(&outcome));
            }
        }
        Commands::Shell => {
            let pipeline = build_pipeline(config)?;
            shell::run_shell(&pipeline).await?;
        }
    }
    Ok(())
}

fn build_pipeline(config: &TriageConfig) -> Result<QueryPipeline, TriageError> {
    let classifier = build_classifier(&config.classifier)?;
    info!(
        classifier = classifier.name(),
        routing_enabled = config.routing.enabled,
        "query pipeline ready"
    );
    Ok(QueryPipeline::new(
        classifier,
        &config.routing,
        Duration::from_secs(config.classifier.timeout_secs),
    ))
}

fn build_classifier(config: &ClassifierConfig) -> Result<Arc<dyn Classifier>, TriageError> {
    Ok(match config.backend {
        ClassifierBackend::Openai => Arc::new(OpenAiClassifier::new(config)?),
        ClassifierBackend::Heuristic => Arc::new(HeuristicClassifier::new()),
    })
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("triage={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn route_parses_query_and_json_flag() {
        let cli = Cli::parse_from(["triage", "route", "hello there", "--json"]);
        match cli.command {
            Some(Commands::Route { query, json }) => {
                assert_eq!(query, "hello there");
                assert!(json);
            }
            other => panic!("expected route, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::parse_from(["triage", "--config", "custom.toml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn heuristic_backend_needs_no_api_key() {
        let config = ClassifierConfig {
            backend: ClassifierBackend::Heuristic,
            ..ClassifierConfig::default()
        };
        assert_eq!(build_classifier(&config).unwrap().name(), "heuristic");
    }

    #[test]
    fn openai_backend_uses_configured_key() {
        let config = ClassifierConfig {
            api_key: Some("sk-test".into()),
            ..ClassifierConfig::default()
        };
        assert_eq!(build_classifier(&config).unwrap().name(), "openai");
    }

    #[tokio::test]
    async fn routes_with_default_config_and_heuristic_backend() {
        let mut config = TriageConfig::default();
        config.classifier.backend = ClassifierBackend::Heuristic;
        let pipeline = build_pipeline(&config).unwrap();

        let outcome = pipeline
            .handle("Write a Python function to add two numbers.")
            .await
            .unwrap();
        assert_eq!(outcome.model(), "deepseek-coder");
    }
}
