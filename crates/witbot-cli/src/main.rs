//! Witbot CLI — entry point.
//!
//! # Commands
//!
//! - `witbot ask [-q QUESTION] [-m MODEL]` — ask (single-shot or REPL)
//! - `witbot models [--json]` — list providers and selectable models
//! - `witbot status` — show configuration and provider key status

mod helpers;
mod models_cmd;
mod repl;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use witbot_core::config::load_config;
use witbot_gateway::{AskRequest, Gateway};
use witbot_providers::credentials::KeySet;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// 🎩 Witbot — formal & funny answers from the LLM provider of your choice
#[derive(Parser)]
#[command(name = "witbot", version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to ~/.witbot/config.json)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question (single-shot or interactive REPL)
    Ask {
        /// Single question (non-interactive). Omit for REPL mode.
        #[arg(short, long)]
        question: Option<String>,

        /// Composite model id (format: "provider:model")
        #[arg(short, long)]
        model: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// List providers and selectable models
    Models {
        /// Print the raw discovery document as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show configuration and provider key status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            model,
            logs,
        } => {
            init_logging(logs);
            run_ask(question, model, cli.config.as_deref()).await
        }
        Commands::Models { json } => {
            init_logging(false);
            models_cmd::run(build_gateway(cli.config.as_deref()), json)
        }
        Commands::Status => {
            init_logging(false);
            status::run(cli.config.as_deref())
        }
    }
}

// ─────────────────────────────────────────────
// Ask command
// ─────────────────────────────────────────────

async fn run_ask(
    question: Option<String>,
    model: Option<String>,
    config_path: Option<&str>,
) -> Result<()> {
    let gateway = build_gateway(config_path);

    match question {
        Some(q) => {
            // Single-shot mode
            info!(model = model.as_deref().unwrap_or("default"), "asking single question");
            let request = AskRequest {
                question: q,
                model,
                api_keys: None,
            };
            match gateway.ask(request).await {
                Ok(ok) => helpers::print_answer(&ok),
                Err(failure) => anyhow::bail!(helpers::format_failure(&failure)),
            }
        }
        None => {
            // Interactive REPL mode
            repl::run(gateway, model).await?;
        }
    }

    Ok(())
}

/// Build a `Gateway` from the loaded configuration and the environment
/// fallback keys.
fn build_gateway(config_path: Option<&str>) -> Gateway {
    let path = config_path.map(helpers::expand_tilde);
    let config = load_config(path.as_deref());
    let fallback_keys = KeySet::from_env();
    Gateway::new(config, fallback_keys)
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("witbot=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
