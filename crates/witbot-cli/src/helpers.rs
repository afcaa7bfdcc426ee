//! Shared CLI helpers — path expansion, answer printing, version banner.

use std::path::PathBuf;

use colored::Colorize;

use witbot_gateway::{AskFailure, AskOk};

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Print an answer envelope to stdout.
pub fn print_answer(ok: &AskOk) {
    println!();
    println!("{}", "🎩 Witbot".cyan().bold());
    if ok.answer.is_empty() {
        println!("{}", "(no answer)".dimmed());
    } else {
        println!("{}", ok.answer);
    }
    println!(
        "{}",
        format!("— {} via {}", ok.model_name, ok.provider).dimmed()
    );
    println!();
}

/// Render a failure envelope as a one-line error message.
pub fn format_failure(failure: &AskFailure) -> String {
    let mut message = format!("{} (status {})", failure.body.error, failure.status);
    if let Some(details) = &failure.body.details {
        message.push_str(&format!(" — {details}"));
    }
    if failure.body.needs_config == Some(true) {
        message.push_str("\nSet the provider's API key in ~/.witbot/config.json or its environment variable.");
    }
    message
}

/// Print the banner shown at REPL start.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "🎩 Witbot".cyan().bold(), version.dimmed());
    println!(
        "{}",
        "Ask anything, or type \"exit\" to quit.".dimmed()
    );
    println!();
}

/// Print a "thinking" spinner placeholder (for non-log mode).
pub fn print_thinking() {
    eprint!("{}", "⠿ composing...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
