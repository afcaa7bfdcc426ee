//! `witbot models` — list providers and selectable models.

use anyhow::Result;
use colored::Colorize;

use witbot_gateway::Gateway;
use witbot_providers::{model_id, registry};

/// Run the models command.
///
/// `--json` prints the raw discovery document — the same payload an
/// embedding UI would consume.
pub fn run(gateway: Gateway, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&gateway.models())?);
        return Ok(());
    }

    println!();
    for provider in registry::all() {
        let tier = if provider.free {
            "free tier".green()
        } else {
            "paid".yellow()
        };
        println!(
            "  {}  {} — {}",
            provider.display_name.cyan().bold(),
            tier,
            provider.website.dimmed()
        );
        println!("  {}", provider.description.dimmed());

        for model in provider.models {
            println!(
                "    {:<52} {}",
                model_id::join(provider.id, model.id),
                format!(
                    "{} — {} ({} ctx)",
                    model.name,
                    model.description,
                    format_context_window(model.context_window)
                )
                .dimmed()
            );
        }
        println!();
    }

    Ok(())
}

/// Render a context window as "8K" / "1M" style shorthand.
fn format_context_window(tokens: u32) -> String {
    if tokens >= 1_000_000 {
        format!("{}M", tokens / 1_000_000)
    } else if tokens >= 1_000 {
        format!("{}K", tokens / 1_000)
    } else {
        tokens.to_string()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_window_shorthand() {
        assert_eq!(format_context_window(8192), "8K");
        assert_eq!(format_context_window(131072), "131K");
        assert_eq!(format_context_window(1_000_000), "1M");
        assert_eq!(format_context_window(512), "512");
    }
}
