//! `witbot status` — show configuration and provider key status.

use anyhow::Result;
use colored::Colorize;

use witbot_core::config::{get_config_path, load_config};
use witbot_providers::credentials::KeySet;
use witbot_providers::registry::PROVIDERS;

use crate::helpers;

/// Run the status command.
pub fn run(config_path: Option<&str>) -> Result<()> {
    let path = config_path
        .map(helpers::expand_tilde)
        .unwrap_or_else(get_config_path);
    let config = load_config(Some(&path));
    let env_keys = KeySet::from_env();

    println!();
    println!("{}", "🎩 Witbot Status".cyan().bold());
    println!();

    // Config
    let config_exists = path.exists();
    println!(
        "  {:<14} {} {}",
        "Config:".bold(),
        path.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Default model
    println!("  {:<14} {}", "Model:".bold(), config.defaults.model);

    // Temperature & tokens
    println!(
        "  {:<14} {} | max_tokens: {}",
        "Parameters:".bold(),
        format!("temp: {}", config.defaults.temperature).dimmed(),
        format!("{}", config.defaults.max_tokens).dimmed(),
    );

    // Providers — key presence and which tier supplies it
    println!();
    println!("  {}", "Providers:".bold());

    for spec in PROVIDERS {
        let status = if config.providers.stored_key(spec.id).is_some() {
            format!("{} (key in config)", "✓".green())
        } else if env_keys.get(spec.id).is_some() {
            format!("{} (via {})", "✓".green(), spec.env_key)
        } else {
            format!("{}", "· not configured".dimmed())
        };
        println!(
            "    {:<22} {:<3} {}",
            spec.display_name,
            format!("{}", spec.models.len()).dimmed(),
            status
        );
    }

    println!();

    Ok(())
}
