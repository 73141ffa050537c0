//! Configuration commands

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{API_KEY_ENV, MarqueeConfig};

/// Print the effective configuration
pub fn cmd_config_show() -> Result<()> {
    let config = MarqueeConfig::load()?;
    let path = MarqueeConfig::config_path()?;

    println!("{}", "Configuration".bold());
    if MarqueeConfig::exists() {
        println!("  File: {}", path.display());
    } else {
        println!("  File: {} {}", path.display(), "(not created, using defaults)".dimmed());
    }
    println!();

    let key_state = if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty()) {
        format!("set via {API_KEY_ENV}").green()
    } else if config.api.resolved_api_key().is_some() {
        "set in file".green()
    } else {
        "missing".red()
    };

    println!("  {:<16} {}", "api.base_url", config.api.base_url);
    println!("  {:<16} {}", "api.api_key", key_state);
    println!("  {:<16} {}", "api.language", config.api.language);
    println!(
        "  {:<16} {}",
        "api.region",
        config.api.region.as_deref().unwrap_or("-")
    );
    println!("  {:<16} {}", "browse.page_size", config.browse.page_size);
    println!("  {:<16} {}", "browse.offset", config.browse.overlay_offset);
    println!("  {:<16} {}ms", "browse.slide", config.browse.transition_ms);
    println!("  {:<16} {}ms", "browse.gate", config.browse.gate_timeout_ms);
    println!("  {:<16} {}min", "cache.ttl", config.cache.ttl_minutes);
    println!("  {:<16} {}", "tui.theme", config.tui.theme);
    Ok(())
}

/// Print the configuration file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", MarqueeConfig::config_path()?.display());
    Ok(())
}

/// Write a default configuration file
pub fn cmd_config_init(force: bool) -> Result<()> {
    let path = MarqueeConfig::config_path()?;
    if path.exists() && !force {
        println!(
            "{} Config already exists at {} (use --force to overwrite)",
            "!".yellow(),
            path.display()
        );
        return Ok(());
    }

    MarqueeConfig::default()
        .save_to(&path)
        .context("Failed to write default config")?;

    println!("{} Wrote default config", "+".green());
    println!("  Config saved to: {}", path.display());
    println!("  Set {} or api.api_key to fetch listings", API_KEY_ENV);
    Ok(())
}
