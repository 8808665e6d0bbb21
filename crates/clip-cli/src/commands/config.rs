//! Config command
//!
//! Manage comment-clip configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

use clip_core::config::DEFAULT_CONFIG_FILE;
use clip_core::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default clip.toml
    Init {
        /// Force overwrite existing configuration
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init { force } => init_config(force),
    }
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let source = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = Config::load_or_default(config_path)?;
    let content = config.to_toml_string()?;

    println!("{}", "Configuration:".bold().underline());
    if source.exists() {
        println!("{}", source.display().to_string().dimmed());
    } else {
        println!("{}", "(built-in defaults)".dimmed());
    }
    println!();
    println!("{}", content);

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use --force to overwrite.",
            "⚠".yellow(),
            config_path.display()
        );
        return Ok(());
    }

    let content = Config::default().to_toml_string()?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display().to_string().cyan()
    );
    println!("Edit it to change the header defaults used by generate/form.");

    Ok(())
}
