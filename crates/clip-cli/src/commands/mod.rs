//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod form;
pub mod generate;
pub mod template;

use clap::{Parser, Subcommand};
use std::path::Path;

/// comment-clip - コメントクリップ（HTMLメール）メーカー
#[derive(Debug, Parser)]
#[command(name = "comment-clip")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (default: ./clip.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the HTML mail from a CSV card batch
    Generate(generate::GenerateArgs),

    /// Build a mail interactively, field by field
    Form(form::FormArgs),

    /// Write the CSV scaffold for card batches
    Template(template::TemplateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Generate(args) => generate::execute(args, cli.config.as_deref()),
        Commands::Form(args) => form::execute(args, cli.config.as_deref()),
        Commands::Template(args) => template::execute(args),
        Commands::Config(cmd) => config::execute(cmd, cli.config.as_deref()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Open the written HTML file with the platform opener.
///
/// A failure here is a notice, not an error: the file is already on disk
/// and can still be used.
pub(crate) fn open_preview(path: &Path) {
    use colored::Colorize;

    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    };

    match std::process::Command::new(opener).arg(path).spawn() {
        Ok(_) => println!("{} Opening preview in browser...", "✓".green()),
        Err(e) => eprintln!(
            "{} Preview failed to open ({}). The HTML file is still available at {}",
            "⚠".yellow(),
            e,
            path.display()
        ),
    }
}
