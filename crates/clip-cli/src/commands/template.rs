//! Template command
//!
//! Write the CSV scaffold for card batches.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use clip_ingest::{REQUIRED_COLUMNS, TEMPLATE_CSV};

/// Arguments for the template command
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Output file path
    #[arg(long, short, default_value = "comments_template.csv")]
    pub output: PathBuf,

    /// Force overwrite existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the template command
pub fn execute(args: TemplateArgs) -> Result<()> {
    use colored::Colorize;

    if args.output.exists() && !args.force {
        eprintln!(
            "{} {} already exists. Use --force to overwrite.",
            "⚠".yellow(),
            args.output.display()
        );
        return Ok(());
    }

    fs::write(&args.output, TEMPLATE_CSV)
        .with_context(|| format!("Failed to write to {}", args.output.display()))?;

    println!(
        "{} Wrote CSV template to {}",
        "✓".green(),
        args.output.display().to_string().cyan()
    );
    println!(
        "Required columns: {} (optional: monogram, strip_color)",
        REQUIRED_COLUMNS.join(", ")
    );

    Ok(())
}
