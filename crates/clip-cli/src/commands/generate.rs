//! Generate command
//!
//! Generate the HTML mail from a CSV card batch.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

use clip_core::{generate, Config, DeliveryDateStyle, DocumentConfig};

/// Delivery-date display style options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    /// 月日 (e.g. 9月1日配信号)
    Md,
    /// 年月日 (e.g. 2025年9月1日配信号)
    Ymd,
}

impl From<DateStyle> for DeliveryDateStyle {
    fn from(style: DateStyle) -> Self {
        match style {
            DateStyle::Md => DeliveryDateStyle::MonthDay,
            DateStyle::Ymd => DeliveryDateStyle::YearMonthDay,
        }
    }
}

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// CSV file with card rows
    #[arg(long, short)]
    pub input: PathBuf,

    /// Delivery date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Delivery-date display style
    #[arg(long, value_enum)]
    pub date_style: Option<DateStyle>,

    /// Override the mail <title>
    #[arg(long)]
    pub title: Option<String>,

    /// Override the badge label
    #[arg(long)]
    pub badge: Option<String>,

    /// Override the header headline
    #[arg(long)]
    pub header_title: Option<String>,

    /// Override the description paragraph
    #[arg(long)]
    pub description: Option<String>,

    /// Output file path (default: comment_clip_{YYYYMMDD}.html)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the HTML to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Open the written file in a browser
    #[arg(long)]
    pub open: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let config = Config::load_or_default(config_path)?;

    let mut cards = clip_ingest::read_cards_from_path(&args.input)
        .with_context(|| format!("Failed to read cards from {}", args.input.display()))?;
    tracing::info!(cards = cards.len(), "Loaded card batch");

    // The configured bar accent applies to rows that don't carry their own
    for card in &mut cards {
        if card.comment_bar_color.is_none() {
            card.comment_bar_color = Some(config.cards.comment_bar_color.clone());
        }
    }

    let document_config = build_document_config(&config, &args);
    let document = generate(&document_config, &cards);

    if args.stdout {
        std::io::stdout()
            .write_all(document.html.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&document.file_name));
    std::fs::write(&output_path, &document.html)
        .with_context(|| format!("Failed to write to {}", output_path.display()))?;

    println!(
        "{} Wrote {} ({} cards)",
        "✓".green(),
        output_path.display().to_string().cyan(),
        cards.len().to_string().yellow()
    );

    if args.open {
        super::open_preview(&output_path);
    }

    Ok(())
}

fn build_document_config(config: &Config, args: &GenerateArgs) -> DocumentConfig {
    let delivery_date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut document = DocumentConfig::from_defaults(&config.document, delivery_date);
    if let Some(style) = args.date_style {
        document.delivery_date_style = style.into();
    }
    if let Some(title) = &args.title {
        document.title_text = title.clone();
    }
    if let Some(badge) = &args.badge {
        document.badge_text = badge.clone();
    }
    if let Some(header_title) = &args.header_title {
        document.header_title = header_title.clone();
    }
    if let Some(description) = &args.description {
        document.description_text = description.clone();
    }
    document
}
