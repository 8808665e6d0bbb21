//! Form command
//!
//! Build a mail interactively, field by field, mirroring the weekly
//! editing flow: header settings first, then each card, then the output.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use console::style;
use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};

use clip_core::render::color_for_index;
use clip_core::{generate, CardBuilder, CardRecord, Config, DeliveryDateStyle, DocumentConfig};

/// Arguments for the form command
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Output file path (default: comment_clip_{YYYYMMDD}.html)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Open the written file in a browser
    #[arg(long)]
    pub open: bool,
}

/// Execute the form command
pub fn execute(args: FormArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let config = Config::load_or_default(config_path)?;

    println!("\n{}", style("① 基本設定（ヘッダ）").bold());
    let document_config = prompt_header(&config)?;

    println!("\n{}", style("② カード設定（記事＋コメント）").bold());
    let comment_bar_color: String = Input::new()
        .with_prompt("コメント左バーの色")
        .default(config.cards.comment_bar_color.clone())
        .interact_text()?;

    let card_count: usize = Input::new()
        .with_prompt("カード数 (1-20)")
        .default(3)
        .validate_with(|count: &usize| {
            if (1..=20).contains(count) {
                Ok(())
            } else {
                Err("1〜20で指定してください")
            }
        })
        .interact_text()?;

    let mut cards = Vec::with_capacity(card_count);
    for index in 0..card_count {
        println!("\n{}", style(format!("カード {}", index + 1)).bold());
        cards.push(prompt_card(index, &comment_bar_color)?);
    }

    println!("\n{}", style("③ 生成・ダウンロード").bold());
    let document = generate(&document_config, &cards);
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&document.file_name));

    if output_path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} を上書きしますか？", output_path.display()))
            .default(true)
            .interact()?;
        if !overwrite {
            println!("中止しました。");
            return Ok(());
        }
    }

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

fn prompt_header(config: &Config) -> Result<DocumentConfig> {
    let title_text: String = Input::new()
        .with_prompt("メールの<title>（ブラウザ表示用）")
        .default(config.document.title_text.clone())
        .interact_text()?;
    let badge_text: String = Input::new()
        .with_prompt("バッジ名")
        .default(config.document.badge_text.clone())
        .interact_text()?;
    let header_title: String = Input::new()
        .with_prompt("ヘッダーの大見出し")
        .default(config.document.header_title.clone())
        .interact_text()?;

    let delivery_date: NaiveDate = Input::new()
        .with_prompt("配信日 (YYYY-MM-DD)")
        .default(chrono::Local::now().date_naive())
        .interact_text()?;

    let style_items = [
        "月日（例: 9月1日配信号）",
        "年月日（例: 2025年9月1日配信号）",
    ];
    let style_default = match config.document.date_style {
        DeliveryDateStyle::MonthDay => 0,
        DeliveryDateStyle::YearMonthDay => 1,
    };
    let style_index = Select::new()
        .with_prompt("配信日の表記")
        .items(&style_items)
        .default(style_default)
        .interact()?;
    let delivery_date_style = if style_index == 1 {
        DeliveryDateStyle::YearMonthDay
    } else {
        DeliveryDateStyle::MonthDay
    };

    let description_text: String = Input::new()
        .with_prompt("説明文")
        .default(config.document.description_text.clone())
        .interact_text()?;

    Ok(DocumentConfig {
        title_text,
        badge_text,
        header_title,
        delivery_date,
        delivery_date_style,
        description_text,
    })
}

fn prompt_card(index: usize, comment_bar_color: &str) -> Result<CardRecord> {
    let issue: String = Input::new()
        .with_prompt("号数（例: 第3742号）")
        .default(format!("第{}号", 3742 + index))
        .interact_text()?;
    let title: String = Input::new()
        .with_prompt("記事タイトル")
        .allow_empty(true)
        .interact_text()?;
    let comment: String = Input::new()
        .with_prompt("コメント本文（\\n で改行）")
        .default("💬 ".to_string())
        .interact_text()?;
    let name: String = Input::new()
        .with_prompt("氏名（例: 田中 太郎）")
        .allow_empty(true)
        .interact_text()?;
    let org: String = Input::new()
        .with_prompt("所属")
        .allow_empty(true)
        .interact_text()?;
    let link: String = Input::new()
        .with_prompt("ボタンのリンク（#articleX または URL）")
        .default(format!("#article{}", index + 1))
        .interact_text()?;
    let monogram: String = Input::new()
        .with_prompt("モノグラム（空欄なら氏名から自動）")
        .allow_empty(true)
        .interact_text()?;
    let strip_color: String = Input::new()
        .with_prompt("カード上部ストリップ色")
        .default(color_for_index(index).to_string())
        .interact_text()?;

    let mut builder = CardBuilder::new()
        .issue_label(issue)
        .article_title(title)
        .comment_text(comment.replace("\\n", "\n"))
        .commenter_name(name)
        .commenter_org(org)
        .link_url(link)
        .strip_color(strip_color)
        .comment_bar_color(comment_bar_color);
    if !monogram.is_empty() {
        builder = builder.monogram(monogram);
    }
    Ok(builder.build())
}
