//! CSV card ingestion
//!
//! The CSV must carry a header row. Column order is free; required
//! columns are `issue`, `title`, `comment`, `name`, `org`, `link`, and
//! `monogram` / `strip_color` are optional. Cell values are trimmed; a
//! blank `link` cell defaults to the row's positional `#article{N}`
//! anchor here, before the records reach the generation core.

use crate::error::{IngestError, Result};
use clip_core::CardRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &["issue", "title", "comment", "name", "org", "link"];

/// Downloadable CSV scaffold with two sample rows.
pub const TEMPLATE_CSV: &str = "\
issue,title,comment,name,org,link,monogram,strip_color
第3742号,インボイス制度における返還インボイスの取扱い明確化,💬 コメント例をここに。複数行も可。,田中 太郎,田中税理士事務所,#article1,,#c7d2fe
第3743号,デジタル経済における国際課税ルールの最新動向,💬 コメント例をここに。複数行も可。,佐藤 花子,ABC商事株式会社 経理部部長,#article2,,#a5b4fc
";

/// Read a batch of card records from CSV.
///
/// Fails with [`IngestError::MissingColumns`] before reading any row when
/// the header lacks required columns, and with [`IngestError::Csv`] on
/// rows the parser cannot digest.
pub fn read_cards<R: Read>(reader: R) -> Result<Vec<CardRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim(), i))
        .collect();

    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !columns.contains_key(**name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(IngestError::MissingColumns(missing));
    }

    let mut cards = Vec::new();
    for (row_index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let link = cell(&columns, &record, "link");
        let link_url = if link.is_empty() {
            format!("#article{}", row_index + 1)
        } else {
            link
        };

        cards.push(CardRecord {
            issue_label: cell(&columns, &record, "issue"),
            article_title: cell(&columns, &record, "title"),
            comment_text: cell(&columns, &record, "comment"),
            commenter_name: cell(&columns, &record, "name"),
            commenter_org: cell(&columns, &record, "org"),
            link_url: Some(link_url),
            monogram: optional_cell(&columns, &record, "monogram"),
            strip_color: optional_cell(&columns, &record, "strip_color"),
            comment_bar_color: None,
        });
    }

    tracing::debug!(cards = cards.len(), "Loaded card batch from CSV");
    Ok(cards)
}

/// Read a batch of card records from a CSV file.
pub fn read_cards_from_path(path: &Path) -> Result<Vec<CardRecord>> {
    let file = File::open(path)?;
    read_cards(file)
}

fn cell(columns: &HashMap<&str, usize>, record: &csv::StringRecord, name: &str) -> String {
    columns
        .get(name)
        .and_then(|&i| record.get(i))
        .unwrap_or("")
        .trim()
        .to_string()
}

fn optional_cell(
    columns: &HashMap<&str, usize>,
    record: &csv::StringRecord,
    name: &str,
) -> Option<String> {
    let value = cell(columns, record, name);
    (!value.is_empty()).then_some(value)
}
