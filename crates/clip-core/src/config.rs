//! Configuration management for comment-clip

use crate::error::{ClipError, Result};
use crate::render::palette::DEFAULT_COMMENT_BAR_COLOR;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "clip.toml";

/// Delivery-date display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryDateStyle {
    /// 月日表記 (例: 9月1日配信号)
    #[serde(rename = "md")]
    MonthDay,
    /// 年月日表記 (例: 2025年9月1日配信号)
    #[serde(rename = "ymd")]
    YearMonthDay,
}

impl Default for DeliveryDateStyle {
    fn default() -> Self {
        DeliveryDateStyle::MonthDay
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Document header/footer defaults
    pub document: DocumentDefaults,
    /// Card defaults
    pub cards: CardDefaults,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClipError::ConfigNotFound(path.to_path_buf())
            } else {
                ClipError::Io(e)
            }
        })?;
        toml::from_str(&content).map_err(|e| ClipError::Toml(e.to_string()))
    }

    /// Load from an explicit path, or from `clip.toml` in the working
    /// directory when present, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error; the implicit
    /// lookup is best-effort.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Serialize to a TOML string
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ClipError::Toml(e.to_string()))
    }
}

/// Default header/footer text for generated documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentDefaults {
    /// Browser `<title>` of the generated mail
    pub title_text: String,
    /// Badge label next to the header title
    pub badge_text: String,
    /// Header headline
    pub header_title: String,
    /// Description paragraph under the delivery line
    pub description_text: String,
    /// Delivery-date display style
    pub date_style: DeliveryDateStyle,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            title_text: "コメントクリップ（メール配信用・全幅ヘッダー＆横長ボタン）".to_string(),
            badge_text: "COMMENT CLIP".to_string(),
            header_title: "週刊 税務通信".to_string(),
            description_text: "多様な視点からのコメントが記事を読むきっかけとなり、普段触れない分野への関心を広げます。\
                また、記事やコメントを記憶に残し、後々の読み返しを促すことで読み忘れを防ぐことを目的としています。\
                ※本メール内のコメントはコメンテーターの私見です"
                .to_string(),
            date_style: DeliveryDateStyle::MonthDay,
        }
    }
}

/// Card-level defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDefaults {
    /// Accent color of the vertical bar left of the comment body
    pub comment_bar_color: String,
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            comment_bar_color: DEFAULT_COMMENT_BAR_COLOR.to_string(),
        }
    }
}

/// Header/footer configuration for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Browser `<title>` of the generated mail
    pub title_text: String,
    /// Badge label next to the header title
    pub badge_text: String,
    /// Header headline
    pub header_title: String,
    /// Delivery date of the issue
    pub delivery_date: NaiveDate,
    /// Delivery-date display style
    pub delivery_date_style: DeliveryDateStyle,
    /// Description paragraph under the delivery line
    pub description_text: String,
}

impl DocumentConfig {
    /// Build a document configuration from file defaults and a delivery date
    pub fn from_defaults(defaults: &DocumentDefaults, delivery_date: NaiveDate) -> Self {
        Self {
            title_text: defaults.title_text.clone(),
            badge_text: defaults.badge_text.clone(),
            header_title: defaults.header_title.clone(),
            delivery_date,
            delivery_date_style: defaults.date_style,
            description_text: defaults.description_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document.badge_text, "COMMENT CLIP");
        assert_eq!(config.document.header_title, "週刊 税務通信");
        assert_eq!(config.document.date_style, DeliveryDateStyle::MonthDay);
        assert_eq!(config.cards.comment_bar_color, "#2563eb");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.document.badge_text, config.document.badge_text);
        assert_eq!(parsed.document.date_style, config.document.date_style);
        assert_eq!(parsed.cards.comment_bar_color, config.cards.comment_bar_color);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[document]
badge_text = "WEEKLY CLIP"
date_style = "ymd"
"#,
        )
        .unwrap();
        assert_eq!(config.document.badge_text, "WEEKLY CLIP");
        assert_eq!(config.document.date_style, DeliveryDateStyle::YearMonthDay);
        // untouched sections keep their defaults
        assert_eq!(config.document.header_title, "週刊 税務通信");
        assert_eq!(config.cards.comment_bar_color, "#2563eb");
    }

    #[test]
    fn test_unknown_date_style_is_rejected() {
        let result = toml::from_str::<Config>(
            r#"
[document]
date_style = "week"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("clip.toml");
        fs::write(&path, "[cards]\ncomment_bar_color = \"#ff0000\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.cards.comment_bar_color, "#ff0000");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.toml");
        let result = Config::load(&path);
        assert!(matches!(result, Err(ClipError::ConfigNotFound(_))));
    }

    #[test]
    fn test_document_config_from_defaults() {
        let defaults = DocumentDefaults::default();
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let config = DocumentConfig::from_defaults(&defaults, date);
        assert_eq!(config.header_title, defaults.header_title);
        assert_eq!(config.delivery_date, date);
        assert_eq!(config.delivery_date_style, DeliveryDateStyle::MonthDay);
    }
}
