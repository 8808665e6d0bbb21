//! Card data model

use crate::render::monogram::resolve_monogram;
use crate::render::palette::{color_for_index, DEFAULT_COMMENT_BAR_COLOR};
use serde::{Deserialize, Serialize};

/// One article+comment unit of the newsletter.
///
/// The text fields are untrusted prose and are escaped at render time.
/// `link_url` and the two color fields are embedded verbatim as attribute
/// values; they are structurally constrained inputs, not prose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardRecord {
    /// Issue label, e.g. `第3742号`
    pub issue_label: String,
    /// Article title
    pub article_title: String,
    /// Comment body, may contain embedded line breaks
    pub comment_text: String,
    /// Commenter's full name, e.g. `田中 太郎`
    pub commenter_name: String,
    /// Commenter's organization
    pub commenter_org: String,
    /// CTA link target; defaults to a positional `#article{N}` anchor
    #[serde(default)]
    pub link_url: Option<String>,
    /// Explicit monogram override; derived from the name when absent
    #[serde(default)]
    pub monogram: Option<String>,
    /// Top-strip color; cycled from the palette when absent
    #[serde(default)]
    pub strip_color: Option<String>,
    /// Comment-bar color; fixed accent when absent
    #[serde(default)]
    pub comment_bar_color: Option<String>,
}

impl CardRecord {
    /// Resolve the optional fields for a card at the given position.
    ///
    /// This is the single place that encodes the precedence chains: an
    /// explicit non-blank value wins, then the positional or derived
    /// default, then the fixed fallback.
    pub fn resolve(&self, index: usize) -> ResolvedCard {
        let link_url = match non_blank(self.link_url.as_deref()) {
            Some(url) => url.to_string(),
            None => format!("#article{}", index + 1),
        };
        let strip_color = match non_blank(self.strip_color.as_deref()) {
            Some(color) => color.to_string(),
            None => color_for_index(index).to_string(),
        };
        let comment_bar_color = match non_blank(self.comment_bar_color.as_deref()) {
            Some(color) => color.to_string(),
            None => DEFAULT_COMMENT_BAR_COLOR.to_string(),
        };
        let monogram = resolve_monogram(self.monogram.as_deref(), &self.commenter_name);

        ResolvedCard {
            link_url,
            strip_color,
            monogram,
            comment_bar_color,
        }
    }
}

/// The optional card fields with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    /// CTA link target
    pub link_url: String,
    /// Top-strip color
    pub strip_color: String,
    /// Avatar monogram character
    pub monogram: char,
    /// Comment-bar color
    pub comment_bar_color: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
