//! Card builder for fluent API

use super::model::CardRecord;

/// Builder for creating card records with fluent API.
///
/// Construction never fails: every field the renderer needs has a defined
/// default, so there is no validation step.
#[derive(Debug, Default)]
pub struct CardBuilder {
    record: CardRecord,
}

impl CardBuilder {
    /// Create a new, empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issue label
    pub fn issue_label(mut self, label: impl Into<String>) -> Self {
        self.record.issue_label = label.into();
        self
    }

    /// Set the article title
    pub fn article_title(mut self, title: impl Into<String>) -> Self {
        self.record.article_title = title.into();
        self
    }

    /// Set the comment body
    pub fn comment_text(mut self, text: impl Into<String>) -> Self {
        self.record.comment_text = text.into();
        self
    }

    /// Set the commenter's name
    pub fn commenter_name(mut self, name: impl Into<String>) -> Self {
        self.record.commenter_name = name.into();
        self
    }

    /// Set the commenter's organization
    pub fn commenter_org(mut self, org: impl Into<String>) -> Self {
        self.record.commenter_org = org.into();
        self
    }

    /// Set the CTA link target
    pub fn link_url(mut self, url: impl Into<String>) -> Self {
        self.record.link_url = Some(url.into());
        self
    }

    /// Set an explicit monogram override
    pub fn monogram(mut self, monogram: impl Into<String>) -> Self {
        self.record.monogram = Some(monogram.into());
        self
    }

    /// Set the top-strip color
    pub fn strip_color(mut self, color: impl Into<String>) -> Self {
        self.record.strip_color = Some(color.into());
        self
    }

    /// Set the comment-bar color
    pub fn comment_bar_color(mut self, color: impl Into<String>) -> Self {
        self.record.comment_bar_color = Some(color.into());
        self
    }

    /// Build the card record
    pub fn build(self) -> CardRecord {
        self.record
    }
}
