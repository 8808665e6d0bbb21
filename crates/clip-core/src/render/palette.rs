//! Accent colors
//!
//! The strip palette cycles by card position; the comment-bar accent is a
//! single fixed default and never cycles.

/// Default colors for the thin strip at a card's top edge.
pub const STRIP_PALETTE: [&str; 2] = ["#c7d2fe", "#a5b4fc"];

/// Default accent for the vertical bar left of the comment body.
pub const DEFAULT_COMMENT_BAR_COLOR: &str = "#2563eb";

/// Pick the default strip color for a card by its position.
pub fn color_for_index(index: usize) -> &'static str {
    STRIP_PALETTE[index % STRIP_PALETTE.len()]
}
