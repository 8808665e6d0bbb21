//! HTML rendering for comment-clip
//!
//! This module turns card records and a document configuration into the
//! final email-ready HTML string:
//! - text escaping and newline conversion
//! - monogram derivation from commenter names
//! - delivery-date formatting
//! - strip-color cycling
//! - card fragment rendering and document composition
//!
//! Every function here is pure; equal inputs always produce byte-identical
//! output.

pub mod card;
pub mod date;
pub mod document;
pub mod monogram;
pub mod palette;
pub mod text;

pub use card::render_card;
pub use date::format_delivery;
pub use document::{compose_document, generate, GeneratedDocument};
pub use monogram::{derive_monogram, resolve_monogram, FALLBACK_MONOGRAM};
pub use palette::{color_for_index, DEFAULT_COMMENT_BAR_COLOR, STRIP_PALETTE};
pub use text::{escape_html, escape_nl2br};
