//! clip-ingest - Tabular input boundary for comment-clip
//!
//! Parses CSV card batches into [`clip_core::CardRecord`] values and
//! reports missing required columns before the generation core is ever
//! invoked.

pub mod csv_cards;
pub mod error;

pub use csv_cards::{read_cards, read_cards_from_path, REQUIRED_COLUMNS, TEMPLATE_CSV};
pub use error::{IngestError, Result};
