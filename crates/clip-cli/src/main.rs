//! comment-clip - コメントクリップ HTML mail generator CLI
//!
//! Generates email-client-compatible HTML newsletters from card records.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write the CSV scaffold
//! comment-clip template
//!
//! # Generate the mail from a card batch
//! comment-clip generate --input comments.csv --date 2025-09-01
//!
//! # Or build one interactively
//! comment-clip form
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
