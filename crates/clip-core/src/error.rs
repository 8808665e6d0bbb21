//! Error types for comment-clip

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comment-clip
#[derive(Debug, Error)]
pub enum ClipError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file not found
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),
}

/// Result type alias for comment-clip
pub type Result<T> = std::result::Result<T, ClipError>;
