//! Error types for card ingestion

use thiserror::Error;

/// Ingestion error type
#[derive(Debug, Error)]
pub enum IngestError {
    /// One or more required columns are absent from the header row
    #[error("CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The CSV itself could not be parsed
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for card ingestion
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_names() {
        let err = IngestError::MissingColumns(vec!["link".to_string(), "org".to_string()]);
        assert_eq!(err.to_string(), "CSV is missing required columns: link, org");
    }
}
