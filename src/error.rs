//! Error types for HitOxide
//!
//! Loading and configuration failures are typed with thiserror; the sampling
//! and aggregation layers are total and never produce errors.

use thiserror::Error;

/// Main error type for HitOxide operations
#[derive(Error, Debug)]
pub enum HitError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Required column missing from a delimited file
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Nothing usable left after cleaning
    #[error("Dataset is empty or has no valid rows")]
    EmptyDataset,

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for HitOxide operations
pub type Result<T> = std::result::Result<T, HitError>;

/// UI-friendly error message formatting
impl HitError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            HitError::FileIo(e) => format!("File error: {}", e),
            HitError::Polars(e) => format!("Data error: {}", e),
            HitError::Json(e) => format!("JSON error: {}", e),
            HitError::Config(msg) => format!("Config error: {}", msg),
            HitError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            HitError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            HitError::EmptyDataset => "Dataset has no valid tracks".to_string(),
            HitError::Custom(msg) => msg.clone(),
        }
    }

    /// Get a short title for the error (for the error window)
    pub fn title(&self) -> &'static str {
        match self {
            HitError::FileIo(_) => "File Error",
            HitError::Polars(_) => "Data Error",
            HitError::Json(_) => "JSON Error",
            HitError::Config(_) => "Configuration Error",
            HitError::UnsupportedFormat { .. } => "Unsupported Format",
            HitError::ColumnNotFound { .. } => "Column Not Found",
            HitError::EmptyDataset => "Empty Dataset",
            HitError::Custom(_) => "Error",
        }
    }
}
