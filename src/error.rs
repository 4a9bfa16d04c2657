//! Error types for the playoff dashboard
//!
//! Dataset and configuration failures are typed here with thiserror. GIF
//! lookups keep their own error type (see `gif::GifError`) because they never
//! reach the user as anything other than "No GIF found."

use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required secret is not set
    #[error("Missing credential: environment variable {var} is not set")]
    MissingCredential { var: String },

    /// Dataset lacks one or more required columns
    #[error("Dataset is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Game date could not be parsed
    #[error("Invalid game date '{value}' in data row {row}")]
    InvalidDate { row: usize, value: String },

    /// Empty dataset error
    #[error("Dataset is empty or has no rows")]
    EmptyDataset,
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;

/// UI-friendly error message formatting
impl DashError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DashError::FileIo(e) => format!("File error: {}", e),
            DashError::Polars(e) => format!("Data error: {}", e),
            DashError::Config(msg) => format!("Config error: {}", msg),
            DashError::MissingCredential { var } => {
                format!("Set {} (environment or .env) to enable GIF lookups", var)
            }
            DashError::MissingColumns { columns } => {
                format!("Missing column(s): {}", columns.join(", "))
            }
            DashError::InvalidDate { row, value } => {
                format!("Row {} has an unreadable game date: '{}'", row, value)
            }
            DashError::EmptyDataset => "Dataset is empty".to_string(),
        }
    }

    /// Get a short title for the error
    pub fn title(&self) -> &'static str {
        match self {
            DashError::FileIo(_) => "File Error",
            DashError::Polars(_) => "Data Error",
            DashError::Config(_) => "Configuration Error",
            DashError::MissingCredential { .. } => "Missing Credential",
            DashError::MissingColumns { .. } => "Missing Columns",
            DashError::InvalidDate { .. } => "Invalid Date",
            DashError::EmptyDataset => "Empty Dataset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DashError::MissingColumns {
            columns: vec!["points".to_string(), "turnovers".to_string()],
        };
        assert_eq!(err.user_message(), "Missing column(s): points, turnovers");
        assert_eq!(err.title(), "Missing Columns");

        let err = DashError::InvalidDate {
            row: 7,
            value: "soon".to_string(),
        };
        assert_eq!(err.user_message(), "Row 7 has an unreadable game date: 'soon'");
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let err = DashError::MissingCredential {
            var: "GIPHY_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("GIPHY_API_KEY"));
        assert!(err.user_message().contains("GIPHY_API_KEY"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: DashError = io_err.into();
        assert!(matches!(dash_err, DashError::FileIo(_)));
    }
}
