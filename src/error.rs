//! Error types for dataset reading and analysis.
//!
//! Every failure is terminal for the analysis call that produced it:
//! no partial summaries are returned.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while reading a dataset or aggregating its records.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A record does not carry a field the analysis requires.
    #[error("Missing field '{field}' in row {row}")]
    MissingField { field: String, row: usize },

    /// A numeric field could not be parsed as a decimal number.
    #[error("Invalid numeric value '{value}' for field '{field}' in row {row}")]
    InvalidNumericFormat {
        field: String,
        value: String,
        row: usize,
    },

    /// A categorical field holds a value outside its fixed label set.
    #[error("Unexpected value '{value}' for field '{field}' in row {row}")]
    MissingCategory {
        field: String,
        value: String,
        row: usize,
    },

    /// The dataset has no records and the analysis has no defined result.
    #[error("Dataset is empty: {analysis} analysis has no result")]
    EmptyDataset { analysis: &'static str },

    /// The input file could not be opened.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid delimited text.
    #[error("Malformed delimited text in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::MissingField {
            field: "Gender".to_string(),
            row: 3,
        };
        assert_eq!(err.to_string(), "Missing field 'Gender' in row 3");

        let err = AnalysisError::InvalidNumericFormat {
            field: "SaleAmount".to_string(),
            value: "abc".to_string(),
            row: 1,
        };
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_empty_dataset_message() {
        let err = AnalysisError::EmptyDataset {
            analysis: "employee",
        };
        assert_eq!(
            err.to_string(),
            "Dataset is empty: employee analysis has no result"
        );
    }
}
