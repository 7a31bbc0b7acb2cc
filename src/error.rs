//! Error types for export conversion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid export document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl ExportError {
    pub(crate) fn invalid_timestamp(input: &str, reason: impl Into<String>) -> Self {
        ExportError::InvalidTimestamp {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
