//! Document parsing from JSON.

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::ReportDocument;

/// Errors that can occur when reading a report document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read report file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse report JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ReportDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a `data.json` file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
