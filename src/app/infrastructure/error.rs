use std::path::PathBuf;
use thiserror::Error;

use crate::app::domain::line_item::LineItemId;
use crate::app::domain::numbering::DocumentNumber;

/// Errors from ledger edits. Both variants are recoverable: the caller
/// re-prompts and the ledger is unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Line item {0} not found")]
    NotFound(LineItemId),
}

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Cannot read logo {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported logo format: {0} (expected PNG or JPEG)")]
    Unsupported(String),

    #[error("Logo file is empty")]
    Empty,

    #[error("Logo is too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },
}

/// Reasons a document cannot be issued from the current ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IssueError {
    #[error("Item {0} has a description but its quantity or price is empty")]
    IncompleteItem(LineItemId),

    #[error("At least one item needs a description, quantity and price")]
    NoBillableItems,

    #[error("Document numbers are used up")]
    NumberingExhausted,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Logo(#[from] LogoError),

    #[error(transparent)]
    Issue(#[from] IssueError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Document {0} not found")]
    DocumentNotFound(DocumentNumber),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
