use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::MAX_AMOUNT;
use crate::util::format_amount;

/// Bad user or file input for a single value. Recoverable by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Expense name cannot be blank")]
    BlankName,

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Amount {0} is larger than the {} limit", format_amount(MAX_AMOUNT))]
    TooLarge(Decimal),

    #[error("Budget cannot be negative: {0}")]
    NegativeBudget(Decimal),

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("Category name cannot be blank")]
    BlankCategory,

    #[error("Invalid category number {choice}, expected 1-{max}")]
    CategoryOutOfRange { choice: String, max: usize },
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Expense file is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("Line {line}: failed to parse amount '{value}'")]
    Parse { line: u64, value: String },

    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error("Failed to build PDF: {0}")]
    Pdf(String),

    #[error("Failed to write report {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum DeliveryError {
    #[error("Invalid email address: '{0}'")]
    InvalidAddress(String),

    #[error("Attachment not found: {}", .0.display())]
    MissingAttachment(PathBuf),

    #[error("Email is not configured: set {0}")]
    NotConfigured(&'static str),

    #[error("Failed to build email: {0}")]
    Message(String),

    #[error("Could not reach the mail server: {0}")]
    Connection(String),

    #[error("Mail server rejected the credentials: {0}")]
    Authentication(String),

    #[error("Mail server refused the message: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("{key} must be a port number, got '{value}'")]
    InvalidPort { key: &'static str, value: String },

    #[error("Could not determine data directory")]
    NoDataDir,
}
