mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn `dump badging` text into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BadgingError {
    #[error("can't get packageinfo")]
    MissingPackage,

    #[error("can't get application label")]
    MissingApplicationLabel,
}

#[derive(Error, Debug)]
pub enum ApkInfoError {
    #[error("Unsupported platform '{0}': only Darwin, Linux and Windows are supported")]
    UnsupportedPlatform(String),

    #[error("Failed to invoke aapt at {}: {source}", .path.display())]
    Invocation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse badging output: {0}")]
    Parse(#[from] BadgingError),

    #[error("Failed to extract '{entry}' from archive: {source}")]
    Extraction {
        entry: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApkInfoError>;
