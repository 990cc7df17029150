//! UI error types

use crate::finder::FinderError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal setup, drawing or event reading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine rejected a command
    #[error("Finder error: {0}")]
    Finder(#[from] FinderError),

    /// Preview generation failed
    #[error("Preview generation failed: {0}")]
    Preview(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
