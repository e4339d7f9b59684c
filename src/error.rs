//! Error types for manifest scanning
//!
//! This module provides structured error types using thiserror. Only the
//! whole-file scan can fail; the line parser itself reports "no match" by
//! returning `None` and never produces an error value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a script file for dependency annotations
#[derive(Error, Debug)]
pub enum ScanError {
    /// File system errors
    #[error("Failed to read script '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Script '{path}' is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

/// Result type alias for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
