//! Error types for Partscape operations.
//!
//! This module provides the main error type [`PartscapeError`]. Layout itself
//! never fails; errors only arise at the edges: reading the build payload,
//! loading configuration and writing results.

use std::io;

use thiserror::Error;

/// The main error type for Partscape operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant keeps the offending source text next to the
/// deserialization error, so callers can point at the failing line and
/// column.
#[derive(Debug, Error)]
pub enum PartscapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid build input: {err}")]
    Input { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl PartscapeError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Input {
            err,
            src: src.into(),
        }
    }
}
