//! Indexer error types.

use crate::ast::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a tags file.
#[derive(Debug, Error)]
pub enum TagsError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Front-end failed to produce a syntax tree
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Unrecognized parser target version
    #[error("Unsupported language version: {0}")]
    UnsupportedTarget(String),

    /// A taggable declaration without a declared identifier. This indicates a
    /// malformed tree from the front-end, not a recoverable user condition.
    #[error("declaration of kind {kind:?} at line {line} has no name")]
    MissingIdentifier { kind: NodeKind, line: usize },
}
