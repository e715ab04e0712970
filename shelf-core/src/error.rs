//! Error types for loading and configuring the catalog

use std::path::PathBuf;
use thiserror::Error;

use crate::book::BookId;

/// Errors raised at the edges of the catalog (files, config)
///
/// Filtering and rendering never fail; they fall back to the
/// least restrictive behavior instead.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Failed to read a file from disk
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A book source file could not be parsed
    #[error("Failed to parse book list from {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A book source file has an extension we do not know how to read
    #[error("Unsupported book list format: {path}\n\nUse a .yml, .yaml, or .json file.")]
    UnsupportedFormat { path: PathBuf },

    /// Two books in the same source share an id
    #[error("Duplicate book id {id} (\"{first}\" and \"{second}\")")]
    DuplicateId {
        id: BookId,
        first: String,
        second: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
