//! Error taxonomy for mesh import
//!
//! Every fatal error aborts the import call immediately. The destination
//! mesh keeps whatever was appended before the failure; callers must discard
//! or re-initialize it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors raised by the TetGen and Abaqus importers.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Input file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Header or keyword line falls outside the supported format subset.
    #[error("{file}:{line}: unsupported layout: {message}")]
    Format {
        file: String,
        line: usize,
        message: String,
    },

    /// Data line with the wrong token count or non-numeric fields.
    #[error("{file}:{line}: malformed record: {message}")]
    MalformedRecord {
        file: String,
        line: usize,
        message: String,
    },

    /// An external node ID was declared twice.
    #[error("{file}:{line}: duplicate node id {id}")]
    DuplicateId { file: String, line: usize, id: u32 },

    /// An element or node set names an ID absent from the node table.
    #[error("{file}:{line}: reference to unknown node id {id}")]
    UnresolvedNodeReference { file: String, line: usize, id: u32 },

    /// Import-job configuration file could not be parsed.
    #[error("invalid import config {file}: {message}")]
    Config { file: String, message: String },

    /// I/O failure after the file was opened.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
