//! Mesh import pipelines
//!
//! Two stateless importers share the node/element table builders:
//! [`TetGenImporter`] for `.node`/`.ele` file pairs and [`AbaqusImporter`]
//! for `.inp` decks. Both read synchronously, mutate the destination mesh in
//! place, and abort on the first fatal error, leaving the mesh in the state
//! reached so far.

pub mod abaqus;
pub mod element_table;
pub mod node_table;
pub mod tetgen;

pub use abaqus::AbaqusImporter;
pub use tetgen::TetGenImporter;

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ImportError, ImportResult};

/// File name and 1-based line number attached to every parse diagnostic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineContext<'a> {
    pub file: &'a str,
    pub line: usize,
}

impl LineContext<'_> {
    pub fn format(&self, message: impl Into<String>) -> ImportError {
        ImportError::Format {
            file: self.file.to_string(),
            line: self.line,
            message: message.into(),
        }
    }

    pub fn malformed(&self, message: impl Into<String>) -> ImportError {
        ImportError::MalformedRecord {
            file: self.file.to_string(),
            line: self.line,
            message: message.into(),
        }
    }

    pub fn duplicate_id(&self, id: u32) -> ImportError {
        ImportError::DuplicateId {
            file: self.file.to_string(),
            line: self.line,
            id,
        }
    }

    pub fn unresolved(&self, id: u32) -> ImportError {
        ImportError::UnresolvedNodeReference {
            file: self.file.to_string(),
            line: self.line,
            id,
        }
    }
}

/// Read an input file, distinguishing unreadable paths from later I/O errors.
pub(crate) fn read_file(path: &Path) -> ImportResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(source)
            if source.kind() == io::ErrorKind::NotFound
                || source.kind() == io::ErrorKind::PermissionDenied =>
        {
            Err(ImportError::FileNotFound {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(ImportError::Io(source)),
    }
}

/// Split a data line into tokens, accepting comma- and whitespace-separated
/// lists (TetGen files use whitespace, Abaqus decks usually commas).
pub(crate) fn tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

pub(crate) fn parse_u32(token: &str, ctx: &LineContext) -> ImportResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| ctx.malformed(format!("expected integer, got '{token}'")))
}

pub(crate) fn parse_usize(token: &str, ctx: &LineContext) -> ImportResult<usize> {
    token
        .parse::<usize>()
        .map_err(|_| ctx.malformed(format!("expected integer, got '{token}'")))
}

pub(crate) fn parse_f64(token: &str, ctx: &LineContext) -> ImportResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ctx.malformed(format!("expected number, got '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_commas_and_whitespace() {
        assert_eq!(tokens("1, 2.0, 3"), vec!["1", "2.0", "3"]);
        assert_eq!(tokens("1 2.0\t3"), vec!["1", "2.0", "3"]);
        assert_eq!(tokens("  1,,2 ,3  "), vec!["1", "2", "3"]);
        assert!(tokens("   ").is_empty());
    }

    #[test]
    fn numeric_parse_errors_carry_file_and_line() {
        let ctx = LineContext {
            file: "deck.inp",
            line: 7,
        };
        let err = parse_f64("abc", &ctx).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("deck.inp:7"), "unexpected message: {text}");
        assert!(text.contains("abc"));
    }
}
