// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Error types shared by the parsers, the reducer and the command-line tool.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Which file of a benchmark an unmatched id was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSide {
    Nodes,
    Pl,
}

impl fmt::Display for RecordSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSide::Nodes => write!(f, ".nodes"),
            RecordSide::Pl => write!(f, ".pl"),
        }
    }
}

/// Errors that can occur while reading and measuring a benchmark.
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// Missing or malformed command-line input.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A referenced file does not exist or cannot be read.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Grammar violation in a `.nodes` or `.pl` file.
    #[error("{}:{line}: {message}", .path.display())]
    Format {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Sizes and coordinates sequences differ in length.
    #[error("Length mismatch: {sizes} sizes but {coordinates} coordinates")]
    LengthMismatch { sizes: usize, coordinates: usize },

    /// A record names a cell that has no counterpart in the other file.
    #[error("{}: unmatched id '{name}': present in {side} only", .path.display())]
    UnmatchedId {
        path: PathBuf,
        name: String,
        side: RecordSide,
    },

    /// A cell's far edge does not fit in a 64-bit coordinate.
    #[error("Coordinate overflow: cell '{cell}' extends past {}", u64::MAX)]
    Overflow { cell: String },
}

impl BookshelfError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BookshelfError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error: 1 arguments, 2 data, 3 I/O.
    pub fn exit_code(&self) -> u8 {
        match self {
            BookshelfError::Argument(_) => 1,
            BookshelfError::Format { .. }
            | BookshelfError::LengthMismatch { .. }
            | BookshelfError::UnmatchedId { .. }
            | BookshelfError::Overflow { .. } => 2,
            BookshelfError::Io { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(BookshelfError::Argument("x".into()).exit_code(), 1);
        assert_eq!(
            BookshelfError::LengthMismatch {
                sizes: 3,
                coordinates: 2
            }
            .exit_code(),
            2
        );
        let err = BookshelfError::io(
            "missing.nodes",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.exit_code(), 3);

        let err = BookshelfError::Overflow {
            cell: "o1".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_format_error_names_file_and_line() {
        let err = BookshelfError::Format {
            path: PathBuf::from("adaptec1.nodes"),
            line: 7,
            message: "missing height".to_string(),
        };
        assert_eq!(err.to_string(), "adaptec1.nodes:7: missing height");
    }

    #[test]
    fn test_unmatched_id_message() {
        let err = BookshelfError::UnmatchedId {
            path: PathBuf::from("adaptec1.pl"),
            name: "o42".to_string(),
            side: RecordSide::Pl,
        };
        assert_eq!(
            err.to_string(),
            "adaptec1.pl: unmatched id 'o42': present in .pl only"
        );
    }
}
