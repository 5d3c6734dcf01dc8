//! Error types for log parsing.
//!
//! Classification and segmentation failures are local to one block or
//! table; [`LogParser`](crate::LogParser) records them as warnings and
//! keeps processing sibling blocks. The variants here surface only at the
//! component level, where callers asked for something specific.

use thiserror::Error;

/// Errors that can occur while parsing a log.
#[derive(Debug, Error)]
pub enum ParseError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line matched two structural roles at the same priority. This is a
    /// defect in the role registry's patterns, not bad input.
    #[error("ambiguous classification for {line:?}: both {first} and {second} matched at priority {priority}")]
    StructuralAmbiguity {
        line: String,
        first: &'static str,
        second: &'static str,
        priority: u8,
    },

    /// Column segmentation was asked to work on a range with no horizontal
    /// border material at all, i.e. the caller passed a non-table range.
    #[error("no table found: {0}")]
    NoTableFound(String),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
