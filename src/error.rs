//! Error types for the cleaning pipeline.
//!
//! Only the edges of the pipeline can fail hard: reading the dirty table
//! ([`CleanerError::Format`]), writing the clean one ([`CleanerError::Io`]) and
//! loading the optional configuration ([`CleanerError::Config`]).
//!
//! Per-record problems never abort a run. They are reported as a
//! [`ParseWarning`], logged, and the affected field is left empty so the
//! completeness filter removes the row at the end.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CleanerError>;

/// Fatal errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum CleanerError {
    /// The input file is not the tabular data we expect.
    #[error("{}: not a valid article table: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("{}: invalid configuration: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl CleanerError {
    pub fn format(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CleanerError::Format {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CleanerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single record whose `url` could not be interpreted as a URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: {url:?} is not a usable URI: {reason}")]
pub struct ParseWarning {
    pub row: usize,
    pub url: String,
    pub reason: String,
}
