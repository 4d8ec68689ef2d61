//! Typed failures shared by every reader and writer in the crate.
//!
//! Schema and parse errors abort the entire read; no partial result is ever
//! returned. Transient I/O recovery is a caller concern, so there is no
//! retry logic anywhere in this layer.

use std::io;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading or writing a delimited file.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying read/write/open failure, with the failing line when known.
    #[error("I/O error{}: {source}", at_line(.line))]
    Io {
        line: Option<u64>,
        #[source]
        source: io::Error,
    },

    /// The input had no header line.
    #[error("empty input: no header line")]
    EmptyInput,

    /// A data line's field count disagrees with the header.
    #[error("line {line} has {found} entries instead of {expected}")]
    SchemaMismatch {
        line: u64,
        found: usize,
        expected: usize,
    },

    /// A token could not be converted to its declared type.
    #[error("line {line}, column {column}: cannot parse {token:?}: {source}")]
    Parse {
        line: u64,
        column: usize,
        token: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Zip archive read or write failure.
    #[cfg(feature = "compression-zip")]
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { line: None, source }
    }
}

fn at_line(line: &Option<u64>) -> String {
    match line {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}
