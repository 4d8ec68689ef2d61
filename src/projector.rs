//! Line projection strategies.
//!
//! A [`LineProjector`] converts one raw data line plus a delimiter into an
//! ordered sequence of typed values. The matrix reader in
//! [`crate::io::matrix`] drives a projector over every data line and
//! distributes the produced values into per-column sequences.
//!
//! Splitting is always done on the **literal** delimiter string, never a
//! pattern, so delimiters containing regex metacharacters behave exactly as
//! written.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

use crate::error::Error;

/// A row key paired with one projected cell value.
///
/// `value` is whatever the projector produced for a single data column; for
/// [`TypedProjector`] that is `Option<V>`, with `None` standing in for an
/// empty cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: std::fmt::Display, V: std::fmt::Display> KeyValue<K, V> {
    /// Render as `key<delimiter>value`.
    pub fn to_delimited(&self, delimiter: &str) -> String {
        format!("{}{}{}", self.key, delimiter, self.value)
    }
}

/// A token that could not be parsed into its declared type.
///
/// Projectors only see a single line, so this carries the zero-based column
/// and the raw token; the matrix reader attaches the line number and
/// promotes it to [`Error::Parse`].
#[derive(Debug, Error)]
#[error("column {column}: cannot parse {token:?}: {source}")]
pub struct ProjectError {
    pub column: usize,
    pub token: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl ProjectError {
    /// Promote to a crate-level [`Error::Parse`] at the given line.
    pub fn at_line(self, line: u64) -> Error {
        Error::Parse {
            line,
            column: self.column,
            token: self.token,
            source: self.source,
        }
    }
}

/// Strategy for converting one raw text line into typed per-column values.
pub trait LineProjector {
    /// The value produced for each data column.
    type Output;

    /// Zero-based index of the first data column. Columns before it are
    /// row-identifying metadata; column 0 is always the row key.
    fn start_index(&self) -> usize;

    /// Split `line` on the literal `delimiter` and produce one output per
    /// data column, in column order. Empty tokens must become absent
    /// values, not errors and not skipped cells.
    fn project(&self, line: &str, delimiter: &str) -> Result<Vec<Self::Output>, ProjectError>;
}

/// [`LineProjector`] that parses the row key and every cell via [`FromStr`].
///
/// Token 0 becomes the shared row key; each later token becomes
/// `Some(value)` when non-empty and `None` when empty. The start index
/// defaults to 1.
pub struct TypedProjector<K, V> {
    start_index: usize,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> TypedProjector<K, V> {
    pub fn new() -> Self {
        Self {
            start_index: 1,
            _marker: PhantomData,
        }
    }

    /// Projector whose data columns begin at `start_index` instead of 1.
    pub fn with_start_index(start_index: usize) -> Self {
        Self {
            start_index,
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for TypedProjector<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LineProjector for TypedProjector<K, V>
where
    K: FromStr + Clone,
    V: FromStr,
    K::Err: std::error::Error + Send + Sync + 'static,
    V::Err: std::error::Error + Send + Sync + 'static,
{
    type Output = KeyValue<K, Option<V>>;

    fn start_index(&self) -> usize {
        self.start_index
    }

    fn project(&self, line: &str, delimiter: &str) -> Result<Vec<Self::Output>, ProjectError> {
        let tokens: Vec<&str> = line.split(delimiter).collect();
        // split always yields at least one token
        let raw_key = tokens.first().copied().unwrap_or("");
        let key: K = raw_key.parse().map_err(|e| ProjectError {
            column: 0,
            token: raw_key.to_string(),
            source: Box::new(e),
        })?;

        let mut out = Vec::with_capacity(tokens.len().saturating_sub(self.start_index));
        for (column, token) in tokens.iter().enumerate().skip(self.start_index) {
            let value = if token.is_empty() {
                None
            } else {
                Some(token.parse::<V>().map_err(|e| ProjectError {
                    column,
                    token: (*token).to_string(),
                    source: Box::new(e),
                })?)
            };
            out.push(KeyValue::new(key.clone(), value));
        }
        Ok(out)
    }
}
