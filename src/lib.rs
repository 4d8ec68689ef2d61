//! # Delimfile
//!
//! Small, stateless utilities for delimited text files: reading key-value
//! and matrix files into in-memory maps, writing collections back to disk,
//! compressing files and directories (gzip, zip), and a couple of numeric
//! helpers.
//!
//! Every function here operates on a single file or in-memory collection,
//! owns its file handles for the duration of the call, and releases them on
//! all exit paths. There is no shared state across calls.
//!
//! ## Reading a matrix
//!
//! A matrix file is one header line of column names followed by data lines.
//! Column 0 holds the row key; columns at or after the projector's start
//! index hold data. The reader returns a column-name → values mapping in
//! which every sequence has the same length.
//!
//! ```no_run
//! use delimfile::{read_matrix, TypedProjector};
//!
//! # fn main() -> delimfile::Result<()> {
//! let projector = TypedProjector::<String, f64>::new();
//! let matrix = read_matrix("abundance.tsv", "\t", &projector)?;
//! let samples = &matrix["sample_1"];
//! # Ok(())
//! # }
//! ```
//!
//! Custom per-line behavior plugs in through the [`LineProjector`] trait;
//! [`TypedProjector`] covers the common case of `FromStr`-parsable keys and
//! values with empty cells mapped to `None`.
//!
//! ## Key-value files
//!
//! [`read_key_value`] (last key wins), [`read_key_values`] (repeated keys
//! accumulate), and their writer counterparts live in [`io::kv`], along
//! with the generic [`write_objects`] line writer.
//!
//! ## Errors
//!
//! All fallible operations return the crate [`Result`] with a typed
//! [`Error`]: schema and parse failures name the offending line (and column
//! and token where relevant) and abort the read — a partially built
//! structure is never returned.
//!
//! ## Feature flags
//!
//! - `compression-gzip` — [`gzip`]/[`gunzip`] file helpers via `flate2`
//! - `compression-zip` — [`zip_directory`]/[`unzip`] via `zip`
//!
//! Both are enabled by default.

pub mod error;
pub mod io;
pub mod num;
pub mod projector;

// General re-exports
pub use error::{Error, Result};
pub use io::kv::{
    first_line, read_key_value, read_key_value_as, read_key_values, read_rows, skip_lines,
    write_display, write_key_value, write_key_values, write_objects,
};
pub use io::matrix::{read_matrix, read_matrix_from};
pub use num::{cumulative_sum, fold_change};
pub use projector::{KeyValue, LineProjector, ProjectError, TypedProjector};

// Gated re-exports
#[cfg(feature = "compression-gzip")]
pub use io::compression::{gunzip, gzip};

#[cfg(feature = "compression-zip")]
pub use io::compression::{unzip, zip_directory, zip_directory_to};
