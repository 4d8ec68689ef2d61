//! Matrix reading: header-plus-rows delimited files into per-column vectors.
//!
//! The reader makes a single pass, top to bottom. The first line is the
//! header; every later line goes through a [`LineProjector`] and its values
//! are distributed into the sequence owned by the matching header column.
//! Any line whose projected value count disagrees with the header aborts the
//! whole read; a partially built matrix is never returned.

use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::projector::LineProjector;

/// Read a delimited matrix file into a column-name → values mapping.
///
/// The header's first `projector.start_index()` columns are metadata and get
/// no sequence of their own. Every returned sequence has the same length,
/// equal to the number of data lines, in line-encounter order.
///
/// Duplicate header names collapse into a single shared sequence (last one
/// wins) — a deliberate, documented quirk.
///
/// # Errors
/// * [`Error::EmptyInput`] if the file has no header line.
/// * [`Error::SchemaMismatch`] if a data line's projected count plus the
///   start index differs from the header's column count. The line number
///   (header is line 1) is reported.
/// * [`Error::Parse`] if the projector rejects a token.
/// * [`Error::Io`] for underlying read failures, with the failing line when
///   known.
pub fn read_matrix<P>(
    path: impl AsRef<Path>,
    delimiter: &str,
    projector: &P,
) -> Result<HashMap<String, Vec<P::Output>>>
where
    P: LineProjector,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let matrix = read_matrix_from(BufReader::new(file), delimiter, projector)?;
    debug!("read {} columns from {}", matrix.len(), path.display());
    Ok(matrix)
}

/// [`read_matrix`] over any buffered reader instead of a file path.
pub fn read_matrix_from<R, P>(
    reader: R,
    delimiter: &str,
    projector: &P,
) -> Result<HashMap<String, Vec<P::Output>>>
where
    R: BufRead,
    P: LineProjector,
{
    let mut lines = reader.lines();
    let header_line = match lines.next() {
        Some(line) => line.map_err(|e| Error::Io {
            line: Some(1),
            source: e,
        })?,
        None => return Err(Error::EmptyInput),
    };
    let header: Vec<&str> = header_line.split(delimiter).collect();
    let start = projector.start_index();

    let mut matrix: HashMap<String, Vec<P::Output>> = HashMap::new();
    for name in header.iter().skip(start) {
        matrix.insert((*name).to_string(), Vec::new());
    }

    // Header is line 1, so data starts at 2.
    let mut line_no: u64 = 2;
    for line in lines {
        let line = line.map_err(|e| Error::Io {
            line: Some(line_no),
            source: e,
        })?;
        let entries = projector
            .project(&line, delimiter)
            .map_err(|e| e.at_line(line_no))?;
        if entries.len() + start != header.len() {
            return Err(Error::SchemaMismatch {
                line: line_no,
                found: entries.len(),
                expected: header.len(),
            });
        }
        for (i, entry) in entries.into_iter().enumerate() {
            if let Some(column) = matrix.get_mut(header[i + start]) {
                column.push(entry);
            }
        }
        line_no += 1;
    }
    Ok(matrix)
}
