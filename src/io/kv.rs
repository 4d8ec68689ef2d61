//! Key-value and line-oriented file helpers.
//!
//! All readers take a `skip` count of leading lines to drop before parsing,
//! so callers can step over comment or header lines themselves. Every
//! function owns its file handle for the duration of the call and closes it
//! on all exit paths.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Consume up to `skip` lines from `reader`.
///
/// Returns silently if the reader is exhausted before `skip` lines were
/// read.
pub fn skip_lines<R: BufRead>(reader: &mut R, skip: usize) -> Result<()> {
    let mut buf = String::new();
    for _ in 0..skip {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
    }
    Ok(())
}

/// Read a two-column key-value file into a map.
///
/// Duplicate keys are overwritten by the last occurrence. Lines with more
/// than two fields contribute only their first two.
///
/// # Errors
/// A line with fewer than two fields is an [`Error::SchemaMismatch`].
pub fn read_key_value(
    path: impl AsRef<Path>,
    delimiter: &str,
    skip: usize,
) -> Result<HashMap<String, String>> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    skip_lines(&mut reader, skip)?;

    let mut map = HashMap::new();
    let mut line_no = skip as u64;
    for line in reader.lines() {
        line_no += 1;
        let line = line.map_err(|e| Error::Io {
            line: Some(line_no),
            source: e,
        })?;
        let mut fields = line.split(delimiter);
        let key = fields.next().unwrap_or("");
        let value = fields.next().ok_or(Error::SchemaMismatch {
            line: line_no,
            found: 1,
            expected: 2,
        })?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// [`read_key_value`] with the value column parsed into `V`.
///
/// # Errors
/// Parse failures are [`Error::Parse`], naming the line, column, and raw
/// token.
pub fn read_key_value_as<V>(
    path: impl AsRef<Path>,
    delimiter: &str,
    skip: usize,
) -> Result<HashMap<String, V>>
where
    V: FromStr,
    V::Err: std::error::Error + Send + Sync + 'static,
{
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    skip_lines(&mut reader, skip)?;

    let mut map = HashMap::new();
    let mut line_no = skip as u64;
    for line in reader.lines() {
        line_no += 1;
        let line = line.map_err(|e| Error::Io {
            line: Some(line_no),
            source: e,
        })?;
        let mut fields = line.split(delimiter);
        let key = fields.next().unwrap_or("");
        let token = fields.next().ok_or(Error::SchemaMismatch {
            line: line_no,
            found: 1,
            expected: 2,
        })?;
        let value = token.parse::<V>().map_err(|e| Error::Parse {
            line: line_no,
            column: 1,
            token: token.to_string(),
            source: Box::new(e),
        })?;
        map.insert(key.to_string(), value);
    }
    Ok(map)
}

/// Read a multi-value key file into a map of value lists.
///
/// Every field after the first is appended to the key's list; repeated keys
/// accumulate rather than overwrite.
pub fn read_key_values(
    path: impl AsRef<Path>,
    delimiter: &str,
    skip: usize,
) -> Result<HashMap<String, Vec<String>>> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    skip_lines(&mut reader, skip)?;

    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    let mut line_no = skip as u64;
    for line in reader.lines() {
        line_no += 1;
        let line = line.map_err(|e| Error::Io {
            line: Some(line_no),
            source: e,
        })?;
        let mut fields = line.split(delimiter);
        let key = fields.next().unwrap_or("").to_string();
        let values = map.entry(key).or_default();
        for field in fields {
            values.push(field.to_string());
        }
    }
    Ok(map)
}

/// Map each remaining line of a file through `row_mapper`.
pub fn read_rows<T>(
    path: impl AsRef<Path>,
    skip: usize,
    row_mapper: impl Fn(&str) -> T,
) -> Result<Vec<T>> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    skip_lines(&mut reader, skip)?;

    let mut rows = Vec::new();
    let mut line_no = skip as u64;
    for line in reader.lines() {
        line_no += 1;
        let line = line.map_err(|e| Error::Io {
            line: Some(line_no),
            source: e,
        })?;
        rows.push(row_mapper(&line));
    }
    Ok(rows)
}

/// The first line of a file, without its line terminator.
///
/// # Errors
/// [`Error::EmptyInput`] if the file is empty.
pub fn first_line(path: impl AsRef<Path>) -> Result<String> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::EmptyInput);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Write one formatted line per item, after an optional header line.
///
/// `fmt` must return the line content without a terminator; newlines are
/// handled here. A partially written file is not cleaned up on error; that
/// is left to the caller.
pub fn write_objects<O>(
    path: impl AsRef<Path>,
    header: Option<&str>,
    items: impl IntoIterator<Item = O>,
    fmt: impl Fn(&O) -> String,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    if let Some(header) = header {
        writeln!(writer, "{header}")?;
    }
    for item in items {
        writeln!(writer, "{}", fmt(&item))?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_objects`] using each item's `Display` form.
pub fn write_display<O: Display>(
    path: impl AsRef<Path>,
    header: Option<&str>,
    items: impl IntoIterator<Item = O>,
) -> Result<()> {
    write_objects(path, header, items, |item| item.to_string())
}

/// Write a map as one `key<delimiter>value` line per entry.
pub fn write_key_value<K: Display, V: Display>(
    map: &HashMap<K, V>,
    header: Option<&str>,
    path: impl AsRef<Path>,
    delimiter: &str,
) -> Result<()> {
    write_objects(path, header, map.iter(), |(key, value)| {
        format!("{key}{delimiter}{value}")
    })
}

/// Write a multi-value map as one `key<delimiter>value` line per value.
///
/// Keys are repeated on every line; values keep their in-list order.
pub fn write_key_values<K: Display, V: Display>(
    map: &HashMap<K, Vec<V>>,
    path: impl AsRef<Path>,
    delimiter: &str,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for (key, values) in map {
        for value in values {
            writeln!(writer, "{key}{delimiter}{value}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
