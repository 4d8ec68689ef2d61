//! Whole-file gzip and directory zip helpers.
//!
//! Thin wrappers over the `flate2` and `zip` codecs, gated behind the
//! `compression-gzip` and `compression-zip` features. Each call owns its
//! streams for the duration and closes them on all exit paths.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::Result;

/// Gzip-compress `input` into `output`.
#[cfg(feature = "compression-gzip")]
pub fn gzip(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let mut reader = BufReader::new(File::open(input.as_ref())?);
    let mut encoder = GzEncoder::new(File::create(output.as_ref())?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;
    Ok(())
}

/// Decompress a gzip file `input` into `output`.
#[cfg(feature = "compression-gzip")]
pub fn gunzip(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(BufReader::new(File::open(input.as_ref())?));
    let mut writer = File::create(output.as_ref())?;
    io::copy(&mut decoder, &mut writer)?;
    Ok(())
}

/// Zip a directory to a sibling `<dir>.zip` and return the archive path.
#[cfg(feature = "compression-zip")]
pub fn zip_directory(dir: impl AsRef<Path>) -> Result<std::path::PathBuf> {
    let dir = dir.as_ref();
    let mut output = dir.as_os_str().to_owned();
    output.push(".zip");
    let output = std::path::PathBuf::from(output);
    zip_directory_to(dir, &output)?;
    Ok(output)
}

/// Zip a directory's regular files (non-recursive) into `output`.
///
/// Entries are prefixed with the directory's name so extraction recreates
/// the folder instead of spilling files into the working directory.
#[cfg(feature = "compression-zip")]
pub fn zip_directory_to(dir: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    use log::debug;
    use zip::CompressionMethod;
    use zip::write::SimpleFileOptions;

    let dir = dir.as_ref();
    let prefix = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut archive = zip::ZipWriter::new(File::create(output.as_ref())?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0usize;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        archive.start_file(format!("{prefix}/{}", name.to_string_lossy()), options)?;
        let mut reader = BufReader::new(File::open(&path)?);
        io::copy(&mut reader, &mut archive)?;
        count += 1;
    }
    archive.finish()?;
    debug!("zipped {count} files from {}", dir.display());
    Ok(())
}

/// Extract every entry of a zip archive under `out_dir`.
///
/// Creates `out_dir` and any entry parent directories as needed, and
/// rejects entries whose names would escape `out_dir`. Returns the paths of
/// the extracted files in archive order.
#[cfg(feature = "compression-zip")]
pub fn unzip(
    archive: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<std::path::PathBuf>> {
    use crate::error::Error;
    use log::debug;
    use std::fs;

    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut zip = zip::ZipArchive::new(File::open(archive.as_ref())?)?;
    let mut extracted = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::Io {
                line: None,
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unsafe zip entry name: {:?}", entry.name()),
                ),
            });
        };
        let target = out_dir.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = File::create(&target)?;
        io::copy(&mut entry, &mut writer)?;
        extracted.push(target);
    }
    debug!(
        "extracted {} entries into {}",
        extracted.len(),
        out_dir.display()
    );
    Ok(extracted)
}
