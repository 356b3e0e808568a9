//! Reading markdown source from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to obtain document source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a file as text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the
/// whole load.
///
/// # Errors
///
/// Returns [`SourceError::NotAFile`] when `path` is missing or is not a
/// regular file, and [`SourceError::Io`] when reading fails.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotAFile(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
