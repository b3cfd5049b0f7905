//! JSON snapshot storage for the catalog.
//!
//! The whole catalog is one pretty-printed JSON array. Saves go through a
//! sibling `.tmp` file that is renamed over the target, so readers never see
//! a half-written catalog.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::book::Book;

/// Failure while reading or writing a catalog file
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A file system call failed
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File or directory the call was made on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The catalog could not be encoded or decoded
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistenceError {
    /// Wrap an I/O error with the path it happened on
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

/// Path of the temporary file a save writes before renaming
#[must_use]
pub fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Read a catalog file.
///
/// A missing file and a file holding only whitespace both read as an empty
/// catalog.
///
/// # Errors
///
/// Returns `PersistenceError::Io` if the file exists but cannot be read, and
/// `PersistenceError::Json` if its contents are not an array of books.
pub fn load_books(path: &Path) -> Result<Vec<Book>, PersistenceError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "catalog file does not exist");
            return Ok(Vec::new());
        }
        Err(err) => return Err(PersistenceError::io(path, err)),
    };

    let trimmed = contents.trim();
    if trimmed.is_empty() {
        debug!(path = %path.display(), "catalog file is empty");
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(trimmed)?)
}

/// Write the full catalog, replacing `path` atomically.
///
/// The parent directory is created when missing. On failure the temporary
/// file is removed and `path` keeps its previous contents.
///
/// # Errors
///
/// Returns `PersistenceError::Io` if the directory, temporary file or rename
/// fails, and `PersistenceError::Json` if encoding fails.
pub fn save_books(path: &Path, books: &[Book]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
    }

    let tmp = tmp_path(path);
    if let Err(err) = write_snapshot(&tmp, books) {
        drop(fs::remove_file(&tmp));
        return Err(err);
    }

    if let Err(err) = fs::rename(&tmp, path) {
        drop(fs::remove_file(&tmp));
        return Err(PersistenceError::io(path, err));
    }

    Ok(())
}

/// Serialize `books` into a freshly created file at `tmp` and sync it
fn write_snapshot(tmp: &Path, books: &[Book]) -> Result<(), PersistenceError> {
    let file = File::create(tmp).map_err(|e| PersistenceError::io(tmp, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, books)?;
    writer.flush().map_err(|e| PersistenceError::io(tmp, e))?;
    let file = writer.into_inner().map_err(|e| PersistenceError::io(tmp, e.into_error()))?;
    file.sync_all().map_err(|e| PersistenceError::io(tmp, e))?;
    Ok(())
}
