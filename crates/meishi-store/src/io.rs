//! File boundary: whole-file reads and atomic writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use meishi_vcf::ParseError;

use crate::error::{StoreError, StoreResult};

/// Reads a card file into a string.
///
/// ## Errors
/// Returns `NotFound` when no file exists at `path`, a `MalformedInput`
/// parse error when the file is not valid UTF-8, and `Io` for any other
/// failure. Errors are reported verbatim; the store never retries.
pub fn read_card_file(path: &Path) -> StoreResult<String> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::InvalidData => {
            StoreError::Parse(ParseError::malformed(1, "file is not valid UTF-8"))
        }
        _ => StoreError::Io(err),
    })
}

/// Writes a card file atomically.
///
/// The text is written to a temporary file in the destination directory and
/// renamed over the target, so an external observer sees either the old
/// content or the new content, never a partial write.
///
/// ## Errors
/// Returns `Io` if the temporary file cannot be created, written, or
/// persisted.
pub fn write_card_file(path: &Path, text: &str) -> StoreResult<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| StoreError::Io(err.error))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "card file written");
    Ok(())
}
