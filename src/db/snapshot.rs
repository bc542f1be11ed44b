use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::BookResult;
use crate::model::{ContactDirectory, ContactRecord};

/// Reads the whole directory from `path`.
/// Returns `Ok(None)` when no snapshot exists yet.
pub fn load(path: &Path) -> BookResult<Option<ContactDirectory>> {
    let json_str = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let records: Vec<ContactRecord> = serde_json::from_str(&json_str)?;
    let book: ContactDirectory = records.into_iter().collect();
    info!(path = %path.display(), contacts = book.len(), "loaded snapshot");
    Ok(Some(book))
}

/// Overwrites `path` with the whole directory, creating parent directories.
pub fn save(book: &ContactDirectory, path: &Path) -> BookResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let json = serde_json::to_string_pretty(book.records())?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), contacts = book.len(), "saved snapshot");
    Ok(())
}
