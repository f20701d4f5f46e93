use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::filename::backup_path;

/// Rename an existing output aside before it is rewritten. The rename
/// completes before any new handle opens, so a fresh file can never be
/// mixed with stale content. Returns the backup path when one was made.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = backup_path(path);
    fs::rename(path, &backup)?;
    tracing::info!(target: "writer", "backed up {} -> {}", path.display(), backup.display());
    Ok(Some(backup))
}

/// Write a teaching CSV with a fixed header, backing up any existing
/// file at the target path first. Parent directories are created.
pub fn write_csv_with_backup(
    path: &Path,
    header: &[&str],
    rows: &[Vec<String>],
) -> Result<Option<PathBuf>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let backup = backup_existing(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(backup)
}
