use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::writers::csv_writer::backup_existing;

/// Write a JSON metadata document with 2-space indentation, non-ASCII
/// preserved literally, backing up any existing file first.
pub fn write_json_with_backup<T: Serialize>(path: &Path, value: &T) -> Result<Option<PathBuf>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let backup = backup_existing(path)?;

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;

    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_non_ascii_preserved_literally() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("meta.json");
        let value = json!({
            "dataset_short_name": "NGRIP_Holocene_20yr",
            "type": "Ice Core δ18O (‰)",
        });

        write_json_with_backup(&target, &value)?;
        let content = fs::read_to_string(&target)?;
        assert!(content.contains("δ18O (‰)"));
        assert!(!content.contains("\\u"));
        Ok(())
    }

    #[test]
    fn test_rewrite_backs_up_previous_json() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("meta.json");

        write_json_with_backup(&target, &json!({"v": 1}))?;
        let backup = write_json_with_backup(&target, &json!({"v": 2}))?.unwrap();

        assert!(backup.exists());
        assert!(fs::read_to_string(&target)?.contains("\"v\": 2"));
        assert!(fs::read_to_string(&backup)?.contains("\"v\": 1"));
        Ok(())
    }
}
