use chrono::Utc;
use std::path::{Path, PathBuf};

/// Generate a teaching CSV filename following the lesson-<NN> convention,
/// e.g. lesson 12 -> "lesson-12-sample.csv".
pub fn lesson_csv_filename(lesson: u8) -> String {
    format!("lesson-{:02}-sample.csv", lesson)
}

/// Generate a lesson metadata filename, e.g. "lesson-02-metadata.json".
pub fn lesson_metadata_filename(lesson: u8) -> String {
    format!("lesson-{:02}-metadata.json", lesson)
}

/// Sidecar path for a raw input: "<file>.metadata.json" next to it.
pub fn sidecar_path(raw: &Path) -> PathBuf {
    let mut name = raw.file_name().unwrap_or_default().to_os_string();
    name.push(".metadata.json");
    raw.with_file_name(name)
}

/// Backup name for an output being rewritten: "<file>.bak-<YYYYMMDDHHMMSS>".
pub fn backup_path(target: &Path) -> PathBuf {
    let ts = Utc::now().format("%Y%m%d%H%M%S");
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".bak-{}", ts));
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_filenames_zero_padded() {
        assert_eq!(lesson_csv_filename(2), "lesson-02-sample.csv");
        assert_eq!(lesson_csv_filename(21), "lesson-21-sample.csv");
        assert_eq!(lesson_metadata_filename(3), "lesson-03-metadata.json");
    }

    #[test]
    fn test_sidecar_path_sits_next_to_raw_file() {
        let sidecar = sidecar_path(Path::new("/data/cana426-rwl-noaa.txt"));
        assert_eq!(
            sidecar,
            PathBuf::from("/data/cana426-rwl-noaa.txt.metadata.json")
        );
    }

    #[test]
    fn test_backup_path_shape() {
        let backup = backup_path(Path::new("/out/lesson-12-sample.csv"));
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("lesson-12-sample.csv.bak-"));
        // Timestamp suffix is 14 digits
        let suffix = name.rsplit("bak-").next().unwrap();
        assert_eq!(suffix.len(), 14);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
