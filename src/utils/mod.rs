pub mod checksum;
pub mod constants;
pub mod filename;
pub mod progress;

pub use checksum::sha256_file;
pub use filename::{backup_path, lesson_csv_filename, lesson_metadata_filename, sidecar_path};
pub use progress::ProgressReporter;
