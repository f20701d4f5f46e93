pub mod csv_writer;
pub mod sidecar_writer;

pub use csv_writer::{backup_existing, write_csv_with_backup};
pub use sidecar_writer::write_json_with_backup;
