// Scan module - filesystem traversal and per-file metadata collection.

pub mod metadata;
pub mod walker;

pub use metadata::file_metadata;
pub use walker::{collect_files, collect_files_with_extensions, ScanOptions};
