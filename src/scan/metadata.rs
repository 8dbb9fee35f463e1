use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use crate::models::FileMetadata;

/// Collect metadata for a single file: name, absolute path, parent directory,
/// lowercased extension, byte size, and last modification time.
pub fn file_metadata(path: &Path) -> Result<FileMetadata> {
    let info = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;
    let absolute = path
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;

    let name = absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = absolute.parent().map(Path::to_path_buf).unwrap_or_default();
    let extension = absolute
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    let modified_at: DateTime<Utc> = info
        .modified()
        .with_context(|| format!("failed to read mtime of {}", path.display()))?
        .into();

    Ok(FileMetadata {
        id: None,
        name,
        path: absolute,
        dir,
        extension,
        size: info.len(),
        modified_at,
    })
}

#[cfg(test)]
mod tests {
    use super::file_metadata;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_metadata_fields() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("Sample.RS");
        fs::write(&path, "fn main() {}\n").unwrap();

        let meta = file_metadata(&path).unwrap();
        assert_eq!(meta.name, "Sample.RS");
        assert_eq!(meta.extension, "rs");
        assert_eq!(meta.size, 13);
        assert!(meta.path.is_absolute());
        assert!(meta.id.is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        assert!(file_metadata(&dir.path().join("absent.rs")).is_err());
    }
}
