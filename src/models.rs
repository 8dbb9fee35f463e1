use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::language::Language;

// Metadata for a single file discovered during a scan
#[derive(Debug, Clone, Serialize)]
pub struct FileMetadata {
    // Database row id, present once the row has been stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    // Absolute path to the file
    pub path: PathBuf,
    // Directory containing the file
    pub dir: PathBuf,
    // Extension without the leading dot, lowercased
    pub extension: String,
    // Size on disk in bytes
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

// Analysis of a single file. All sizes are Unicode scalar counts, not bytes,
// so multi-byte characters in comments count once.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub metadata: FileMetadata,
    pub language: Language,
    pub total_chars: i64,
    pub comment_chars: i64,
    pub code_chars: i64,
    pub blank_lines: i64,
}
