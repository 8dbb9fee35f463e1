use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::language::Language;
use crate::models::{FileAnalysis, FileMetadata};

// Timestamps are stored as UTC text in this format
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS file_metadata (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    path TEXT,
    dir TEXT,
    extension TEXT,
    size INTEGER,
    modified_at TEXT
);
CREATE TABLE IF NOT EXISTS file_analysis (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    file_metadata_id INTEGER,
    language INTEGER,
    code_chars INTEGER,
    comment_chars INTEGER,
    blank_lines INTEGER,
    total_chars INTEGER,
    FOREIGN KEY (file_metadata_id) REFERENCES file_metadata(id)
);
";

// Columns callers may filter file_metadata rows by
const METADATA_COLUMNS: [&str; 6] = ["name", "path", "dir", "extension", "size", "modified_at"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("unknown file_metadata column: {0}")]
    UnknownColumn(String),
    #[error("no file_metadata row with {column} = {value}")]
    NotFound { column: String, value: String },
}

/// SQLite-backed storage for scan results: one `file_metadata` row per file
/// and one `file_analysis` row per analysis, linked by a foreign key.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Store, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        debug!("opened store at {}", path.as_ref().display());
        Ok(Store { conn })
    }

    /// Insert a metadata row and return its id.
    pub fn insert_metadata(&self, metadata: &FileMetadata) -> Result<i64, StoreError> {
        insert_metadata_row(&self.conn, metadata)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert an analysis row referencing an existing metadata row.
    pub fn insert_analysis(
        &self,
        file_metadata_id: i64,
        analysis: &FileAnalysis,
    ) -> Result<i64, StoreError> {
        insert_analysis_row(&self.conn, file_metadata_id, analysis)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Persist a batch of analyses (metadata plus analysis rows) in a single
    /// transaction.
    pub fn save_analyses(&mut self, analyses: &[FileAnalysis]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        for analysis in analyses {
            insert_metadata_row(&tx, &analysis.metadata)?;
            let metadata_id = tx.last_insert_rowid();
            insert_analysis_row(&tx, metadata_id, analysis)?;
        }
        tx.commit()?;
        debug!("saved {} analyses", analyses.len());
        Ok(())
    }

    /// All stored metadata rows, in insertion order.
    pub fn metadata_rows(&self) -> Result<Vec<FileMetadata>, StoreError> {
        let mut statement = self.conn.prepare(
            "SELECT id, name, path, dir, extension, size, modified_at
             FROM file_metadata ORDER BY id",
        )?;
        let rows = statement.query_map([], row_to_metadata)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// The first metadata row where `column` equals `value`. The column name
    /// must be one of the known metadata columns; anything else is rejected
    /// rather than spliced into SQL.
    pub fn metadata_by(&self, column: &str, value: &str) -> Result<FileMetadata, StoreError> {
        if !METADATA_COLUMNS.contains(&column) {
            return Err(StoreError::UnknownColumn(column.to_string()));
        }
        let sql = format!(
            "SELECT id, name, path, dir, extension, size, modified_at
             FROM file_metadata WHERE {} = ?1 LIMIT 1",
            column
        );
        self.conn
            .query_row(&sql, params![value], row_to_metadata)
            .optional()?
            .ok_or_else(|| StoreError::NotFound {
                column: column.to_string(),
                value: value.to_string(),
            })
    }

    /// All stored analyses joined with their file metadata.
    pub fn analysis_rows(&self) -> Result<Vec<FileAnalysis>, StoreError> {
        let mut statement = self.conn.prepare(
            "SELECT m.id, m.name, m.path, m.dir, m.extension, m.size, m.modified_at,
                    a.id, a.language, a.code_chars, a.comment_chars, a.blank_lines, a.total_chars
             FROM file_metadata m
             JOIN file_analysis a ON a.file_metadata_id = m.id
             ORDER BY a.id",
        )?;
        let rows = statement.query_map([], |row| {
            let metadata = row_to_metadata(row)?;
            Ok(FileAnalysis {
                id: Some(row.get(7)?),
                metadata,
                language: Language::from_code(row.get(8)?),
                code_chars: row.get(9)?,
                comment_chars: row.get(10)?,
                blank_lines: row.get(11)?,
                total_chars: row.get(12)?,
            })
        })?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

fn insert_metadata_row(conn: &Connection, metadata: &FileMetadata) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO file_metadata (name, path, dir, extension, size, modified_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            metadata.name,
            metadata.path.to_string_lossy(),
            metadata.dir.to_string_lossy(),
            metadata.extension,
            metadata.size as i64,
            metadata.modified_at.format(TIME_FORMAT).to_string(),
        ],
    )
}

fn insert_analysis_row(
    conn: &Connection,
    file_metadata_id: i64,
    analysis: &FileAnalysis,
) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO file_analysis
         (file_metadata_id, language, code_chars, comment_chars, blank_lines, total_chars)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            file_metadata_id,
            analysis.language.code(),
            analysis.code_chars,
            analysis.comment_chars,
            analysis.blank_lines,
            analysis.total_chars,
        ],
    )
}

fn row_to_metadata(row: &Row<'_>) -> rusqlite::Result<FileMetadata> {
    let raw_modified: String = row.get(6)?;
    let naive = NaiveDateTime::parse_from_str(&raw_modified, TIME_FORMAT).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(err))
    })?;
    let path: String = row.get(2)?;
    let dir: String = row.get(3)?;
    Ok(FileMetadata {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        path: PathBuf::from(path),
        dir: PathBuf::from(dir),
        extension: row.get(4)?,
        size: row.get::<_, i64>(5)? as u64,
        modified_at: DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_by_rejects_unknown_columns() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let store = Store::open(dir.path().join("stats.db")).unwrap();
        let err = store.metadata_by("name; DROP TABLE file_metadata", "x");
        assert!(matches!(err, Err(StoreError::UnknownColumn(_))));
    }
}
