use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use tracing::debug;

use crate::language::{comment_syntax, detect_language, Language};
use crate::models::{FileAnalysis, FileMetadata};

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*$").unwrap());

/// Count blank lines in the given source.
pub fn count_blank_lines(source: &str) -> i64 {
    let matches = BLANK_LINE.find_iter(source).count() as i64;
    // The match at the end of the final line over-counts by one
    (matches - 1).max(0)
}

/// Analyze one file: detect its language, measure total, comment, and code
/// sizes (in Unicode scalar values) and count blank lines.
///
/// Files with an unrecognized language come back zeroed without touching the
/// file content.
pub fn analyze_file(metadata: &FileMetadata) -> Result<FileAnalysis> {
    let language = detect_language(metadata);
    let mut analysis = FileAnalysis {
        id: None,
        metadata: metadata.clone(),
        language,
        total_chars: 0,
        comment_chars: 0,
        code_chars: 0,
        blank_lines: 0,
    };

    if language == Language::Unknown {
        return Ok(analysis);
    }

    let source = fs::read_to_string(&metadata.path)
        .with_context(|| format!("failed to read {}", metadata.path.display()))?;

    if let Some(syntax) = comment_syntax(language) {
        for comment in syntax.extract_comments(&source) {
            analysis.comment_chars += comment.chars().count() as i64;
        }
    }

    analysis.total_chars = source.chars().count() as i64;
    analysis.blank_lines = count_blank_lines(&source);
    analysis.code_chars = analysis.total_chars - (analysis.comment_chars + analysis.blank_lines);

    debug!(
        "analyzed {} as {}: {} total, {} comment, {} blank",
        metadata.path.display(),
        language,
        analysis.total_chars,
        analysis.comment_chars,
        analysis.blank_lines
    );

    Ok(analysis)
}

/// Analyze a batch of files in parallel, skipping files whose language is
/// not recognized. Any unreadable file fails the whole batch.
pub fn analyze_files(files: &[FileMetadata]) -> Result<Vec<FileAnalysis>> {
    files
        .par_iter()
        .filter(|metadata| detect_language(metadata) != Language::Unknown)
        .map(analyze_file)
        .collect()
}
