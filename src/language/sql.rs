use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static SQL_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--.*|/\*[\s\S]*?\*/").unwrap());

/// Comment extraction for SQL: `--` lines and `/* */` blocks
pub struct SqlComments;

impl Default for SqlComments {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlComments {
    pub fn new() -> Self {
        SqlComments
    }
}

impl CommentSyntax for SqlComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&SQL_COMMENT, source)
    }
}
