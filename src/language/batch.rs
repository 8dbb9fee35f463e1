use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static BATCH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:REM\s.*)|(?:::.*)").unwrap());

/// Comment extraction for Windows batch files: `REM` and `::` lines
pub struct BatchComments;

impl Default for BatchComments {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchComments {
    pub fn new() -> Self {
        BatchComments
    }
}

impl CommentSyntax for BatchComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&BATCH_COMMENT, source)
    }
}
