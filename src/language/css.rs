use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// Block comments only; the guard class keeps `/*` sequences inside quoted
// values (content strings, urls) out of the match.
static CSS_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[^"'/])(?:/\*[\s\S]*?\*/)"#).unwrap());

/// Comment extraction for CSS
pub struct CssComments;

impl Default for CssComments {
    fn default() -> Self {
        Self::new()
    }
}

impl CssComments {
    pub fn new() -> Self {
        CssComments
    }
}

impl CommentSyntax for CssComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&CSS_COMMENT, source)
    }
}
