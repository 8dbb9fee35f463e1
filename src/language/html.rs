use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static HTML_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());

/// Comment extraction for HTML
pub struct HtmlComments;

impl Default for HtmlComments {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlComments {
    pub fn new() -> Self {
        HtmlComments
    }
}

impl CommentSyntax for HtmlComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&HTML_COMMENT, source)
    }
}
