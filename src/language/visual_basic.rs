use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static VB_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'.*|/\*[\s\S]*?\*/").unwrap());

/// Comment extraction for Visual Basic: apostrophe line comments
pub struct VisualBasicComments;

impl Default for VisualBasicComments {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualBasicComments {
    pub fn new() -> Self {
        VisualBasicComments
    }
}

impl CommentSyntax for VisualBasicComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&VB_COMMENT, source)
    }
}
