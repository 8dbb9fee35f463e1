use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static MATLAB_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[^"'/])(?:%.*|/\*[\s\S]*?\*/)"#).unwrap());

/// Comment extraction for MATLAB: `%` lines, guarded against `%` in strings
pub struct MatlabComments;

impl Default for MatlabComments {
    fn default() -> Self {
        Self::new()
    }
}

impl MatlabComments {
    pub fn new() -> Self {
        MatlabComments
    }
}

impl CommentSyntax for MatlabComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&MATLAB_COMMENT, source)
    }
}
