use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static PASCAL_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*?\}|\(\*[\s\S]*?\*\)|//.*").unwrap());

/// Comment extraction for Pascal and F#: `{ }`, `(* *)` and `//` forms
pub struct PascalComments;

impl Default for PascalComments {
    fn default() -> Self {
        Self::new()
    }
}

impl PascalComments {
    pub fn new() -> Self {
        PascalComments
    }
}

impl CommentSyntax for PascalComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&PASCAL_COMMENT, source)
    }
}
