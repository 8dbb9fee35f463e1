use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// Semicolon comments; the guard class skips semicolons inside quoted strings
static ASSEMBLY_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[^"';])(?:;.*)"#).unwrap());

/// Comment extraction for Assembly
pub struct AssemblyComments;

impl Default for AssemblyComments {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblyComments {
    pub fn new() -> Self {
        AssemblyComments
    }
}

impl CommentSyntax for AssemblyComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&ASSEMBLY_COMMENT, source)
    }
}
