use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static JULIA_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#.*|#=[\s\S]*?=#").unwrap());

/// Comment extraction for Julia: `#` lines and `#= =#` blocks
pub struct JuliaComments;

impl Default for JuliaComments {
    fn default() -> Self {
        Self::new()
    }
}

impl JuliaComments {
    pub fn new() -> Self {
        JuliaComments
    }
}

impl CommentSyntax for JuliaComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&JULIA_COMMENT, source)
    }
}
