use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static RUBY_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#.*|=begin[\s\S]*?=end").unwrap());

/// Comment extraction for Ruby and Perl: `#` lines and `=begin`/`=end` blocks
pub struct RubyComments;

impl Default for RubyComments {
    fn default() -> Self {
        Self::new()
    }
}

impl RubyComments {
    pub fn new() -> Self {
        RubyComments
    }
}

impl CommentSyntax for RubyComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&RUBY_COMMENT, source)
    }
}
