use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// `#` comments plus the `: 'heredoc'` idiom used as a block comment
static BASH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#.*|:[ \t]*'[\s\S]*?'").unwrap());

/// Comment extraction for Bash and POSIX shell scripts
pub struct BashComments;

impl Default for BashComments {
    fn default() -> Self {
        Self::new()
    }
}

impl BashComments {
    pub fn new() -> Self {
        BashComments
    }
}

impl CommentSyntax for BashComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&BASH_COMMENT, source)
    }
}
