use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static HASKELL_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--.*|\{-[\s\S]*?-\}").unwrap());

/// Comment extraction for Haskell: `--` lines and `{- -}` blocks
pub struct HaskellComments;

impl Default for HaskellComments {
    fn default() -> Self {
        Self::new()
    }
}

impl HaskellComments {
    pub fn new() -> Self {
        HaskellComments
    }
}

impl CommentSyntax for HaskellComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&HASKELL_COMMENT, source)
    }
}
