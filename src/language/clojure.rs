use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static CLOJURE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r";.*").unwrap());

/// Comment extraction for Clojure: semicolon line comments
pub struct ClojureComments;

impl Default for ClojureComments {
    fn default() -> Self {
        Self::new()
    }
}

impl ClojureComments {
    pub fn new() -> Self {
        ClojureComments
    }
}

impl CommentSyntax for ClojureComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&CLOJURE_COMMENT, source)
    }
}
