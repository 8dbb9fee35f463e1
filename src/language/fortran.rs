use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static FORTRAN_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!.*|/\*[\s\S]*?\*/").unwrap());

/// Comment extraction for Fortran: `!` line comments
pub struct FortranComments;

impl Default for FortranComments {
    fn default() -> Self {
        Self::new()
    }
}

impl FortranComments {
    pub fn new() -> Self {
        FortranComments
    }
}

impl CommentSyntax for FortranComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&FORTRAN_COMMENT, source)
    }
}
