use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// Hash comments plus triple-quoted docstrings in either quote style. The
// docstring alternatives are non-greedy so adjacent docstrings stay separate.
static PYTHON_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#.*|'{3}[\s\S]*?'{3}|"{3}[\s\S]*?"{3}"#).unwrap());

/// Comment extraction for Python and R
pub struct PythonComments;

impl Default for PythonComments {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonComments {
    pub fn new() -> Self {
        PythonComments
    }
}

impl CommentSyntax for PythonComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&PYTHON_COMMENT, source)
    }
}
