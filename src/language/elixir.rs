use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// `#` comments plus @moduledoc/@doc heredocs, which are documentation even
// though they are string expressions.
static ELIXIR_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"#.*|@moduledoc\s*"""[\s\S]*?"""|@doc\s*"""[\s\S]*?""""#).unwrap()
});

/// Comment extraction for Elixir
pub struct ElixirComments;

impl Default for ElixirComments {
    fn default() -> Self {
        Self::new()
    }
}

impl ElixirComments {
    pub fn new() -> Self {
        ElixirComments
    }
}

impl CommentSyntax for ElixirComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&ELIXIR_COMMENT, source)
    }
}
