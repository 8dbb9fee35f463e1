use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// `--` line comments, with long-bracket blocks (`--[[ ]]`) folded into the
// same match so the block is not re-counted line by line.
static LUA_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)--(?:\[\[[\s\S]*?\]\])?.*$").unwrap());

/// Comment extraction for Lua
pub struct LuaComments;

impl Default for LuaComments {
    fn default() -> Self {
        Self::new()
    }
}

impl LuaComments {
    pub fn new() -> Self {
        LuaComments
    }
}

impl CommentSyntax for LuaComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&LUA_COMMENT, source)
    }
}
