/// Trait that defines the interface for all comment-family implementations.
///
/// One implementation covers every language sharing the same comment markers
/// (C-style `//` and `/* */` serve more than a dozen languages), so new
/// languages usually only need a factory entry, not a new family.
pub trait CommentSyntax {
    /// Extract every comment from the given source text, normalized: leading
    /// whitespace stripped and interior blank lines removed.
    fn extract_comments(&self, source: &str) -> Vec<String>;
}
