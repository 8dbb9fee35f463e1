use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

// Line and block comments for the C lineage. The leading guard class keeps
// markers that directly follow a quote or a slash out of the match, so
// `"http://..."` and `**/` sequences are not treated as comments.
static C_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[^"'/])(?://.*|/\*[\s\S]*?\*/)"#).unwrap());

/// Comment extraction for C, C++, C#, Go, Rust, JavaScript, TypeScript,
/// Java, Kotlin, Swift, PHP, Dart, Scala, Objective-C and Zig.
pub struct CFamilyComments;

impl Default for CFamilyComments {
    fn default() -> Self {
        Self::new()
    }
}

impl CFamilyComments {
    pub fn new() -> Self {
        CFamilyComments
    }
}

impl CommentSyntax for CFamilyComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&C_COMMENT, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_block_comments() {
        let source = "int x = 1; // trailing\n/* block\nspans lines */\nint y;\n";
        let comments = CFamilyComments::new().extract_comments(source);
        assert_eq!(comments.len(), 2);
        assert!(comments[0].contains("// trailing"));
        assert!(comments[1].contains("block"));
        assert!(comments[1].contains("spans lines"));
    }

    #[test]
    fn test_marker_inside_string_is_ignored() {
        let source = "char *url = \"http://example.com\";\n";
        let comments = CFamilyComments::new().extract_comments(source);
        assert!(comments.is_empty());
    }
}
