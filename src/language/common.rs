use regex::Regex;

/// Run a family regex over the whole source and normalize each match.
///
/// Matching happens against the full file rather than line by line: multi-line
/// comments and comment markers embedded in string literals make per-line
/// detection unreliable across thirty-odd languages.
pub fn extract_with(regex: &Regex, source: &str) -> Vec<String> {
    regex
        .find_iter(source)
        .map(|found| normalize_comment(found.as_str()))
        .collect()
}

/// Strip leading newlines/tabs/spaces and drop blank lines inside a comment,
/// re-joining the remaining lines with `\n`.
pub fn normalize_comment(raw: &str) -> String {
    let trimmed = raw.trim_start_matches(['\n', '\t', ' ']);
    trimmed
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::normalize_comment;

    #[test]
    fn test_normalize_strips_leading_whitespace() {
        assert_eq!(normalize_comment("\n\t  // hello"), "// hello");
    }

    #[test]
    fn test_normalize_drops_interior_blank_lines() {
        let raw = "/* first\n\n   \nsecond */";
        assert_eq!(normalize_comment(raw), "/* first\nsecond */");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_comment(""), "");
        assert_eq!(normalize_comment("\n\n"), "");
    }
}
