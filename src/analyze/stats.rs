use std::collections::HashMap;

use crate::language::Language;
use crate::models::FileAnalysis;

/// Compute each language's share of the codebase, as a percentage in
/// `[0, 100]`.
///
/// With `include_comments` the share is computed over total sizes; without
/// it, over code sizes only. An empty input, or one whose sizes sum to zero,
/// yields an empty map.
pub fn language_percentages(
    analyses: &[FileAnalysis],
    include_comments: bool,
) -> HashMap<Language, f64> {
    let mut sizes: HashMap<Language, i64> = HashMap::new();
    let mut overall: i64 = 0;

    for analysis in analyses {
        let size = if include_comments {
            analysis.total_chars
        } else {
            analysis.code_chars
        };
        *sizes.entry(analysis.language).or_default() += size;
        overall += size;
    }

    let mut percentages = HashMap::new();
    if overall > 0 {
        for (language, size) in sizes {
            percentages.insert(language, (size as f64 / overall as f64) * 100.0);
        }
    }

    percentages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileMetadata;
    use chrono::Utc;
    use std::path::PathBuf;

    fn analysis(language: Language, code: i64, comments: i64) -> FileAnalysis {
        let metadata = FileMetadata {
            id: None,
            name: "f".to_string(),
            path: PathBuf::from("/f"),
            dir: PathBuf::from("/"),
            extension: String::new(),
            size: 0,
            modified_at: Utc::now(),
        };
        FileAnalysis {
            id: None,
            metadata,
            language,
            total_chars: code + comments,
            comment_chars: comments,
            code_chars: code,
            blank_lines: 0,
        }
    }

    #[test]
    fn test_percentages_without_comments() {
        let analyses = vec![
            analysis(Language::Rust, 300, 700),
            analysis(Language::Python, 100, 0),
        ];
        let percentages = language_percentages(&analyses, false);
        assert_eq!(percentages[&Language::Rust], 75.0);
        assert_eq!(percentages[&Language::Python], 25.0);
    }

    #[test]
    fn test_percentages_with_comments() {
        let analyses = vec![
            analysis(Language::Rust, 300, 700),
            analysis(Language::Python, 100, 0),
        ];
        let percentages = language_percentages(&analyses, true);
        assert_eq!(percentages[&Language::Rust], (1000.0 / 1100.0) * 100.0);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let analyses = vec![
            analysis(Language::Go, 123, 7),
            analysis(Language::C, 456, 11),
            analysis(Language::Lua, 789, 13),
        ];
        let total: f64 = language_percentages(&analyses, false).values().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_zero_inputs() {
        assert!(language_percentages(&[], false).is_empty());
        let zeroed = vec![analysis(Language::Rust, 0, 0)];
        assert!(language_percentages(&zeroed, false).is_empty());
    }
}
