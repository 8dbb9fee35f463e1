use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use codestat::analyze::{analyze_files, language_percentages};
use codestat::language::Language;
use codestat::scan::{collect_files, ScanOptions};

// Python sample exercising every comment form the analyzer must catch:
// leading and trailing `#` comments, an indented function docstring, and a
// module-level docstring placed after the final statement.
const PYTHON_SAMPLE: &str = r#"# This is a single-line comment

def example_function():
    """
    This is a multi-line comment (docstring)
    It can span multiple lines.
    This is often used for function documentation.
    """
    x = 10  # Single-line comment after code
    y = 20  # Another single-line comment

    # Single-line comment inside function
    print("This is an example function!")

    return x + y


# Another single-line comment
result = example_function()  # Calling the function
print(result)

"""
This is a multi-line comment (docstring) outside any function.
It could be used for module-level documentation.
"""
"#;

fn write_file(dir: &TempDir, rel: &str, content: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write fixture");
}

fn analyze_dir(dir: &TempDir) -> Vec<codestat::FileAnalysis> {
    let roots = vec![dir.path().to_path_buf()];
    let files = collect_files(&roots, &ScanOptions::default()).expect("scan failed");
    analyze_files(&files).expect("analysis failed")
}

#[test]
fn test_python_sample_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(&dir, "example.py", PYTHON_SAMPLE);

    let analyses = analyze_dir(&dir);
    assert_eq!(analyses.len(), 1);

    let analysis = &analyses[0];
    assert_eq!(analysis.language, Language::Python);
    assert_eq!(analysis.total_chars, PYTHON_SAMPLE.chars().count() as i64);

    // Both `#` comments and docstrings must be counted; the sample is
    // comment-dominated
    assert!(analysis.comment_chars > 0);
    assert!(analysis.comment_chars > analysis.total_chars / 2);
    assert!(analysis.blank_lines > 0);
    assert_eq!(
        analysis.total_chars,
        analysis.code_chars + analysis.comment_chars + analysis.blank_lines
    );

    // A single-language tree is 100% that language
    let percentages = language_percentages(&analyses, false);
    assert_eq!(percentages.len(), 1);
    assert!((percentages[&Language::Python] - 100.0).abs() < 1e-9);
}

#[test]
fn test_trailing_module_docstring_is_counted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let with_docstring = "x = 1\nprint(x)\n\n\"\"\"\ntrailing documentation\n\"\"\"\n";
    let without_docstring = "x = 1\nprint(x)\n";
    write_file(&dir, "with.py", with_docstring);
    write_file(&dir, "without.py", without_docstring);

    let mut analyses = analyze_dir(&dir);
    analyses.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

    let with = &analyses[0];
    let without = &analyses[1];
    assert_eq!(with.metadata.name, "with.py");
    assert!(with.comment_chars > 0, "docstring after code must be counted");
    assert_eq!(without.comment_chars, 0);
}

#[test]
fn test_mixed_tree_skips_unknown_and_splits_percentages() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(&dir, "src/lib.rs", "// doc\npub fn f() -> i32 {\n    40 + 2\n}\n");
    write_file(&dir, "tools/gen.py", "# gen\nprint('x')\n");
    write_file(&dir, "notes.txt", "not a programming language\n");

    let analyses = analyze_dir(&dir);
    assert_eq!(analyses.len(), 2, "unknown extensions are skipped");
    assert!(analyses.iter().all(|a| a.language != Language::Unknown));

    let percentages = language_percentages(&analyses, false);
    assert_eq!(percentages.len(), 2);
    let total: f64 = percentages.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_size_identity_holds_across_languages() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(&dir, "a.rs", "// note\nfn main() {}\n\nconst X: u8 = 1;\n");
    write_file(&dir, "b.py", PYTHON_SAMPLE);
    write_file(&dir, "c.lua", "-- header\nlocal x = 1\n\nprint(x)\n");
    write_file(&dir, "d.sql", "-- schema\nSELECT 1;\n/* block */\n");
    write_file(&dir, "e.html", "<!-- nav -->\n<p>hi</p>\n");

    let analyses = analyze_dir(&dir);
    assert_eq!(analyses.len(), 5);
    for analysis in &analyses {
        assert_eq!(
            analysis.total_chars,
            analysis.code_chars + analysis.comment_chars + analysis.blank_lines,
            "size identity violated for {}",
            analysis.metadata.name
        );
        assert!(analysis.comment_chars > 0, "{}", analysis.metadata.name);
    }
}

#[test]
fn test_m_extension_dialect_detection() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(
        &dir,
        "view.m",
        "#import <Foundation/Foundation.h>\n@interface View : NSObject\n@end\n",
    );
    write_file(&dir, "plot.m", "% plot a line\nx = linspace(0, 1);\nplot(x)\n");

    let mut analyses = analyze_dir(&dir);
    analyses.sort_by(|a, b| a.metadata.name.cmp(&b.metadata.name));

    assert_eq!(analyses[0].metadata.name, "plot.m");
    assert_eq!(analyses[0].language, Language::Matlab);
    assert_eq!(analyses[1].metadata.name, "view.m");
    assert_eq!(analyses[1].language, Language::ObjectiveC);
}

#[test]
fn test_include_comments_changes_shares() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Comment-heavy Python next to comment-free Rust
    write_file(&dir, "doc.py", "\"\"\"\nlong documentation block\nmore text here\n\"\"\"\nx = 1\n");
    write_file(&dir, "main.rs", "fn main() { println!(\"hi\"); }\n");

    let analyses = analyze_dir(&dir);
    let without = language_percentages(&analyses, false);
    let with = language_percentages(&analyses, true);

    assert!(
        with[&Language::Python] > without[&Language::Python],
        "counting comments must raise the comment-heavy language's share"
    );
}

#[test]
fn test_gitignored_files_are_skipped() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // gitignore rules only apply inside a git repository
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git dir");
    write_file(&dir, ".gitignore", "generated/\n");
    write_file(&dir, "kept.py", "x = 1\n");
    write_file(&dir, "generated/skip.py", "y = 2\n");

    let roots: Vec<PathBuf> = vec![dir.path().to_path_buf()];
    let files = collect_files(&roots, &ScanOptions::default()).expect("scan failed");
    let names: Vec<_> = files
        .iter()
        .map(|meta| meta.name.clone())
        .filter(|name| name.ends_with(".py"))
        .collect();
    assert_eq!(names, vec!["kept.py"]);
}
