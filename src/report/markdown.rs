use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::FileAnalysis;

/// Write one Markdown section per analysis to `output`, truncating any
/// existing report.
pub fn write_markdown_report(analyses: &[FileAnalysis], output: &Path) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("failed to create report at {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    for analysis in analyses {
        writer
            .write_all(render_section(analysis).as_bytes())
            .with_context(|| format!("failed to write report to {}", output.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush report to {}", output.display()))
}

fn render_section(analysis: &FileAnalysis) -> String {
    format!(
        "## {}\n\n\
         | Property      | Value |\n\
         |---------------|-------|\n\
         | File Name     | {} |\n\
         | File Path     | {} |\n\
         | Language      | {} |\n\
         | Total Size    | {} chars |\n\
         | Code Size     | {} chars |\n\
         | Comment Size  | {} chars |\n\
         | Blank Lines   | {} |\n\n",
        analysis.metadata.name,
        analysis.metadata.name,
        analysis.metadata.path.display(),
        analysis.language,
        analysis.total_chars,
        analysis.code_chars,
        analysis.comment_chars,
        analysis.blank_lines,
    )
}

#[cfg(test)]
mod tests {
    use super::render_section;
    use crate::language::Language;
    use crate::models::{FileAnalysis, FileMetadata};
    use chrono::Utc;
    use std::path::PathBuf;

    #[test]
    fn test_section_shape() {
        let analysis = FileAnalysis {
            id: None,
            metadata: FileMetadata {
                id: None,
                name: "main.rs".to_string(),
                path: PathBuf::from("/repo/src/main.rs"),
                dir: PathBuf::from("/repo/src"),
                extension: "rs".to_string(),
                size: 120,
                modified_at: Utc::now(),
            },
            language: Language::Rust,
            total_chars: 100,
            comment_chars: 30,
            code_chars: 68,
            blank_lines: 2,
        };

        let section = render_section(&analysis);
        assert!(section.starts_with("## main.rs\n"));
        assert!(section.contains("| Language      | Rust |"));
        assert!(section.contains("| Total Size    | 100 chars |"));
        assert!(section.contains("| Comment Size  | 30 chars |"));
        assert!(section.contains("| Blank Lines   | 2 |"));
        assert!(section.ends_with("\n\n"));
    }
}
