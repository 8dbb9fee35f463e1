use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

use crate::language::Language;
use crate::models::FileAnalysis;

#[derive(Serialize)]
struct LanguageShare {
    language: Language,
    percent: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileAnalysis],
    languages: Vec<LanguageShare>,
}

/// Print analyses and the language breakdown as pretty JSON on stdout.
/// Languages are ordered largest share first so the output is stable.
pub fn print_json(
    analyses: &[FileAnalysis],
    percentages: &HashMap<Language, f64>,
) -> Result<()> {
    let mut languages: Vec<LanguageShare> = percentages
        .iter()
        .map(|(language, share)| LanguageShare {
            language: *language,
            percent: *share,
        })
        .collect();
    languages.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    let report = JsonReport {
        files: analyses,
        languages,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
