use colored::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::language::Language;
use crate::models::FileAnalysis;

/// Print a colored summary of an analysis run: counts, the per-language
/// breakdown sorted largest first, and the elapsed time.
pub fn print_summary(
    analyses: &[FileAnalysis],
    percentages: &HashMap<Language, f64>,
    duration: Duration,
) {
    if analyses.is_empty() {
        println!("{}", "No supported files found.".yellow().bold());
        println!("Analysis completed in {:.2?}", duration);
        return;
    }

    println!("{} {}", "Files analyzed:".bold().green(), analyses.len());
    println!("{} {}", "Languages:".bold().green(), percentages.len());

    let total_comment: i64 = analyses.iter().map(|analysis| analysis.comment_chars).sum();
    let total_blank: i64 = analyses.iter().map(|analysis| analysis.blank_lines).sum();
    println!("{} {}", "Comment chars:".bold().green(), total_comment);
    println!("{} {}", "Blank lines:".bold().green(), total_blank);
    println!();

    println!("{}", "Language breakdown:".bold().green());
    let mut shares: Vec<(&Language, &f64)> = percentages.iter().collect();
    shares.sort_by(|a, b| b.1.total_cmp(a.1));
    for (language, share) in shares {
        println!("  {:<14} {:>6.1}%", language.name(), share);
    }

    println!();
    println!("Analysis completed in {:.2?}", duration);
}
