// Analyze module - per-file comment/blank-line accounting and aggregate
// language statistics.

pub mod analyzer;
pub mod stats;

pub use analyzer::{analyze_file, analyze_files, count_blank_lines};
pub use stats::language_percentages;
