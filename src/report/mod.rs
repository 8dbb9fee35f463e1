// Report module - Markdown, terminal, and JSON presentation of analysis
// results.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::print_json;
pub use markdown::write_markdown_report;
pub use terminal::print_summary;
