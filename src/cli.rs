use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan one or more roots and print per-language statistics (default)
    Analyze {
        /// Root paths to analyze
        #[arg(short, long)]
        paths: Vec<PathBuf>,

        /// Count comment characters into the language percentages
        #[arg(long = "include-comments")]
        include_comments: bool,

        /// Custom patterns to ignore (in addition to .gitignore and common patterns)
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Restrict the scan to these file extensions (without the dot)
        #[arg(short, long)]
        extensions: Vec<String>,

        /// Output format
        #[arg(short, long, value_parser = ["text", "json"])]
        format: Option<String>,

        /// Persist results to this SQLite database
        #[arg(long)]
        db: Option<PathBuf>,

        /// Do not apply the built-in ignore set
        #[arg(long = "no-default-ignores")]
        no_default_ignores: bool,
    },

    /// Write a per-file Markdown report
    Report {
        /// Root paths to analyze
        #[arg(short, long)]
        paths: Vec<PathBuf>,

        /// Custom patterns to ignore (in addition to .gitignore and common patterns)
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Restrict the scan to these file extensions (without the dot)
        #[arg(short, long)]
        extensions: Vec<String>,

        /// Do not apply the built-in ignore set
        #[arg(long = "no-default-ignores")]
        no_default_ignores: bool,

        /// Report path
        #[arg(short, long, default_value = "Information.md")]
        output: PathBuf,
    },

    /// Render the language breakdown as a pie chart
    Chart {
        /// Root paths to analyze
        #[arg(short, long)]
        paths: Vec<PathBuf>,

        /// Count comment characters into the language percentages
        #[arg(long = "include-comments")]
        include_comments: bool,

        /// Custom patterns to ignore (in addition to .gitignore and common patterns)
        #[arg(short, long)]
        ignore: Vec<String>,

        /// Restrict the scan to these file extensions (without the dot)
        #[arg(short, long)]
        extensions: Vec<String>,

        /// Do not apply the built-in ignore set
        #[arg(long = "no-default-ignores")]
        no_default_ignores: bool,

        /// Chart renderer
        #[arg(short, long, default_value = "svg", value_parser = ["svg", "mermaid"])]
        renderer: String,

        /// Legend position (SVG renderer only)
        #[arg(short, long, default_value = "bottom", value_parser = ["left", "bottom"])]
        legend: String,

        /// Chart title
        #[arg(short, long, default_value = "Languages")]
        title: String,

        /// Output path (defaults to languages.svg or languages.mmd)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List analyses stored in a codestat database
    History {
        /// SQLite database written by `analyze --db`
        #[arg(long)]
        db: PathBuf,

        /// Output format
        #[arg(short, long, value_parser = ["text", "json"])]
        format: Option<String>,
    },
}

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root paths to analyze (for the default analyze mode)
    #[arg(short, long)]
    pub paths: Vec<PathBuf>,

    /// Count comment characters into the language percentages
    #[arg(long = "include-comments")]
    pub include_comments: bool,

    /// Custom patterns to ignore (in addition to .gitignore and common patterns)
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Restrict the scan to these file extensions (without the dot)
    #[arg(short, long)]
    pub extensions: Vec<String>,

    /// Output format
    #[arg(short, long, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Persist results to this SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Do not apply the built-in ignore set
    #[arg(long = "no-default-ignores")]
    pub no_default_ignores: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}
