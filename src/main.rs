use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use codestat::analyze::{analyze_files, language_percentages};
use codestat::chart::{
    language_slices, write_mermaid_pie, write_svg_pie, LegendPosition, MermaidChartConfig,
    SvgChartConfig,
};
use codestat::cli::{Args, Command};
use codestat::config::{load_config, CodestatConfig};
use codestat::models::FileAnalysis;
use codestat::report::{print_json, print_summary, write_markdown_report};
use codestat::scan::{collect_files, collect_files_with_extensions, ScanOptions};
use codestat::store::Store;

struct AnalyzeParams {
    paths: Vec<PathBuf>,
    include_comments: bool,
    ignore: Vec<String>,
    extensions: Vec<String>,
    format: Option<String>,
    db: Option<PathBuf>,
    no_default_ignores: bool,
}

struct ReportParams {
    paths: Vec<PathBuf>,
    ignore: Vec<String>,
    extensions: Vec<String>,
    no_default_ignores: bool,
    output: PathBuf,
}

struct ChartParams {
    paths: Vec<PathBuf>,
    include_comments: bool,
    ignore: Vec<String>,
    extensions: Vec<String>,
    no_default_ignores: bool,
    renderer: String,
    legend: String,
    title: String,
    output: Option<PathBuf>,
}

struct HistoryParams {
    db: PathBuf,
    format: Option<String>,
}

fn scan_roots(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    }
}

fn display_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|root| root.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Walk the roots and analyze everything that survives the ignore rules.
/// Config-supplied ignore patterns and extension filters are folded in
/// under the CLI-supplied ones.
fn scan_and_analyze(
    roots: &[PathBuf],
    ignore: &[String],
    extensions: &[String],
    no_default_ignores: bool,
    config: &CodestatConfig,
) -> Result<Vec<FileAnalysis>> {
    let mut ignore_patterns = ignore.to_vec();
    ignore_patterns.extend(config.ignore_patterns());

    let options = ScanOptions {
        custom_ignores: &ignore_patterns,
        use_default_ignores: !no_default_ignores,
    };

    let extensions = if extensions.is_empty() {
        config.extensions()
    } else {
        extensions.to_vec()
    };

    let files = if extensions.is_empty() {
        collect_files(roots, &options)?
    } else {
        collect_files_with_extensions(roots, Some(&extensions), &options)?
    };

    analyze_files(&files)
}

fn handle_analyze(params: AnalyzeParams) -> Result<()> {
    let roots = scan_roots(params.paths);
    let config = load_config(&roots[0])?;

    let format = params
        .format
        .or_else(|| config.format().map(str::to_string))
        .unwrap_or_else(|| "text".to_string());
    let include_comments = params.include_comments || config.include_comments();

    println!("{} {}", "Scanning:".bold().green(), display_roots(&roots));
    if include_comments {
        println!("{} {}", "Options:".bold().green(), "Including comments");
    }

    let start_time = Instant::now();
    let analyses = scan_and_analyze(
        &roots,
        &params.ignore,
        &params.extensions,
        params.no_default_ignores,
        &config,
    )?;
    let percentages = language_percentages(&analyses, include_comments);
    let duration = start_time.elapsed();

    match format.as_str() {
        "json" => print_json(&analyses, &percentages)?,
        _ => print_summary(&analyses, &percentages, duration),
    }

    let db = params.db.or_else(|| config.db().map(PathBuf::from));
    if let Some(db) = db {
        let mut store = Store::open(&db)?;
        store.save_analyses(&analyses)?;
        println!(
            "{} {} analyses to {}",
            "Saved:".bold().green(),
            analyses.len(),
            db.display()
        );
    }

    Ok(())
}

fn handle_report(params: ReportParams) -> Result<()> {
    let roots = scan_roots(params.paths);
    let config = load_config(&roots[0])?;

    println!("{} {}", "Scanning:".bold().green(), display_roots(&roots));

    let analyses = scan_and_analyze(
        &roots,
        &params.ignore,
        &params.extensions,
        params.no_default_ignores,
        &config,
    )?;
    write_markdown_report(&analyses, &params.output)?;

    println!(
        "{} {} files reported to {}",
        "Done:".bold().green(),
        analyses.len(),
        params.output.display()
    );
    Ok(())
}

fn handle_chart(params: ChartParams) -> Result<()> {
    let roots = scan_roots(params.paths);
    let config = load_config(&roots[0])?;
    let include_comments = params.include_comments || config.include_comments();

    println!("{} {}", "Scanning:".bold().green(), display_roots(&roots));

    let analyses = scan_and_analyze(
        &roots,
        &params.ignore,
        &params.extensions,
        params.no_default_ignores,
        &config,
    )?;
    let percentages = language_percentages(&analyses, include_comments);
    let slices = language_slices(&percentages);

    if slices.is_empty() {
        println!("{}", "No supported files found, nothing to chart.".yellow().bold());
        return Ok(());
    }

    match params.renderer.as_str() {
        "mermaid" => {
            let output = params
                .output
                .unwrap_or_else(|| PathBuf::from("languages.mmd"));
            let chart_config = MermaidChartConfig {
                title: params.title,
                ..MermaidChartConfig::default()
            };
            write_mermaid_pie(&slices, &chart_config, &output)?;
            println!("{} {}", "Chart written to:".bold().green(), output.display());
        }
        _ => {
            let output = params
                .output
                .unwrap_or_else(|| PathBuf::from("languages.svg"));
            let legend = match params.legend.as_str() {
                "left" => LegendPosition::Left,
                _ => LegendPosition::Bottom,
            };
            let chart_config = SvgChartConfig {
                title: params.title,
                legend,
                ..SvgChartConfig::default()
            };
            write_svg_pie(&slices, &chart_config, &output)?;
            println!("{} {}", "Chart written to:".bold().green(), output.display());
        }
    }

    Ok(())
}

fn handle_history(params: HistoryParams) -> Result<()> {
    let store = Store::open(&params.db)
        .with_context(|| format!("failed to open database at {}", params.db.display()))?;
    let rows = store.analysis_rows()?;

    if params.format.as_deref() == Some("json") {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No stored analyses.".yellow().bold());
        return Ok(());
    }

    println!("{} {}", "Stored analyses:".bold().green(), rows.len());
    for row in &rows {
        println!("{} ({})", row.metadata.path.display(), row.language);
        println!(
            "  {} total, {} code, {} comment, {} blank lines",
            row.total_chars, row.code_chars, row.comment_chars, row.blank_lines
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        // When no subcommand is provided, default to analyze
        None => handle_analyze(AnalyzeParams {
            paths: args.paths,
            include_comments: args.include_comments,
            ignore: args.ignore,
            extensions: args.extensions,
            format: args.format,
            db: args.db,
            no_default_ignores: args.no_default_ignores,
        })?,
        Some(Command::Analyze {
            paths,
            include_comments,
            ignore,
            extensions,
            format,
            db,
            no_default_ignores,
        }) => handle_analyze(AnalyzeParams {
            paths,
            include_comments,
            ignore,
            extensions,
            format,
            db,
            no_default_ignores,
        })?,
        Some(Command::Report {
            paths,
            ignore,
            extensions,
            no_default_ignores,
            output,
        }) => handle_report(ReportParams {
            paths,
            ignore,
            extensions,
            no_default_ignores,
            output,
        })?,
        Some(Command::Chart {
            paths,
            include_comments,
            ignore,
            extensions,
            no_default_ignores,
            renderer,
            legend,
            title,
            output,
        }) => handle_chart(ChartParams {
            paths,
            include_comments,
            ignore,
            extensions,
            no_default_ignores,
            renderer,
            legend,
            title,
            output,
        })?,
        Some(Command::History { db, format }) => handle_history(HistoryParams { db, format })?,
    }

    Ok(())
}
