use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::pie::{color_or_default, sort_slices_desc, PieSlice, DEFAULT_COLORS};

const DEFAULT_TITLE_FONT_SIZE: f64 = 16.0;

/// Configuration for a Mermaid pie chart
#[derive(Debug, Clone)]
pub struct MermaidChartConfig {
    pub title: String,
    /// Title font size in pixels; non-positive values fall back to the default
    pub title_font_size: f64,
}

impl Default for MermaidChartConfig {
    fn default() -> Self {
        MermaidChartConfig {
            title: String::new(),
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
        }
    }
}

/// Render the slices as Mermaid pie-chart source. Slice colors are wired in
/// through an init block of theme variables, since Mermaid has no per-slice
/// color syntax.
pub fn render_mermaid_pie(slices: &[PieSlice], config: &MermaidChartConfig) -> String {
    let slices = sort_slices_desc(slices);
    let font_size = if config.title_font_size <= 0.0 {
        DEFAULT_TITLE_FONT_SIZE
    } else {
        config.title_font_size
    };

    let mut out = String::new();
    out.push_str("%%{\n  init: {\n    \"themeVariables\": {\n");

    for (index, slice) in slices.iter().enumerate() {
        let color = color_or_default(
            &slice.color_hex,
            DEFAULT_COLORS[index % DEFAULT_COLORS.len()],
        );
        let _ = writeln!(out, "      \"pie{}\": \"{}\",", index + 1, color);
    }

    out.push_str("      \"pieSectionTextSize\": \"0\",\n");
    let _ = writeln!(out, "      \"pieTitleTextSize\": \"{:.2}px\"", font_size);
    out.push_str("    }\n  }\n}%%\n\npie\n");

    let _ = writeln!(out, "  title {}", config.title);
    for slice in &slices {
        let _ = writeln!(out, "  \"{}\": {:.6}", slice.label, slice.value);
    }

    out
}

/// Render and write the Mermaid source to `output`, truncating any existing
/// file.
pub fn write_mermaid_pie(
    slices: &[PieSlice],
    config: &MermaidChartConfig,
    output: &Path,
) -> Result<()> {
    let source = render_mermaid_pie(slices, config);
    fs::write(output, source)
        .with_context(|| format!("failed to write chart to {}", output.display()))
}
