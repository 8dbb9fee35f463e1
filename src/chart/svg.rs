use anyhow::{Context, Result};
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::pie::{sort_slices_desc, PieSlice};

// Layout defaults shared by every rendered chart
const BACKGROUND_COLOR: &str = "#ffffff";
const BORDER_COLOR: &str = "#ffffff";
const BORDER_WIDTH: f64 = 3.0;
const PADDING: i64 = 25;
const TITLE_COLOR: &str = "#000000";
const TITLE_FONT_SIZE: f64 = 16.0;
const TITLE_HEIGHT: i64 = 50;
const TITLE_MARGIN: i64 = 30;
const LEGEND_ITEM_WIDTH: i64 = 180;
const LEGEND_START_X: i64 = 50;
const LEGEND_ROW_SPACING: i64 = 25;
const LEGEND_PADDING: i64 = 50;
const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_COLOR: &str = "#000000";
const INDICATOR_SIZE: i64 = 20;

/// Where the legend sits relative to the pie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Left,
    Bottom,
}

/// Configuration for an SVG pie chart. Width and height describe the pie
/// area; the title band and legend extend the final canvas.
#[derive(Debug, Clone)]
pub struct SvgChartConfig {
    pub title: String,
    pub width: i64,
    pub height: i64,
    pub legend: LegendPosition,
}

impl Default for SvgChartConfig {
    fn default() -> Self {
        SvgChartConfig {
            title: String::new(),
            width: 600,
            height: 400,
            legend: LegendPosition::Bottom,
        }
    }
}

struct LegendLayout {
    columns: i64,
    rows: i64,
    width: i64,
    start_x: i64,
    start_y: i64,
}

struct ChartLayout {
    total_width: i64,
    total_height: i64,
    center_x: f64,
    center_y: f64,
    radius: f64,
    legend: LegendLayout,
}

fn row_count(items: i64, columns: i64) -> i64 {
    (items + columns - 1) / columns
}

// Column count for a left legend, derived from how many rows fit the chart
// height at the default row spacing.
fn optimal_column_count(items: i64, chart_height: i64) -> i64 {
    if items == 0 || chart_height <= 0 {
        return 1;
    }
    ((items * LEGEND_ROW_SPACING) as f64 / chart_height as f64).ceil() as i64
}

fn layout_bottom(title_height: i64, items: i64, width: i64, height: i64) -> ChartLayout {
    let columns = (width / LEGEND_ITEM_WIDTH).max(1);
    let rows = row_count(items, columns);
    let legend_height = rows * LEGEND_ROW_SPACING + 2 * LEGEND_PADDING;
    let total_height = height + title_height + legend_height;

    let inner_width = width - 2 * PADDING;
    let inner_height = height;

    ChartLayout {
        total_width: width,
        total_height,
        center_x: (PADDING + inner_width / 2) as f64,
        center_y: (title_height + inner_height / 2) as f64,
        radius: (inner_width.min(inner_height) / 2) as f64,
        legend: LegendLayout {
            columns,
            rows,
            width: LEGEND_ITEM_WIDTH * columns,
            start_x: LEGEND_START_X,
            start_y: total_height - legend_height + LEGEND_PADDING,
        },
    }
}

fn layout_left(title_height: i64, items: i64, width: i64, height: i64) -> ChartLayout {
    let columns = optimal_column_count(items, height);
    let rows = row_count(items, columns);
    let legend_width = columns * LEGEND_ITEM_WIDTH + 2 * LEGEND_PADDING;
    let total_width = width + legend_width;

    let inner_width = total_width - legend_width - PADDING;
    let inner_height = height - title_height - PADDING;

    ChartLayout {
        total_width,
        total_height: height,
        center_x: (legend_width + inner_width / 2) as f64,
        center_y: (title_height + inner_height / 2) as f64,
        radius: (inner_width.min(inner_height) / 2) as f64,
        legend: LegendLayout {
            columns,
            rows,
            width: legend_width,
            start_x: LEGEND_START_X,
            start_y: (height - rows * LEGEND_ROW_SPACING) / 2,
        },
    }
}

/// Render the slices as a standalone SVG pie chart with a title band and a
/// legend of colored squares.
pub fn render_svg_pie(slices: &[PieSlice], config: &SvgChartConfig) -> String {
    let slices = sort_slices_desc(slices);

    let has_title = !config.title.trim().is_empty();
    let title_height = if has_title { TITLE_HEIGHT } else { 0 };
    let title_margin = if has_title { TITLE_MARGIN } else { 0 };

    let layout = match config.legend {
        LegendPosition::Bottom => {
            layout_bottom(title_height, slices.len() as i64, config.width, config.height)
        }
        LegendPosition::Left => {
            layout_left(title_height, slices.len() as i64, config.width, config.height)
        }
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        layout.total_width, layout.total_height, layout.total_width, layout.total_height
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        layout.total_width, layout.total_height, BACKGROUND_COLOR
    );

    if has_title {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
            layout.total_width / 2,
            title_margin,
            TITLE_FONT_SIZE,
            TITLE_COLOR,
            escape_text(&config.title)
        );
    }

    render_slices(&mut svg, &slices, &layout);
    render_legend(&mut svg, &slices, &layout);

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the chart to `output`, truncating any existing file.
pub fn write_svg_pie(slices: &[PieSlice], config: &SvgChartConfig, output: &Path) -> Result<()> {
    let svg = render_svg_pie(slices, config);
    fs::write(output, svg)
        .with_context(|| format!("failed to write chart to {}", output.display()))
}

fn render_slices(svg: &mut String, slices: &[PieSlice], layout: &ChartLayout) {
    let total: f64 = slices.iter().map(|slice| slice.value.max(0.0)).sum();
    if total <= 0.0 {
        return;
    }

    let visible: Vec<&PieSlice> = slices.iter().filter(|slice| slice.value > 0.0).collect();

    // A single slice covers the full circle; an arc with identical endpoints
    // would collapse, so draw a circle instead
    if visible.len() == 1 {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            layout.center_x,
            layout.center_y,
            layout.radius,
            visible[0].color_hex,
            BORDER_COLOR,
            BORDER_WIDTH
        );
        return;
    }

    // Start at twelve o'clock and sweep clockwise
    let mut angle = -PI / 2.0;
    for slice in visible {
        let sweep = slice.value / total * 2.0 * PI;
        let end = angle + sweep;
        let x1 = layout.center_x + layout.radius * angle.cos();
        let y1 = layout.center_y + layout.radius * angle.sin();
        let x2 = layout.center_x + layout.radius * end.cos();
        let y2 = layout.center_y + layout.radius * end.sin();
        let large_arc = i32::from(sweep > PI);

        let _ = writeln!(
            svg,
            r#"  <path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            layout.center_x,
            layout.center_y,
            x1,
            y1,
            layout.radius,
            layout.radius,
            large_arc,
            x2,
            y2,
            slice.color_hex,
            BORDER_COLOR,
            BORDER_WIDTH
        );
        angle = end;
    }
}

fn render_legend(svg: &mut String, slices: &[PieSlice], layout: &ChartLayout) {
    if slices.is_empty() {
        return;
    }
    let column_width = layout.legend.width / layout.legend.columns;
    let text_padding = 10;

    for (index, slice) in slices.iter().enumerate() {
        let row = index as i64 / layout.legend.columns;
        let column = index as i64 % layout.legend.columns;
        let x = layout.legend.start_x + column * column_width;
        let y = layout.legend.start_y + row * LEGEND_ROW_SPACING;

        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            x, y, INDICATOR_SIZE, INDICATOR_SIZE, slice.color_hex
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            x + INDICATOR_SIZE + text_padding,
            y + INDICATOR_SIZE / 2 + 4,
            LABEL_FONT_SIZE,
            LABEL_COLOR,
            escape_text(&slice.label)
        );
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
