use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

use codestat::chart::{
    language_slices, write_mermaid_pie, write_svg_pie, LegendPosition, MermaidChartConfig,
    PieSlice, SvgChartConfig,
};
use codestat::language::Language;

fn slices() -> Vec<PieSlice> {
    vec![
        PieSlice {
            label: "Rust".to_string(),
            value: 61.5,
            color_hex: "#DEA584".to_string(),
        },
        PieSlice {
            label: "Python".to_string(),
            value: 30.0,
            color_hex: "#3572A5".to_string(),
        },
        PieSlice {
            label: "Lua".to_string(),
            value: 8.5,
            color_hex: "#000080".to_string(),
        },
    ]
}

#[test]
fn test_svg_chart_is_written() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("languages.svg");

    let config = SvgChartConfig {
        title: "Languages".to_string(),
        ..SvgChartConfig::default()
    };
    write_svg_pie(&slices(), &config, &output).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<path ").count(), 3);
    // One legend square and one label per slice
    assert_eq!(svg.matches("<rect x=").count(), 3);
    assert!(svg.contains(">Rust</text>"));
    assert!(svg.contains(">Languages</text>"));
}

#[test]
fn test_svg_left_legend_widens_canvas() {
    let config = SvgChartConfig {
        width: 400,
        height: 400,
        legend: LegendPosition::Left,
        ..SvgChartConfig::default()
    };
    let svg = codestat::chart::render_svg_pie(&slices(), &config);
    // 400px pie area plus a one-column legend band (180 + 2 * 50)
    assert!(svg.contains("width=\"680\""));
}

#[test]
fn test_svg_overwrites_existing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("languages.svg");
    fs::write(&output, "stale content").unwrap();

    write_svg_pie(&slices(), &SvgChartConfig::default(), &output).unwrap();
    let svg = fs::read_to_string(&output).unwrap();
    assert!(!svg.contains("stale content"));
    assert!(svg.starts_with("<svg "));
}

#[test]
fn test_mermaid_chart_is_written() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("languages.mmd");

    let config = MermaidChartConfig {
        title: "Languages".to_string(),
        ..MermaidChartConfig::default()
    };
    write_mermaid_pie(&slices(), &config, &output).unwrap();

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.starts_with("%%{"));
    assert!(source.contains("pie\n  title Languages\n"));
    assert!(source.contains("  \"Rust\": 61.500000\n"));
    assert!(source.contains("  \"Python\": 30.000000\n"));
    assert!(source.contains("  \"Lua\": 8.500000\n"));
}

#[test]
fn test_language_slices_are_sorted_and_colored() {
    let mut percentages = HashMap::new();
    percentages.insert(Language::Python, 25.0);
    percentages.insert(Language::Rust, 70.0);
    percentages.insert(Language::Go, 5.0);

    let slices = language_slices(&percentages);
    let labels: Vec<_> = slices.iter().map(|slice| slice.label.as_str()).collect();
    assert_eq!(labels, vec!["Rust", "Python", "Go"]);
    assert_eq!(slices[0].color_hex, Language::Rust.color());
    assert_eq!(slices[2].color_hex, "#00ADD8");
}
