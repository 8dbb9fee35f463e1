use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::language::Language;

/// One pie slice: a label, its value, and a fill color
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color_hex: String,
}

// Fallback palette for slices without a usable color
pub const DEFAULT_COLORS: [&str; 7] = [
    "#FF6384", // Red
    "#36A2EB", // Blue
    "#FFCE56", // Yellow
    "#4BC0C0", // Teal
    "#9966FF", // Purple
    "#FF9F40", // Orange
    "#FFCD56", // Light Orange
];

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").unwrap());

pub fn is_valid_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Return the given color if it is a valid hex color (a missing `#` prefix
/// is tolerated), otherwise the fallback.
pub fn color_or_default(color: &str, fallback: &str) -> String {
    let color = if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{}", color)
    };
    if is_valid_hex_color(&color) {
        color
    } else {
        fallback.to_string()
    }
}

/// Sort slices by value, largest first, without touching the input.
pub fn sort_slices_desc(slices: &[PieSlice]) -> Vec<PieSlice> {
    let mut sorted = slices.to_vec();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted
}

/// Turn a language percentage map into pie slices colored with each
/// language's linguist color, largest share first.
pub fn language_slices(percentages: &HashMap<Language, f64>) -> Vec<PieSlice> {
    let slices: Vec<PieSlice> = percentages
        .iter()
        .map(|(language, share)| PieSlice {
            label: language.name().to_string(),
            value: *share,
            color_hex: language.color().to_string(),
        })
        .collect();
    sort_slices_desc(&slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_validation() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#00ADD8"));
        assert!(!is_valid_hex_color("00ADD8"));
        assert!(!is_valid_hex_color("#00AD"));
        assert!(!is_valid_hex_color("#GGGGGG"));
    }

    #[test]
    fn test_color_or_default() {
        assert_eq!(color_or_default("00ADD8", "#FF6384"), "#00ADD8");
        assert_eq!(color_or_default("#00ADD8", "#FF6384"), "#00ADD8");
        assert_eq!(color_or_default("not-a-color", "#FF6384"), "#FF6384");
    }

    #[test]
    fn test_sort_slices_desc() {
        let slices = vec![
            PieSlice { label: "a".into(), value: 1.0, color_hex: "#fff".into() },
            PieSlice { label: "b".into(), value: 3.0, color_hex: "#fff".into() },
            PieSlice { label: "c".into(), value: 2.0, color_hex: "#fff".into() },
        ];
        let sorted = sort_slices_desc(&slices);
        let labels: Vec<_> = sorted.iter().map(|slice| slice.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        // Input untouched
        assert_eq!(slices[0].label, "a");
    }
}
