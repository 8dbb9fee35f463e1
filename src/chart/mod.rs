// Chart module - pie-chart rendering of the language breakdown, either as a
// standalone SVG file or as Mermaid source.

pub mod mermaid;
pub mod pie;
pub mod svg;

pub use mermaid::{render_mermaid_pie, write_mermaid_pie, MermaidChartConfig};
pub use pie::{language_slices, PieSlice};
pub use svg::{render_svg_pie, write_svg_pie, LegendPosition, SvgChartConfig};
