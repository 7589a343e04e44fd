//! Format namespace query results as text.

use crate::namespace::NamespaceStats;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline when `color` is set.
pub fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Format namespace statistics as a two-column table.
pub fn format_stats_text(stats: &NamespaceStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Files".to_string(), stats.files.to_string()]);
    table.add_row(vec!["Directories".to_string(), stats.directories.to_string()]);
    table.add_row(vec!["Total size".to_string(), stats.total_size.to_string()]);
    table.to_string()
}

/// Format the biggest-file answer; an empty namespace has none.
pub fn format_biggest_text(file: Option<(&str, u64)>) -> String {
    match file {
        Some((name, size)) => format!("biggest: {} ({})", name, size),
        None => "biggest: none".to_string(),
    }
}
