//! Output formatting helpers for the CLI.
//!
//! Tables for humans, pretty JSON for `--json`.

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;

/// Render rows under `headers` as a borderless table.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.iter().map(|header| Cell::new(*header)));

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", table(headers, rows));
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `62.5` rather than `62.50`, `60` rather than `60.0`.
pub fn format_weight(weight: f64) -> String {
    let formatted = format!("{:.2}", weight);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(60.0), "60");
        assert_eq!(format_weight(62.5), "62.5");
        assert_eq!(format_weight(17.25), "17.25");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn test_table_contains_headers_and_cells() {
        let rendered = table(&["Name", "Sets"], &[vec!["Bench".to_string(), "3".to_string()]]);
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Bench"));
    }
}
