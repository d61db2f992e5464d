//! Result table rendering for the terminal.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use querycraft_common::ResultTable;

/// Render up to `max_rows` rows as a grid, with a footer when rows were cut.
pub fn render_table(result: &ResultTable, max_rows: usize) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        result
            .columns
            .iter()
            .map(|name| Cell::new(name).fg(Color::Cyan)),
    );

    for row in result.rows.iter().take(max_rows) {
        table.add_row(row.iter().map(|cell| Cell::new(cell.to_string())));
    }

    let mut out = table.to_string();
    if let Some(footer) = truncation_footer(result, max_rows) {
        out.push('\n');
        out.push_str(&footer);
    }
    out
}

/// Render up to `max_rows` rows as a pretty-printed JSON array of objects.
pub fn render_json(result: &ResultTable, max_rows: usize) -> String {
    let shown = ResultTable {
        columns: result.columns.clone(),
        rows: result.rows.iter().take(max_rows).cloned().collect(),
    };
    let mut out = serde_json::to_string_pretty(&shown.to_json_rows())
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize rows: {e}\"}}"));
    if let Some(footer) = truncation_footer(result, max_rows) {
        out.push('\n');
        out.push_str(&footer);
    }
    out
}

fn truncation_footer(result: &ResultTable, max_rows: usize) -> Option<String> {
    let hidden = result.row_count().saturating_sub(max_rows);
    (hidden > 0).then(|| format!("... {hidden} more rows not shown"))
}
