//! Terminal rendering of a finished turn.

use querycraft_common::Turn;
use querycraft_config::schema::{DisplayConfig, OutputFormat};
use querycraft_db::{render_json, render_table};

use crate::pipeline::TurnOutcome;

/// Render what the user sees for a turn: the SQL, the rows, and the reply.
///
/// `reply` is the assistant turn the pipeline appended; its attached table is
/// what gets printed.
pub fn render_outcome(outcome: &TurnOutcome, reply: Option<&Turn>, display: &DisplayConfig) -> String {
    let mut out = String::new();

    if display.show_sql {
        if let Some(sql) = outcome.sql() {
            out.push_str("SQL: ");
            out.push_str(sql);
            out.push_str("\n\n");
        }
    }

    if let Some(table) = reply.and_then(|turn| turn.results.as_ref()) {
        let max_rows = display.max_rows as usize;
        let rendered = match display.format {
            OutputFormat::Table => render_table(table, max_rows),
            OutputFormat::Json => render_json(table, max_rows),
        };
        out.push_str(&rendered);
        out.push_str("\n\n");
    }

    out.push_str(&outcome.summary());
    if let TurnOutcome::GenerationFailed(reason) = outcome {
        out.push_str(&format!("\n  ({reason})"));
    }
    out
}
