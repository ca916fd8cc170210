//! Text rendering of a session.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use toggle_store::{Picker, Row};

use crate::session::{Message, Session};

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn state_cell(row: &Row) -> Cell {
    if row.is_on {
        Cell::new("ON")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("OFF").add_attribute(Attribute::Dim)
    }
}

fn state_label(row: &Row) -> &'static str {
    if row.is_on { "ON" } else { "OFF" }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// Row table. The shared view shows toggles only.
pub fn rows_table<P: Picker>(session: &Session<P>) -> Table {
    let shared = session.is_shared_view();
    let mut table = Table::new();
    if shared {
        table.set_header(vec![header_cell("Row"), header_cell("State")]);
    } else {
        table.set_header(vec![
            header_cell("Row"),
            header_cell("Label"),
            header_cell("State"),
        ]);
    }
    apply_table_style(&mut table);

    for (index, row) in session.store().rows().iter().enumerate() {
        let name = Cell::new(format!("Row {}", index + 1));
        if shared {
            table.add_row(vec![name, state_cell(row)]);
        } else {
            table.add_row(vec![name, Cell::new(&row.text), state_cell(row)]);
        }
    }
    if let Some(column) = table.column_mut(if shared { 1 } else { 2 }) {
        column.set_cell_alignment(CellAlignment::Center);
    }
    table
}

/// Uncolored, line-oriented rendering for scripts and logs.
pub fn plain_lines<P: Picker>(session: &Session<P>) -> Vec<String> {
    let mut lines: Vec<String> = session
        .store()
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            // Labels are printed as entered; a blank one adds nothing.
            if session.is_shared_view() || row.text.is_empty() {
                format!("Row {}: {}", index + 1, state_label(row))
            } else {
                format!("Row {}: {} {}", index + 1, state_label(row), row.text)
            }
        })
        .collect();
    lines.push(session.status().to_string());
    lines.extend(message_line(session.event_message()));
    lines.extend(message_line(session.share_message()));
    lines
}

/// `warning: ...` for warnings, the bare text otherwise.
pub fn message_line(message: Option<&Message>) -> Option<String> {
    message.map(|message| {
        if message.warning {
            format!("warning: {}", message.text)
        } else {
            message.text.to_string()
        }
    })
}
