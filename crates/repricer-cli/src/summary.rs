use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Feed"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Output"),
        header_cell("Duration"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.input_path.display()),
        Cell::new(result.rows),
        Cell::new(result.columns),
        Cell::new(result.output_path.display())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} ms", result.duration_ms)),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
