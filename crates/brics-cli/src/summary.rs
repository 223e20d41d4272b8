use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use brics_cli::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Resource: {}", result.resource);
    println!("Output: {}", result.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Template rows kept"), dim_cell(result.template_rows)]);
    table.add_row(vec![Cell::new("Resource rows"), Cell::new(result.resource_rows)]);
    table.add_row(vec![
        Cell::new("Relevant extensions"),
        Cell::new(result.relevant_extensions),
    ]);
    table.add_row(vec![
        Cell::new("Extension rows emitted"),
        Cell::new(result.extension_rows),
    ]);
    table.add_row(vec![
        Cell::new("Rows with permissible values"),
        count_cell(result.rows_with_values),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.resource_rows + result.extension_rows).add_attribute(Attribute::Bold),
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
