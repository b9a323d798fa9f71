use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clinical_model::{ClinicalEntityType, DonorErrorGroup};
use clinical_report::{CellFlags, ColumnKey, ErrorReport, TableRow, annotate_row};

/// Print the deduplicated error report for one entity.
pub fn print_error_report(entity: ClinicalEntityType, report: &ErrorReport) {
    println!("{} ({}.tsv)", entity.label(), entity.name());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Error message"),
        header_cell("# Affected records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(row.field_name.clone()).fg(Color::Blue),
            Cell::new(row.error_message.clone()),
            Cell::new(row.entries).fg(Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.total_entries)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!();
}

/// Print one entity's merged data table with completion columns and
/// per-cell error highlighting.
pub fn print_entity_table(
    entity: ClinicalEntityType,
    columns: &[ColumnKey],
    rows: &[TableRow],
    groups: &[DonorErrorGroup],
    total_docs: u64,
) {
    println!(
        "{}: showing {} of {} records",
        entity.label(),
        rows.len(),
        total_docs
    );
    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| header_cell(column.header()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in rows {
        let flags = annotate_row(row, columns, groups);
        let cells: Vec<Cell> = columns
            .iter()
            .zip(flags)
            .map(|(column, flags)| data_cell(row, column, flags))
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}

/// List the known entity types with wire names and aliases.
pub fn print_entity_list() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Wire name"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    for entity in ClinicalEntityType::ALL {
        let aliases = entity.aliases().join(", ");
        table.add_row(vec![
            Cell::new(entity.label()).fg(Color::Blue),
            Cell::new(entity.name()),
            if aliases.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(aliases)
            },
        ]);
    }
    println!("{table}");
}

fn data_cell(row: &TableRow, column: &ColumnKey, flags: CellFlags) -> Cell {
    let display = match row.get(column) {
        Some(value) => value.display(),
        None => String::new(),
    };
    let cell = if display.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(display)
    };
    if flags.is_error {
        cell.fg(Color::Red)
    } else if flags.is_completion {
        cell.fg(Color::Green)
    } else {
        cell
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(165);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
