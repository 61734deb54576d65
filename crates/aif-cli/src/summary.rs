use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aif_model::Section;

use crate::types::ProjectResult;

pub fn print_summary(result: &ProjectResult) {
    println!("Record: {}", result.record_id);
    if let Some(path) = &result.output_path {
        println!("Output: {}", path.display());
    }
    let document = &result.document;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Status"),
        header_cell("Items"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(section_row(
        "applicant.formerName",
        &document.applicant.former_name,
    ));
    table.add_row(section_row(
        "residence.previousAddress",
        &document.residence.previous_address,
    ));
    table.add_row(section_row(
        "appointment.mandatoryFunctions",
        &document.appointment.mandatory_functions,
    ));
    table.add_row(section_row(
        "disclosures.disciplinary",
        &document.disclosures.disciplinary,
    ));
    table.add_row(section_row(
        "disclosures.otherLicence",
        &document.disclosures.other_licence,
    ));
    table.add_row(list_row("citizenships", document.citizenships.len()));
    table.add_row(list_row(
        "regulatoryHistory",
        document.regulatory_history.len(),
    ));
    table.add_row(list_row(
        "employmentHistory",
        document.employment_history.len(),
    ));
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn section_row<T>(name: &str, section: &Section<T>) -> Vec<Cell> {
    let status = if section.is_present() {
        Cell::new("present")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("absent")
    };
    vec![Cell::new(name), status, dim_cell("-")]
}

fn list_row(name: &str, count: usize) -> Vec<Cell> {
    let status = if count > 0 {
        Cell::new("populated").fg(Color::Green)
    } else {
        dim_cell("empty")
    };
    vec![Cell::new(name), status, Cell::new(count)]
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
