//! Terminal table rendering for listing commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use ddm_service::{DatasetRecord, DimensionMetadata, ResultPage};

pub fn print_dataset_page(page: &ResultPage<DatasetRecord>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Latest edition"),
        header_cell("Version"),
        header_cell("Editions"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for record in &page.items {
        let (edition, version) = record
            .latest
            .as_ref()
            .map_or(("-".to_string(), "-".to_string()), |latest| {
                (latest.edition.clone(), latest.version.clone())
            });
        let editions = record
            .editions
            .as_ref()
            .map_or_else(|| "0".to_string(), |editions| editions.len().to_string());
        table.add_row(vec![
            Cell::new(&record.dataset_id),
            Cell::new(&record.title),
            Cell::new(edition),
            Cell::new(version),
            Cell::new(editions),
        ]);
    }
    println!("{table}");
    println!(
        "page {} of {} ({} datasets total)",
        page.page, page.total_pages, page.total
    );
}

pub fn print_dimension_table(dimensions: &[DimensionMetadata]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Hierarchical"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for dimension in dimensions {
        let options = dimension
            .options
            .as_ref()
            .map_or_else(|| "-".to_string(), |options| options.len().to_string());
        table.add_row(vec![
            Cell::new(&dimension.name),
            Cell::new(&dimension.kind),
            Cell::new(if dimension.hierarchical { "yes" } else { "no" }),
            Cell::new(options),
        ]);
    }
    println!("{table}");
}

pub fn print_hierarchy_table(hierarchies: &[DimensionMetadata]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    for hierarchy in hierarchies {
        table.add_row(vec![
            Cell::new(&hierarchy.id),
            Cell::new(&hierarchy.name),
            Cell::new(&hierarchy.kind),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
