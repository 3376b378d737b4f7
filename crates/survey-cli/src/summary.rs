use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::Stage;
use survey_report::format_amount;

use survey_cli::types::{CleanOutcome, PartitionListing};

pub fn print_clean_summary(outcome: &CleanOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Data directory: {}", outcome.data_dir.display());

    let report = &outcome.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Original records"), Cell::new(report.original_rows)]);
    for stage in [Stage::Deduplicate, Stage::RequiredFields, Stage::Outliers] {
        table.add_row(vec![
            Cell::new(format!("{} removed", stage.label())),
            removed_cell(report.removed_by(stage)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Final records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.final_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    match &report.salary_bounds {
        Some(bounds) => println!(
            "Salary range kept: {} - {} (mean {}, std {})",
            format_amount(bounds.lower),
            format_amount(bounds.upper),
            format_amount(bounds.mean),
            format_amount(bounds.std_dev),
        ),
        None => println!("Salary range kept: not applied"),
    }

    print_partition_writes(outcome);
}

fn print_partition_writes(outcome: &CleanOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Records"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for write in &outcome.partitions {
        let file_cell = match &write.result {
            Ok(path) => Cell::new(path.display()),
            Err(error) => Cell::new(error).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&write.partition).add_attribute(Attribute::Bold),
            Cell::new(write.rows),
            file_cell,
        ]);
    }
    println!("{table}");
    println!(
        "Datasets written: {} of {}",
        outcome.written(),
        outcome.partitions.len()
    );
}

pub fn print_partitions(listing: &PartitionListing) {
    if listing.partitions.is_empty() {
        println!(
            "No cleaned datasets in {} (run `salary-survey clean` first).",
            listing.data_dir.display()
        );
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dataset"), header_cell("File")]);
    apply_table_style(&mut table);
    for partition in &listing.partitions {
        table.add_row(vec![
            Cell::new(partition).add_attribute(Attribute::Bold),
            dim_cell(partition.file_name()),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn removed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
