use std::path::PathBuf;

use phonerank_scoring::report::{AttributeSummary, DatasetSummary};

use crate::{loader, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InspectArg {
    /// Path to the phone dataset (CSV, or JSON with a `.json` extension)
    file: PathBuf,
}

pub(crate) fn run(arg: &InspectArg) -> anyhow::Result<()> {
    let InspectArg { file } = arg;
    let records = loader::read_records_file(file)?;
    let summary = DatasetSummary::from_records(&records);

    println!("Dataset: {}", file.display());
    println!("==========================================\n");
    println!("Records: {}", summary.total_records);
    println!("Missing cells: {}", summary.missing_cells());
    println!();

    println!("Attributes:");
    println!(
        "  {:<14} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Attribute", "Present", "Missing", "Min", "P25", "Median", "P75", "Max", "Mean",
    );
    println!("  {}", "-".repeat(110));
    for attribute in &summary.attributes {
        print_attribute_row(attribute);
    }
    println!();

    if summary.is_complete() {
        println!("All records are complete.");
        return Ok(());
    }

    println!("Records with missing attributes ({}):", summary.incomplete.len());
    for record in &summary.incomplete {
        let missing = record
            .missing
            .iter()
            .map(|attribute| attribute.id())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  #{:<5} {:<32} {missing}", record.index, record.name);
    }

    Ok(())
}

fn print_attribute_row(summary: &AttributeSummary) {
    let stats = summary.stats.as_ref();
    println!(
        "  {:<14} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        summary.attribute.id(),
        summary.present,
        summary.missing,
        util::format_opt(stats.map(|s| s.min), 2),
        util::format_opt(stats.map(|s| s.p25), 2),
        util::format_opt(stats.map(|s| s.median), 2),
        util::format_opt(stats.map(|s| s.p75), 2),
        util::format_opt(stats.map(|s| s.max), 2),
        util::format_opt(stats.map(|s| s.mean), 2),
    );
}
