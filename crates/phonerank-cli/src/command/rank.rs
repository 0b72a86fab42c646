//! Ranking command
//!
//! Scores every phone in a dataset, prints the leaderboard and the best
//! phone, and optionally saves a JSON report.

use std::path::PathBuf;

use anyhow::Context;
use phonerank_scoring::{
    aggregation::ScoredRecord,
    derivation::{IncompleteRecord, MissingPolicy},
    normalization::{AttributeRanges, ScoreAttribute},
    pipeline::ScoringPipeline,
    ranking::Ranking,
};

use crate::{
    loader,
    schema::report::RankingReport,
    util::{self, Output},
};

const NAME_WIDTH: usize = 32;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RankArg {
    /// Path to the phone dataset (CSV, or JSON with a `.json` extension)
    file: PathBuf,
    /// Number of phones to show
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// How to treat phones with missing attributes (fail, skip, zero)
    #[arg(long, default_value = "fail")]
    missing_policy: MissingPolicy,
    /// Show sub-scores and normalized values for each listed phone
    #[arg(long)]
    details: bool,
    /// Report the rank of the phone with this name
    #[arg(long)]
    highlight: Option<String>,
    /// Write a JSON ranking report to this path (`-` for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RankArg) -> anyhow::Result<()> {
    let RankArg {
        file,
        top,
        missing_policy,
        details,
        highlight,
        output,
    } = arg;

    let records = loader::read_records_file(file)?;
    let outcome = ScoringPipeline::new(*missing_policy)
        .run(&records)
        .with_context(|| format!("Failed to rank phones in {}", file.display()))?;

    // JSON on stdout replaces the human-readable listing
    if output.as_deref().is_some_and(util::is_stdout_path) {
        let report = RankingReport::new(&outcome, *missing_policy, records.len(), *top);
        return Output::save_json(&report, output.as_deref());
    }

    println!(
        "Phone Ranking ({} of {} phones, missing policy: {missing_policy})",
        outcome.ranking.len(),
        records.len(),
    );
    println!("==========================================\n");

    print_excluded("Skipped", &outcome.skipped);
    print_excluded("Zero-filled", &outcome.zero_filled);

    if *details {
        print_ranges(&outcome.ranges);
    }

    print_ranking_table(&outcome.ranking, *top, *details);
    println!();

    let best = outcome.ranking.best()?;
    print_best(best);

    if let Some(name) = highlight {
        println!();
        match outcome.ranking.position_of(name) {
            Some(rank) => {
                let record = &outcome.ranking.as_slice()[rank - 1];
                println!(
                    "{name}: rank {rank} of {} (final score {:.4})",
                    outcome.ranking.len(),
                    record.final_score,
                );
            }
            None => println!("{name}: not in ranking"),
        }
    }

    if let Some(path) = output {
        let report = RankingReport::new(&outcome, *missing_policy, records.len(), *top);
        Output::save_json(&report, Some(path))?;
        println!();
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_excluded(label: &str, records: &[IncompleteRecord]) {
    if records.is_empty() {
        return;
    }
    println!("{label} {} phone(s) with missing attributes:", records.len());
    for record in records {
        let missing = record
            .missing
            .iter()
            .map(|attribute| attribute.id())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  #{:<5} {:<NAME_WIDTH$} {missing}", record.index, record.name);
    }
    println!();
}

fn print_ranges(ranges: &AttributeRanges) {
    println!("Normalization Ranges:");
    println!("  {:<20} {:>12} {:>12}", "Attribute", "Min", "Max");
    println!("  {}", "-".repeat(46));
    for attribute in ScoreAttribute::ALL {
        let range = ranges.get(attribute);
        let note = if range.is_degenerate() {
            "  (constant)"
        } else {
            ""
        };
        println!(
            "  {:<20} {:>12.3} {:>12.3}{note}",
            attribute.source_id(),
            range.min(),
            range.max(),
        );
    }
    println!();
}

fn print_ranking_table(ranking: &Ranking, top: usize, details: bool) {
    println!("Top {} Phones:", top.min(ranking.len()));
    if details {
        println!(
            "  {:>4} {:<NAME_WIDTH$} {:>8} {:>9} {:>9} {:>9} {:>7} {:>7} {:>7} {:>7} {:>7}",
            "Rank", "Name", "Score", "Perf", "Camera", "Display", "perf_n", "cam_n", "disp_n", "batt_n",
            "price_n",
        );
        println!("  {}", "-".repeat(NAME_WIDTH + 84));
    } else {
        println!("  {:>4} {:<NAME_WIDTH$} {:>8}", "Rank", "Name", "Score");
        println!("  {}", "-".repeat(NAME_WIDTH + 14));
    }

    for (record, rank) in ranking.top_n(top).iter().zip(1..) {
        if details {
            let sub = &record.sub_scores;
            let norm = &record.normalized;
            println!(
                "  {rank:>4} {:<NAME_WIDTH$} {:>8.4} {:>9.2} {:>9.2} {:>9.2} {:>7.3} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
                record.name,
                record.final_score,
                sub.performance_score,
                sub.camera_score,
                sub.display_score,
                norm.perf_n,
                norm.cam_n,
                norm.disp_n,
                norm.battery_n,
                norm.price_n,
            );
        } else {
            println!(
                "  {rank:>4} {:<NAME_WIDTH$} {:>8.4}",
                record.name, record.final_score
            );
        }
    }
}

fn print_best(best: &ScoredRecord) {
    println!("Best Phone: {}", best.name);
    println!("  Final score:       {:.4}", best.final_score);
    println!("  Performance score: {:.2}", best.sub_scores.performance_score);
    println!("  Camera score:      {:.2}", best.sub_scores.camera_score);
    println!("  Display score:     {:.2}", best.sub_scores.display_score);
    println!("  Battery:           {}", best.raw.battery);
    println!("  Price:             {}", best.raw.price);
}
