//! Report command - write the Markdown report and its artifacts.

use std::path::PathBuf;

use colored::Colorize;
use eda::{Profiler, ProfilerConfig, ReportOptions, write_report};

/// Arguments of the report command.
pub struct ReportArgs {
    pub file: PathBuf,
    pub out_dir: PathBuf,
    pub sep: Option<u8>,
    pub max_cat_columns: usize,
    pub top_k: usize,
    pub min_missing_share: f64,
    pub title: String,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    println!(
        "{} {}",
        "Profiling".cyan().bold(),
        args.file.display().to_string().white()
    );

    let config = ProfilerConfig::default()
        .with_parser(super::parser_config(args.sep))
        .with_categories(args.max_cat_columns, args.top_k);
    let profiler = Profiler::with_config(config)?;
    let report = profiler.profile_file(&args.file)?;

    let options = ReportOptions::default()
        .with_title(args.title)
        .with_min_missing_share(args.min_missing_share);
    let written = write_report(&report, &args.out_dir, &options)?;

    println!(
        "Profiled {} rows x {} columns",
        report.summary.n_rows.to_string().white().bold(),
        report.summary.n_cols.to_string().white().bold()
    );
    println!(
        "Data quality score: {:.0}%",
        report.quality.quality_score * 100.0
    );
    println!();
    println!(
        "{} {} files to {}",
        "Wrote".green().bold(),
        written.len(),
        args.out_dir.display().to_string().white()
    );
    if let Some(markdown) = written.first() {
        println!("  {}", markdown.display());
    }

    Ok(())
}
