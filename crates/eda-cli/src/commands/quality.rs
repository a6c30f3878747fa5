//! Quality command - print the data quality flags and score.

use std::path::PathBuf;

use colored::Colorize;
use eda::{QualityFlags, compute_quality_flags, missing_table, summarize_dataset};

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag { "yes".red() } else { "no".green() }
}

fn print_flags(flags: &QualityFlags) {
    let score = flags.quality_score * 100.0;
    let score_text = format!("{:.0}%", score);
    let score_text = if score >= 80.0 {
        score_text.green()
    } else if score >= 50.0 {
        score_text.yellow()
    } else {
        score_text.red()
    };
    println!("Quality score: {}", score_text.bold());
    println!();

    println!("{}", "Flags:".yellow().bold());
    println!("  Too few rows:        {}", yes_no(flags.too_few_rows));
    println!("  Too many columns:    {}", yes_no(flags.too_many_columns));
    println!("  Too many missing:    {}", yes_no(flags.too_many_missing));
    println!("  Max missing share:   {:.1}%", flags.max_missing_share * 100.0);
    println!("  ID duplicates:       {}", yes_no(flags.has_suspicious_id_duplicates));
    println!("  Constant columns:    {}", yes_no(flags.has_constant_columns));

    if !flags.id_duplicates.is_empty() {
        println!();
        println!("{}", "Identifier duplicates:".yellow().bold());
        for (column, dup) in &flags.id_duplicates {
            println!(
                "  {:20} {} duplicates ({:.1}%)",
                column,
                dup.duplicates_count.to_string().red(),
                dup.duplicates_share * 100.0
            );
        }
    }

    if !flags.constant_columns.is_empty() {
        println!();
        println!("{}", "Constant columns:".yellow().bold());
        for column in &flags.constant_columns {
            println!("  {}", column);
        }
    }
}

pub fn run(file: PathBuf, sep: Option<u8>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (dataset, source) = super::load(&file, sep)?;
    let summary = summarize_dataset(&dataset);
    let missing = missing_table(&dataset);
    let flags = compute_quality_flags(&dataset, &summary, &missing);

    if json {
        println!("{}", serde_json::to_string_pretty(&flags)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows x {} columns)",
        "Data quality for".cyan().bold(),
        source.file.white(),
        summary.n_rows,
        summary.n_cols
    );
    println!();
    print_flags(&flags);

    if !flags.has_issues() {
        println!();
        println!("{}", "No issues found - data looks clean!".green());
    }

    Ok(())
}
