//! Example: Profile a tabular data file.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>

use std::env;
use std::path::Path;

use eda::Profiler;

fn main() -> eda::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let report = Profiler::new().profile_file(path)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Profile: {}", path.display());
    println!("{}", separator);
    println!();

    if let Some(source) = &report.source {
        println!("## Source");
        println!("  Format: {}", source.format);
        println!("  Size:   {} bytes", source.size_bytes);
        println!("  Hash:   {}", source.hash);
        println!();
    }

    println!("## Columns ({} rows)", report.summary.n_rows);
    for col in &report.summary.columns {
        println!(
            "  {:20} {:8} missing={:<5} unique={}",
            col.name, col.dtype, col.missing, col.unique
        );
    }
    println!();

    if !report.correlation.is_empty() {
        println!("## Correlation");
        for (name, row) in report.correlation.columns.iter().zip(&report.correlation.data) {
            let cells: Vec<String> = row.iter().map(|r| format!("{:>7.3}", r)).collect();
            println!("  {:20} {}", name, cells.join(" "));
        }
        println!();
    }

    for (column, table) in &report.top_categories {
        println!("## Top values of {}", column);
        for row in &table.rows {
            println!("  {:20} {:>6} ({:.1}%)", row.value, row.count, row.share * 100.0);
        }
        println!();
    }

    println!("## Quality");
    println!("  Score: {:.2}", report.quality.quality_score);
    println!("{}", serde_json::to_string_pretty(&report.quality)?);

    Ok(())
}
