//! Overview command - print dataset size and per-column summary.

use std::path::PathBuf;

use colored::Colorize;
use eda::{flatten_summary_for_print, summarize_dataset};

/// Pad every cell to its column's widest entry.
fn render_table(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    std::iter::once(line(headers))
        .chain(rows.iter().map(|row| line(row)))
        .collect()
}

pub fn run(file: PathBuf, sep: Option<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let (dataset, source) = super::load(&file, sep)?;
    let summary = summarize_dataset(&dataset);

    println!(
        "{} {} ({})",
        "Overview of".cyan().bold(),
        source.file.white(),
        source.format
    );
    println!(
        "Rows: {}  Columns: {}",
        summary.n_rows.to_string().white().bold(),
        summary.n_cols.to_string().white().bold()
    );
    println!();

    let flat = flatten_summary_for_print(&summary);
    if flat.is_empty() {
        println!("{}", "No columns.".yellow());
        return Ok(());
    }

    let mut lines = render_table(&flat.fields, &flat.display_rows()).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.yellow().bold());
    }
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
