//! Markdown report rendering and artifact export.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{EdaError, Result};
use crate::input::format_number;
use crate::profile::{CategoryTable, CorrelationMatrix, MissingTable};
use crate::profiler::ProfileReport;

/// Options controlling report content.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Document title.
    pub title: String,
    /// Columns missing less than this share are left out of the missing table.
    pub min_missing_share: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "EDA report".to_string(),
            min_missing_share: 0.0,
        }
    }
}

impl ReportOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_min_missing_share(mut self, share: f64) -> Self {
        self.min_missing_share = share;
        self
    }
}

/// Render a GitHub-flavored Markdown table.
fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let escape = |cell: &str| cell.replace('|', "\\|");
    let mut out = String::new();

    let headers: Vec<String> = headers.iter().map(|h| escape(h)).collect();
    let _ = writeln!(out, "| {} |", headers.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(headers.len()));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| escape(c)).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn format_coefficient(r: f64) -> String {
    if r.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.3}", r)
    }
}

fn missing_rows(missing: &MissingTable, min_share: f64) -> Vec<Vec<String>> {
    missing
        .sorted_by_share()
        .into_iter()
        .filter(|(_, e)| e.missing_count > 0 && e.missing_share >= min_share)
        .map(|(name, e)| {
            vec![
                name.to_string(),
                e.missing_count.to_string(),
                format_share(e.missing_share),
            ]
        })
        .collect()
}

fn correlation_rows(corr: &CorrelationMatrix) -> Vec<Vec<String>> {
    corr.columns
        .iter()
        .zip(&corr.data)
        .map(|(name, row)| {
            std::iter::once(name.clone())
                .chain(row.iter().map(|&r| format_coefficient(r)))
                .collect()
        })
        .collect()
}

fn category_rows(table: &CategoryTable) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|r| vec![r.value.clone(), r.count.to_string(), format_share(r.share)])
        .collect()
}

/// Render the full report as Markdown.
pub fn render_markdown(report: &ProfileReport, options: &ReportOptions) -> String {
    let mut out = String::new();
    let summary = &report.summary;
    let quality = &report.quality;

    let _ = writeln!(out, "# {}\n", options.title);

    if let Some(source) = &report.source {
        let _ = writeln!(out, "- Source: `{}` ({})", source.file, source.format);
        let _ = writeln!(out, "- Size: {} bytes", source.size_bytes);
        let _ = writeln!(out, "- Hash: `{}`", source.hash);
    }
    let _ = writeln!(out, "- Rows: **{}**", summary.n_rows);
    let _ = writeln!(out, "- Columns: **{}**\n", summary.n_cols);

    let _ = writeln!(out, "## Data quality\n");
    let _ = writeln!(out, "- Quality score: **{:.2}**", quality.quality_score);
    let _ = writeln!(out, "- Max missing share: {}", format_share(quality.max_missing_share));
    let _ = writeln!(out, "- Too few rows: {}", quality.too_few_rows);
    let _ = writeln!(out, "- Too many columns: {}", quality.too_many_columns);
    let _ = writeln!(out, "- Too many missing: {}", quality.too_many_missing);
    let _ = writeln!(
        out,
        "- Suspicious identifier duplicates: {}",
        quality.has_suspicious_id_duplicates
    );
    let _ = writeln!(out, "- Constant columns: {}\n", quality.constant_columns_count);

    if !quality.id_duplicates.is_empty() {
        let rows: Vec<Vec<String>> = quality
            .id_duplicates
            .iter()
            .map(|(name, d)| {
                vec![
                    name.clone(),
                    d.duplicates_count.to_string(),
                    format_share(d.duplicates_share),
                ]
            })
            .collect();
        let _ = writeln!(out, "### Identifier duplicates\n");
        out.push_str(&markdown_table(&["column", "duplicates", "share"], &rows));
        out.push('\n');
    }

    if !quality.constant_columns.is_empty() {
        let names: Vec<String> = quality
            .constant_columns
            .iter()
            .map(|c| format!("`{}`", c))
            .collect();
        let _ = writeln!(out, "### Constant columns\n\n{}\n", names.join(", "));
    }

    let _ = writeln!(out, "## Columns\n");
    let flat = report.flat_summary();
    let headers: Vec<&str> = flat.fields.iter().map(String::as_str).collect();
    out.push_str(&markdown_table(&headers, &flat.display_rows()));
    out.push('\n');

    let _ = writeln!(out, "## Missing values\n");
    let rows = missing_rows(&report.missing, options.min_missing_share);
    if rows.is_empty() {
        let _ = writeln!(out, "No missing values above the threshold.\n");
    } else {
        out.push_str(&markdown_table(&["column", "missing", "share"], &rows));
        out.push('\n');
    }

    let _ = writeln!(out, "## Correlation\n");
    if report.correlation.is_empty() {
        let _ = writeln!(out, "Fewer than two numeric columns.\n");
    } else {
        let headers: Vec<&str> = std::iter::once("")
            .chain(report.correlation.columns.iter().map(String::as_str))
            .collect();
        out.push_str(&markdown_table(&headers, &correlation_rows(&report.correlation)));
        out.push('\n');
    }

    let _ = writeln!(out, "## Top categories\n");
    if report.top_categories.is_empty() {
        let _ = writeln!(out, "No categorical columns.\n");
    }
    for (name, table) in &report.top_categories {
        let _ = writeln!(out, "### {}\n", name);
        out.push_str(&markdown_table(&["value", "count", "share"], &category_rows(table)));
        out.push('\n');
    }

    out
}

/// Replace characters that are unsafe in file names.
fn file_stem(column: &str) -> String {
    let stem: String = column
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() { "column".to_string() } else { stem }
}

/// File stem for `column` not yet in `used`, suffixed `_2`, `_3`, ... on collision.
fn unique_stem(column: &str, used: &mut HashSet<String>) -> String {
    let base = file_stem(column);
    let mut stem = base.clone();
    let mut n = 2;
    while used.contains(&stem.to_lowercase()) {
        stem = format!("{}_{}", base, n);
        n += 1;
    }
    used.insert(stem.to_lowercase());
    stem
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| EdaError::io(path, e))
}

fn write_rows(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(create(path)?);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(|e| EdaError::io(path, e))
}

/// Write the Markdown report and CSV/JSON artifacts into `out_dir`.
///
/// Returns the paths written, report first.
pub fn write_report(
    report: &ProfileReport,
    out_dir: impl AsRef<Path>,
    options: &ReportOptions,
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let categories_dir = out_dir.join("top_categories");
    fs::create_dir_all(&categories_dir).map_err(|e| EdaError::io(&categories_dir, e))?;

    let mut written = Vec::new();

    let path = out_dir.join("report.md");
    fs::write(&path, render_markdown(report, options)).map_err(|e| EdaError::io(&path, e))?;
    written.push(path);

    let path = out_dir.join("summary.csv");
    report.flat_summary().write_csv(create(&path)?)?;
    written.push(path);

    let path = out_dir.join("missing.csv");
    let rows: Vec<Vec<String>> = report
        .missing
        .iter()
        .map(|(name, e)| {
            vec![
                name.to_string(),
                e.missing_count.to_string(),
                format_number(e.missing_share),
            ]
        })
        .collect();
    write_rows(&path, &["column", "missing_count", "missing_share"], &rows)?;
    written.push(path);

    let path = out_dir.join("correlation.csv");
    let headers: Vec<&str> = std::iter::once("column")
        .chain(report.correlation.columns.iter().map(String::as_str))
        .collect();
    write_rows(&path, &headers, &correlation_rows(&report.correlation))?;
    written.push(path);

    let mut used_stems = HashSet::new();
    for (name, table) in &report.top_categories {
        let stem = unique_stem(name, &mut used_stems);
        let path = categories_dir.join(format!("{}.csv", stem));
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| vec![r.value.clone(), r.count.to_string(), format_number(r.share)])
            .collect();
        write_rows(&path, &["value", "count", "share"], &rows)?;
        written.push(path);
    }

    let path = out_dir.join("quality_flags.json");
    let mut writer = create(&path)?;
    serde_json::to_writer_pretty(&mut writer, &report.quality)?;
    writer.flush().map_err(|e| EdaError::io(&path, e))?;
    written.push(path);

    debug!("wrote {} report files to {}", written.len(), out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Column, Dataset};
    use crate::profiler::Profiler;

    fn report() -> ProfileReport {
        let dataset = Dataset::new(vec![
            Column::new("customer_id", [Some(1), Some(2), Some(1), None]),
            Column::new("amount", [Some(10.5), Some(20.0), Some(30.25), Some(5.0)]),
            Column::new("visits", [1, 3, 4, 1]),
            Column::new("city", [Some("A|B"), Some("C"), Some("C"), None]),
            Column::new("country", ["NL", "NL", "NL", "NL"]),
        ])
        .unwrap();
        Profiler::new().profile(&dataset).unwrap()
    }

    #[test]
    fn test_markdown_sections() {
        let md = render_markdown(&report(), &ReportOptions::default().with_title("Customers"));

        assert!(md.starts_with("# Customers\n"));
        assert!(md.contains("- Rows: **4**"));
        assert!(md.contains("## Data quality"));
        assert!(md.contains("### Identifier duplicates"));
        assert!(md.contains("| customer_id | 1 | 25.0% |"));
        assert!(md.contains("`country`"));
        assert!(md.contains("| city | 1 | 25.0% |"));
        assert!(md.contains("### city"));
        assert!(md.contains("A\\|B"));
    }

    #[test]
    fn test_missing_threshold() {
        let options = ReportOptions::default().with_min_missing_share(0.5);
        let md = render_markdown(&report(), &options);
        assert!(md.contains("No missing values above the threshold."));
    }

    #[test]
    fn test_markdown_table() {
        let table = markdown_table(&["a", "b"], &[vec!["1".into(), "2".into()]]);
        assert_eq!(table, "| a | b |\n|---|---|\n| 1 | 2 |\n");
    }

    #[test]
    fn test_markdown_headers_escaped() {
        let table = markdown_table(&["a|b", "c"], &[vec!["1".into(), "2".into()]]);
        assert!(table.starts_with("| a\\|b | c |\n"));
    }

    #[test]
    fn test_unique_stem() {
        let mut used = HashSet::new();
        assert_eq!(unique_stem("a b", &mut used), "a_b");
        assert_eq!(unique_stem("a_b", &mut used), "a_b_2");
        assert_eq!(unique_stem("a/b", &mut used), "a_b_3");
        assert_eq!(unique_stem("A_B", &mut used), "A_B_4");
    }

    #[test]
    fn test_colliding_column_names_keep_both_tables() {
        let dataset = Dataset::new(vec![
            Column::new("a b", ["x", "x", "y"]),
            Column::new("a_b", ["p", "q", "q"]),
        ])
        .unwrap();
        let report = Profiler::new().profile(&dataset).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let written = write_report(&report, dir.path(), &ReportOptions::default()).unwrap();

        let unique: HashSet<&PathBuf> = written.iter().collect();
        assert_eq!(unique.len(), written.len());
        let first = fs::read_to_string(dir.path().join("top_categories/a_b.csv")).unwrap();
        let second = fs::read_to_string(dir.path().join("top_categories/a_b_2.csv")).unwrap();
        assert!(first.contains("x,2,"));
        assert!(second.contains("q,2,"));
    }

    #[test]
    fn test_missing_csv_number_format() {
        let dir = tempfile::tempdir().unwrap();
        write_report(&report(), dir.path(), &ReportOptions::default()).unwrap();

        let missing = fs::read_to_string(dir.path().join("missing.csv")).unwrap();
        assert!(missing.contains("customer_id,1,0.25"));
        assert!(missing.contains("amount,0,0"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("city name/2"), "city_name_2");
        assert_eq!(file_stem(""), "column");
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_report(&report(), dir.path(), &ReportOptions::default()).unwrap();

        assert!(written[0].ends_with("report.md"));
        for name in ["report.md", "summary.csv", "missing.csv", "correlation.csv", "quality_flags.json"] {
            assert!(dir.path().join(name).exists(), "{} not written", name);
        }
        assert!(dir.path().join("top_categories/city.csv").exists());
        assert!(dir.path().join("top_categories/country.csv").exists());

        let json: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("quality_flags.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["has_suspicious_id_duplicates"], true);
        assert_eq!(json["constant_columns"][0], "country");
    }
}
