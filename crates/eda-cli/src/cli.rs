//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// eda-cli: exploratory data analysis and quality reports for CSV/TSV files
#[derive(Parser)]
#[command(name = "eda-cli")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print dataset size and the per-column summary
    Overview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (auto-detected when omitted)
        #[arg(long, value_parser = parse_delimiter)]
        sep: Option<u8>,
    },

    /// Write a Markdown report with CSV/JSON artifacts
    Report {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory for the report files
        #[arg(long, default_value = "reports")]
        out_dir: PathBuf,

        /// Field delimiter (auto-detected when omitted)
        #[arg(long, value_parser = parse_delimiter)]
        sep: Option<u8>,

        /// Maximum number of text columns in the top-categories section
        #[arg(long, default_value = "5")]
        max_cat_columns: usize,

        /// Values kept per top-categories table
        #[arg(long, default_value = "5")]
        top_k: usize,

        /// Hide columns missing less than this share from the missing table
        #[arg(long, default_value = "0.0", value_parser = parse_share)]
        min_missing_share: f64,

        /// Report title
        #[arg(long, default_value = "EDA report")]
        title: String,
    },

    /// Print the data quality flags and score
    Quality {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field delimiter (auto-detected when omitted)
        #[arg(long, value_parser = parse_delimiter)]
        sep: Option<u8>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Accept a single ASCII character, or `\t` / `tab` for tabs.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
            }
        }
    }
}

fn parse_share(s: &str) -> Result<f64, String> {
    let share: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&share) {
        Ok(share)
    } else {
        Err(format!("share must be within [0, 1], got {}", share))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn test_report_defaults() {
        let cli = Cli::parse_from(["eda-cli", "report", "data.csv"]);
        match cli.command {
            Commands::Report {
                out_dir,
                max_cat_columns,
                top_k,
                min_missing_share,
                title,
                ..
            } => {
                assert_eq!(out_dir, PathBuf::from("reports"));
                assert_eq!(max_cat_columns, 5);
                assert_eq!(top_k, 5);
                assert_eq!(min_missing_share, 0.0);
                assert_eq!(title, "EDA report");
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_rejects_bad_share() {
        let result =
            Cli::try_parse_from(["eda-cli", "report", "data.csv", "--min-missing-share", "2"]);
        assert!(result.is_err());
    }
}
