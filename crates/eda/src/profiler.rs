//! Main Profiler struct and public API.

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::{EdaError, Result};
use crate::input::{Dataset, Parser, ParserConfig, SourceMetadata};
use crate::profile::{
    CorrelationMatrix, FlatSummary, MissingTable, TopCategories, correlation_matrix,
    flatten_summary_for_print, missing_table, summarize_dataset, top_categories,
};
use crate::quality::{QualityChecker, QualityConfig, QualityFlags};
use crate::schema::DatasetSummary;

/// Configuration for a profiling run.
#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Quality thresholds and weights.
    pub quality: QualityConfig,
    /// Maximum number of text columns in the top-categories section.
    pub max_category_columns: usize,
    /// Values kept per top-categories table.
    pub top_k: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            quality: QualityConfig::default(),
            max_category_columns: 5,
            top_k: 5,
        }
    }
}

impl ProfilerConfig {
    /// Set the top-categories limits.
    pub fn with_categories(mut self, max_columns: usize, top_k: usize) -> Self {
        self.max_category_columns = max_columns;
        self.top_k = top_k;
        self
    }

    /// Set the parser configuration.
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

/// Everything computed for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    /// Metadata about the source file, when loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
    pub summary: DatasetSummary,
    pub missing: MissingTable,
    pub correlation: CorrelationMatrix,
    pub top_categories: TopCategories,
    pub quality: QualityFlags,
}

impl ProfileReport {
    /// The column summary as a flat row-per-column table.
    pub fn flat_summary(&self) -> FlatSummary {
        flatten_summary_for_print(&self.summary)
    }
}

/// Runs every profiling step over a dataset.
#[derive(Debug, Clone)]
pub struct Profiler {
    config: ProfilerConfig,
    parser: Parser,
    checker: QualityChecker,
}

impl Profiler {
    /// Create a profiler with default configuration.
    pub fn new() -> Self {
        Self {
            config: ProfilerConfig::default(),
            parser: Parser::new(),
            checker: QualityChecker::new(),
        }
    }

    /// Create a profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Result<Self> {
        if config.max_category_columns == 0 || config.top_k == 0 {
            return Err(EdaError::Config(
                "max_category_columns and top_k must be positive".to_string(),
            ));
        }

        let parser = Parser::with_config(config.parser.clone());
        let checker = QualityChecker::with_config(config.quality.clone())?;

        Ok(Self {
            config,
            parser,
            checker,
        })
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Load a delimited file from disk.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Load and profile a delimited file.
    pub fn profile_file(&self, path: impl AsRef<Path>) -> Result<ProfileReport> {
        let (dataset, source) = self.load(path)?;
        let mut report = self.profile(&dataset)?;
        report.source = Some(source);
        Ok(report)
    }

    /// Profile an in-memory dataset.
    pub fn profile(&self, dataset: &Dataset) -> Result<ProfileReport> {
        let summary = summarize_dataset(dataset);
        let missing = missing_table(dataset);
        let correlation = correlation_matrix(dataset);
        let top_categories =
            top_categories(dataset, self.config.max_category_columns, self.config.top_k)?;
        let quality = self.checker.check(dataset, &summary, &missing);

        info!(
            "profiled {} rows x {} columns, quality score {:.2}",
            summary.n_rows, summary.n_cols, quality.quality_score
        );

        Ok(ProfileReport {
            source: None,
            summary,
            missing,
            correlation,
            top_categories,
            quality,
        })
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_profile_file() {
        let file = create_test_file("age,height,city\n10,140,A\n20,150,B\n30,160,A\n,170,\n");

        let report = Profiler::new().profile_file(file.path()).unwrap();

        assert_eq!(report.summary.n_rows, 4);
        assert_eq!(report.summary.n_cols, 3);
        assert_eq!(report.missing.get("age").unwrap().missing_count, 1);
        assert_eq!(report.correlation.columns, vec!["age", "height"]);
        assert!(report.top_categories.contains_key("city"));
        assert_eq!(report.source.as_ref().unwrap().format, "csv");
        assert_eq!(report.flat_summary().len(), 3);
    }

    #[test]
    fn test_invalid_config() {
        let config = ProfilerConfig::default().with_categories(0, 5);
        assert!(matches!(Profiler::with_config(config), Err(EdaError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Profiler::new().profile_file("/nonexistent/data.csv");
        assert!(matches!(result, Err(EdaError::Io { .. })));
    }

    #[test]
    fn test_profile_is_repeatable() {
        let dataset = Dataset::new(vec![
            crate::Column::new("customer_id", [1, 2, 3, 1, 2]),
            crate::Column::new("segment", ["a", "b", "a", "a", "c"]),
        ])
        .unwrap();
        let profiler = Profiler::new();

        let first = profiler.profile(&dataset).unwrap();
        let second = profiler.profile(&dataset).unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.quality, second.quality);
        assert_eq!(first.top_categories, second.top_categories);
    }
}
