//! The quality flag report and the checker that produces it.

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::checks::{IdDuplicates, find_constant_columns, find_id_duplicates, total_duplicate_share};
use super::scoring::{QualityConfig, ScoreInputs, quality_score};
use crate::error::Result;
use crate::input::Dataset;
use crate::profile::{MissingTable, share};
use crate::schema::DatasetSummary;

/// Data quality flags for one dataset. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityFlags {
    pub too_few_rows: bool,
    pub too_many_columns: bool,
    pub max_missing_share: f64,
    pub too_many_missing: bool,
    pub has_suspicious_id_duplicates: bool,
    /// Identifier-like columns that contain repeated values.
    pub id_duplicates: IndexMap<String, IdDuplicates>,
    /// Worst duplicate share among `id_duplicates`.
    pub total_id_duplicate_share: f64,
    pub has_constant_columns: bool,
    pub constant_columns: IndexSet<String>,
    pub constant_columns_count: usize,
    /// Overall score in [0, 1]; higher is better.
    pub quality_score: f64,
}

impl QualityFlags {
    /// Look up a flag by its serialized name.
    ///
    /// ```
    /// use eda::{Column, Dataset, compute_quality_flags, missing_table, summarize_dataset};
    ///
    /// let dataset = Dataset::new(vec![Column::new("x", [1, 2, 3])]).unwrap();
    /// let flags = compute_quality_flags(&dataset, &summarize_dataset(&dataset), &missing_table(&dataset));
    /// assert_eq!(flags.get("has_constant_columns"), Some(serde_json::json!(false)));
    /// ```
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(mut map)) => map.remove(key),
            _ => None,
        }
    }

    /// True when any heuristic raised a flag.
    pub fn has_issues(&self) -> bool {
        self.too_few_rows
            || self.too_many_columns
            || self.too_many_missing
            || self.has_suspicious_id_duplicates
            || self.has_constant_columns
    }
}

/// Runs the quality heuristics with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct QualityChecker {
    config: QualityConfig,
}

impl QualityChecker {
    /// Create a checker with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker with custom thresholds, validating them first.
    pub fn with_config(config: QualityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Compute all quality flags.
    ///
    /// Row and column counts and distinct counts come from `summary`,
    /// missingness from `missing`, and duplicate counts from the raw `dataset`.
    pub fn check(
        &self,
        dataset: &Dataset,
        summary: &DatasetSummary,
        missing: &MissingTable,
    ) -> QualityFlags {
        let config = &self.config;

        if summary.n_rows == 0 || summary.n_cols == 0 {
            warn!(
                "quality check on an empty dataset ({} rows x {} columns)",
                summary.n_rows, summary.n_cols
            );
        }

        let too_few_rows = summary.n_rows < config.min_rows;
        let too_many_columns = summary.n_cols > config.max_columns;
        let max_missing_share = missing.max_share();
        let too_many_missing = max_missing_share > config.high_missing_share;

        let id_duplicates = find_id_duplicates(dataset, &config.id_pattern);
        let total_id_duplicate_share = total_duplicate_share(&id_duplicates);

        let constant_columns = find_constant_columns(summary);
        let constant_columns_count = constant_columns.len();

        let inputs = ScoreInputs {
            max_missing_share,
            too_few_rows,
            too_many_columns,
            total_id_duplicate_share,
            constant_share: share(constant_columns_count, summary.n_cols),
        };
        let quality_score = quality_score(&inputs, config);

        debug!(
            "quality: score {:.3}, {} id columns with duplicates, {} constant columns",
            quality_score,
            id_duplicates.len(),
            constant_columns_count
        );

        QualityFlags {
            too_few_rows,
            too_many_columns,
            max_missing_share,
            too_many_missing,
            has_suspicious_id_duplicates: !id_duplicates.is_empty(),
            id_duplicates,
            total_id_duplicate_share,
            has_constant_columns: constant_columns_count > 0,
            constant_columns,
            constant_columns_count,
            quality_score,
        }
    }
}

/// Compute quality flags with the default configuration.
pub fn compute_quality_flags(
    dataset: &Dataset,
    summary: &DatasetSummary,
    missing: &MissingTable,
) -> QualityFlags {
    QualityChecker::new().check(dataset, summary, missing)
}
