//! Quality score configuration and computation.

use regex::Regex;

use super::checks::DEFAULT_ID_REGEX;
use crate::error::{EdaError, Result};

/// Thresholds and weights for the data quality heuristics.
#[derive(Debug, Clone)]
pub struct QualityConfig {
    /// Fewer rows than this sets `too_few_rows`.
    pub min_rows: usize,
    /// More columns than this sets `too_many_columns`.
    pub max_columns: usize,
    /// A column missing more than this share sets `too_many_missing`.
    pub high_missing_share: f64,
    /// Column names treated as identifiers.
    pub id_pattern: Regex,
    /// Score penalty when `too_few_rows` is set.
    pub too_few_rows_penalty: f64,
    /// Score penalty when `too_many_columns` is set.
    pub too_many_columns_penalty: f64,
    /// Multiplier for the worst identifier duplicate share.
    pub id_duplicate_weight: f64,
    /// Multiplier for the share of constant columns.
    pub constant_column_weight: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_rows: 100,
            max_columns: 100,
            high_missing_share: 0.5,
            id_pattern: DEFAULT_ID_REGEX.clone(),
            too_few_rows_penalty: 0.2,
            too_many_columns_penalty: 0.1,
            id_duplicate_weight: 0.5,
            constant_column_weight: 0.3,
        }
    }
}

impl QualityConfig {
    /// Use a custom regex for identifier-like column names.
    pub fn with_id_pattern(mut self, pattern: &str) -> Result<Self> {
        self.id_pattern = Regex::new(pattern)?;
        Ok(self)
    }

    /// Set the minimum number of rows before `too_few_rows` is raised.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Set the column count above which `too_many_columns` is raised.
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Check that shares lie in [0, 1] and weights are non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.high_missing_share) {
            return Err(EdaError::Config(format!(
                "high_missing_share must be within [0, 1], got {}",
                self.high_missing_share
            )));
        }

        let weights = [
            ("too_few_rows_penalty", self.too_few_rows_penalty),
            ("too_many_columns_penalty", self.too_many_columns_penalty),
            ("id_duplicate_weight", self.id_duplicate_weight),
            ("constant_column_weight", self.constant_column_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EdaError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        Ok(())
    }
}

/// Severities feeding the quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreInputs {
    pub max_missing_share: f64,
    pub too_few_rows: bool,
    pub too_many_columns: bool,
    pub total_id_duplicate_share: f64,
    /// Constant columns divided by column count.
    pub constant_share: f64,
}

/// Combine severities into a score in [0, 1]. Never increases as any
/// severity grows.
pub fn quality_score(inputs: &ScoreInputs, config: &QualityConfig) -> f64 {
    let mut score = 1.0;

    score -= inputs.max_missing_share;
    if inputs.too_few_rows {
        score -= config.too_few_rows_penalty;
    }
    if inputs.too_many_columns {
        score -= config.too_many_columns_penalty;
    }
    score -= config.id_duplicate_weight * inputs.total_id_duplicate_share;
    score -= config.constant_column_weight * inputs.constant_share;

    score.clamp(0.0, 1.0)
}
