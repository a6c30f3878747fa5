//! Column and dataset summaries.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Descriptive statistics for numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1).
    pub std: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
}

impl NumericStatistics {
    /// Calculate the interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Summary of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Inferred data type.
    pub dtype: ColumnType,
    /// Number of non-missing values.
    pub non_null: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Fraction of rows that are missing (0.0-1.0).
    pub missing_share: f64,
    /// Number of distinct non-missing values.
    pub unique: usize,
    /// A few distinct values, in order of first appearance.
    pub example_values: Vec<String>,
    /// Whether the column is numeric.
    pub is_numeric: bool,
    /// Most frequent non-missing value.
    pub top: Option<String>,
    /// Occurrences of the most frequent value.
    pub top_freq: usize,
    /// Numeric statistics (for numeric columns).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub numeric: Option<NumericStatistics>,
}

impl ColumnSummary {
    /// True when every non-missing value is the same.
    pub fn is_constant(&self) -> bool {
        self.unique == 1
    }
}

/// Summary of an entire dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    /// One summary per column, in dataset order.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Get a column summary by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Columns with a numeric type.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter().filter(|c| c.is_numeric)
    }
}
