//! Per-column descriptive summaries and type inference.

use log::debug;

use super::counts::{ranked, value_counts};
use crate::input::{Column, Dataset, Value};
use crate::schema::{ColumnSummary, ColumnType, DatasetSummary, NumericStatistics};

/// Number of distinct example values kept per column.
const EXAMPLE_VALUES: usize = 3;

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Running mean/variance/min/max accumulator.
#[derive(Debug, Clone)]
struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value using Welford's online algorithm.
    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Sample variance (ddof = 1).
    fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    fn std(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// Percentile of an ascending slice with linear interpolation, `p` in [0, 1].
pub(crate) fn quantile(sorted: &[f64], p: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };

    let position = p.clamp(0.0, 1.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Compute numeric statistics for a set of values.
fn numeric_statistics(values: &[f64]) -> Option<NumericStatistics> {
    if values.is_empty() {
        return None;
    }

    let mut stats = StreamingStats::new();
    for &value in values {
        stats.add(value);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(NumericStatistics {
        min: stats.min,
        max: stats.max,
        mean: stats.mean,
        std: stats.std(),
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
    })
}

/// Infer a column's type from its non-missing cells.
pub fn infer_type(column: &Column) -> ColumnType {
    let mut inferred = ColumnType::Empty;

    for value in column.present() {
        match value {
            Value::Text(_) => return ColumnType::String,
            Value::Number(n) if n.fract() != 0.0 => inferred = ColumnType::Float,
            Value::Number(_) if inferred == ColumnType::Empty => inferred = ColumnType::Integer,
            _ => {}
        }
    }

    inferred
}

/// Summarize a single column of a dataset with `n_rows` rows.
pub fn summarize_column(column: &Column, n_rows: usize) -> ColumnSummary {
    let dtype = infer_type(column);
    let missing = column.missing_count();
    let non_null = column.len() - missing;

    let counts = value_counts(column);
    let top = ranked(&counts).into_iter().next();

    let example_values = counts
        .values()
        .take(EXAMPLE_VALUES)
        .map(|t| t.value.to_string())
        .collect();

    let numeric = if dtype.is_numeric() {
        let values: Vec<f64> = column.numbers().collect();
        numeric_statistics(&values)
    } else {
        None
    };

    ColumnSummary {
        name: column.name().to_string(),
        dtype,
        non_null,
        missing,
        missing_share: share(missing, n_rows),
        unique: counts.len(),
        example_values,
        is_numeric: dtype.is_numeric(),
        top: top.map(|t| t.value.to_string()),
        top_freq: top.map(|t| t.count).unwrap_or(0),
        numeric,
    }
}

/// Summarize every column of a dataset.
pub fn summarize_dataset(dataset: &Dataset) -> DatasetSummary {
    let n_rows = dataset.n_rows();
    let columns: Vec<ColumnSummary> = dataset
        .columns()
        .iter()
        .map(|column| summarize_column(column, n_rows))
        .collect();

    debug!("summarized {} columns over {} rows", columns.len(), n_rows);

    DatasetSummary {
        n_rows,
        n_cols: columns.len(),
        columns,
    }
}

/// `part / whole`, defined as 0.0 for an empty whole.
pub(crate) fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column::new("age", [Some(10), Some(20), Some(30), None]),
            Column::new("height", [140, 150, 160, 170]),
            Column::new("city", [Some("A"), Some("B"), Some("A"), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_infer_types() {
        assert_eq!(infer_type(&Column::new("i", [1, 2, 3])), ColumnType::Integer);
        assert_eq!(infer_type(&Column::new("f", [1.0, 2.5])), ColumnType::Float);
        assert_eq!(infer_type(&Column::new("s", ["a", "b"])), ColumnType::String);
        assert_eq!(
            infer_type(&Column::new("mixed", [Value::Number(1.0), Value::from("x")])),
            ColumnType::String
        );
        assert_eq!(
            infer_type(&Column::new("none", [Value::Missing, Value::Missing])),
            ColumnType::Empty
        );
    }

    #[test]
    fn test_summarize_counts() {
        let summary = summarize_dataset(&sample());

        assert_eq!(summary.n_rows, 4);
        assert_eq!(summary.n_cols, 3);
        assert_eq!(summary.column_names(), vec!["age", "height", "city"]);

        let age = summary.get_column("age").unwrap();
        assert_eq!(age.missing, 1);
        assert_eq!(age.non_null, 3);
        assert_eq!(age.missing_share, 0.25);
        assert!(age.is_numeric);
    }

    #[test]
    fn test_numeric_statistics() {
        let summary = summarize_dataset(&sample());
        let stats = summary.get_column("height").unwrap().numeric.unwrap();

        assert_eq!(stats.min, 140.0);
        assert_eq!(stats.max, 170.0);
        assert_eq!(stats.mean, 155.0);
        assert_eq!(stats.median, 155.0);
        assert_eq!(stats.q1, 147.5);
        assert_eq!(stats.q3, 162.5);
        assert!((stats.std - 12.909_944_487_358_056).abs() < 1e-9);
    }

    #[test]
    fn test_categorical_summary() {
        let summary = summarize_dataset(&sample());
        let city = summary.get_column("city").unwrap();

        assert_eq!(city.dtype, ColumnType::String);
        assert_eq!(city.unique, 2);
        assert_eq!(city.top.as_deref(), Some("A"));
        assert_eq!(city.top_freq, 2);
        assert_eq!(city.example_values, vec!["A", "B"]);
        assert!(city.numeric.is_none());
    }

    #[test]
    fn test_single_value_std_is_zero() {
        let dataset = Dataset::new(vec![Column::new("x", [5])]).unwrap();
        let stats = summarize_dataset(&dataset).columns[0].numeric.unwrap();
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.q1, 5.0);
    }

    #[test]
    fn test_empty_dataset_summary() {
        let summary = summarize_dataset(&Dataset::default());
        assert_eq!(summary.n_rows, 0);
        assert_eq!(summary.n_cols, 0);
        assert!(summary.columns.is_empty());
    }

    #[test]
    fn test_zero_rows_share_is_zero() {
        let dataset = Dataset::new(vec![Column::new("x", Vec::<Value>::new())]).unwrap();
        let column = &summarize_dataset(&dataset).columns[0];
        assert_eq!(column.missing_share, 0.0);
        assert_eq!(column.dtype, ColumnType::Empty);
    }

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert_eq!(quantile(&[], 0.5), 0.0);
    }
}
