//! Pearson correlation between numeric columns.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use super::summary::infer_type;
use crate::input::{Column, Dataset};

/// Square correlation matrix indexed by numeric column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major coefficients; `data[i][j]` pairs `columns[i]` with `columns[j]`.
    /// Undefined coefficients are NaN (serialized as null).
    #[serde(deserialize_with = "coefficients_from_nullable")]
    pub data: Vec<Vec<f64>>,
}

/// Read `null` coefficients back as NaN.
fn coefficients_from_nullable<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Vec<Option<f64>>> = Vec::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(|r| r.unwrap_or(f64::NAN)).collect())
        .collect())
}

impl CorrelationMatrix {
    /// True when fewer than two numeric columns were available.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient for a pair of columns.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.data.get(i)?.get(j).copied()
    }
}

/// Pearson correlation over rows where both columns hold numbers.
///
/// Returns NaN with fewer than two paired rows or when either side has no
/// variance.
pub fn pearson(a: &Column, b: &Column) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .values()
        .iter()
        .zip(b.values())
        .filter_map(|(x, y)| Some((x.as_number()?, y.as_number()?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

/// Correlation matrix over the numeric columns of a dataset.
///
/// With fewer than two numeric columns the result is empty.
pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let numeric: Vec<&Column> = dataset
        .columns()
        .iter()
        .filter(|c| infer_type(c).is_numeric())
        .collect();

    if numeric.len() < 2 {
        debug!("correlation skipped: {} numeric columns", numeric.len());
        return CorrelationMatrix::default();
    }

    let n = numeric.len();
    let mut data = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(numeric[i], numeric[j]);
            // A column with variance correlates perfectly with itself
            let r = if i == j && !r.is_nan() { 1.0 } else { r };
            data[i][j] = r;
            data[j][i] = r;
        }
    }

    debug!("correlation matrix over {} numeric columns", n);

    CorrelationMatrix {
        columns: numeric.iter().map(|c| c.name().to_string()).collect(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlation() {
        let dataset = Dataset::new(vec![
            Column::new("age", [Some(10), Some(20), Some(30), None]),
            Column::new("height", [140, 150, 160, 170]),
            Column::new("city", ["A", "B", "A", "C"]),
        ])
        .unwrap();

        let corr = correlation_matrix(&dataset);

        assert_eq!(corr.columns, vec!["age", "height"]);
        assert!((corr.get("age", "height").unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(corr.get("age", "age"), Some(1.0));
        assert_eq!(corr.get("city", "age"), None);
    }

    #[test]
    fn test_negative_correlation_is_symmetric() {
        let dataset = Dataset::new(vec![
            Column::new("x", [1.0, 2.0, 3.0, 4.0]),
            Column::new("y", [8.0, 6.0, 4.0, 2.0]),
        ])
        .unwrap();

        let corr = correlation_matrix(&dataset);
        assert!((corr.get("x", "y").unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(corr.get("x", "y"), corr.get("y", "x"));
    }

    #[test]
    fn test_constant_column_is_nan() {
        let dataset = Dataset::new(vec![
            Column::new("x", [1, 2, 3]),
            Column::new("flat", [7, 7, 7]),
        ])
        .unwrap();

        let corr = correlation_matrix(&dataset);
        assert!(corr.get("x", "flat").unwrap().is_nan());
        assert!(corr.get("flat", "flat").unwrap().is_nan());
        assert_eq!(corr.get("x", "x"), Some(1.0));
    }

    #[test]
    fn test_json_round_trip_keeps_nan() {
        let dataset = Dataset::new(vec![
            Column::new("x", [1, 2, 3]),
            Column::new("flat", [7, 7, 7]),
        ])
        .unwrap();
        let corr = correlation_matrix(&dataset);

        let json = serde_json::to_string(&corr).unwrap();
        assert!(json.contains("null"));
        let back: CorrelationMatrix = serde_json::from_str(&json).unwrap();

        assert_eq!(back.columns, corr.columns);
        assert_eq!(back.get("x", "x"), Some(1.0));
        assert!(back.get("x", "flat").unwrap().is_nan());
    }

    #[test]
    fn test_fewer_than_two_numeric_columns() {
        let dataset = Dataset::new(vec![
            Column::new("x", [1, 2, 3]),
            Column::new("s", ["a", "b", "c"]),
        ])
        .unwrap();

        assert!(correlation_matrix(&dataset).is_empty());
        assert!(correlation_matrix(&Dataset::default()).is_empty());
    }
}
