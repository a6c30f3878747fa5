//! In-memory tabular dataset.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EdaError, Result};

/// A single cell of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absence of data.
    Missing,
    /// Numeric value.
    Number(f64),
    /// Any non-numeric text.
    Text(String),
}

impl Value {
    /// Interpret a raw text cell: null tokens become `Missing`, parseable
    /// numbers become `Number`, everything else stays `Text`.
    pub fn parse_cell(raw: &str) -> Self {
        if is_null_value(raw) {
            return Value::Missing;
        }

        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Returns true for missing cells. A NaN number also counts as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Number(n) => n.is_nan(),
            Value::Text(_) => false,
        }
    }

    /// Get the numeric value, if this is a (non-NaN) number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Hashable identity of a non-missing value, used for distinct counting.
    ///
    /// `Number(1.0)` and `Text("1")` are different values.
    pub fn key(&self) -> Option<ValueKey<'_>> {
        match self {
            Value::Missing => None,
            Value::Number(n) if n.is_nan() => None,
            // 0.0 and -0.0 compare equal, so they share a key
            Value::Number(n) if *n == 0.0 => Some(ValueKey::Number(0f64.to_bits())),
            Value::Number(n) => Some(ValueKey::Number(n.to_bits())),
            Value::Text(s) => Some(ValueKey::Text(s)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Render a number without a trailing `.0` for whole values.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Borrowed, hashable form of a non-missing [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey<'a> {
    Number(u64),
    Text(&'a str),
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        if n.is_nan() { Value::Missing } else { Value::Number(n) }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Create a column from anything convertible into cells.
    ///
    /// ```
    /// use eda::{Column, Value};
    ///
    /// let age = Column::new("age", [Some(10), Some(20), None]);
    /// assert_eq!(age.len(), 3);
    /// assert_eq!(age.values()[2], Value::Missing);
    /// ```
    pub fn new<V: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cells in row order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Iterator over non-missing cells.
    pub fn present(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| !v.is_missing())
    }

    /// Iterator over the numeric cells, skipping text and missing ones.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(Value::as_number)
    }
}

/// An immutable, rectangular table of named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

/// Serialized form of a [`Dataset`], checked on the way in.
#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<Column>,
    #[serde(default)]
    n_rows: Option<usize>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = EdaError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        let dataset = Dataset::new(raw.columns)?;
        match raw.n_rows {
            Some(n_rows) if n_rows != dataset.n_rows && dataset.n_cols() > 0 => {
                Err(EdaError::RaggedColumns {
                    column: dataset.columns[0].name.clone(),
                    expected: n_rows,
                    found: dataset.n_rows,
                })
            }
            _ => Ok(dataset),
        }
    }
}

impl Dataset {
    /// Build a dataset, checking that all columns have the same length
    /// and that names are unique.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);

        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != n_rows {
                return Err(EdaError::RaggedColumns {
                    column: column.name.clone(),
                    expected: n_rows,
                    found: column.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(EdaError::DuplicateColumn(column.name.clone()));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Build a dataset from row-major raw text cells.
    ///
    /// Short rows are padded with missing cells; extra cells are dropped.
    pub fn from_rows(headers: Vec<String>, rows: &[Vec<String>]) -> Result<Self> {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let values: Vec<Value> = rows
                    .iter()
                    .map(|row| row.get(index).map(|s| Value::parse_cell(s)).unwrap_or(Value::Missing))
                    .collect();
                Column { name, values }
            })
            .collect();

        Self::new(columns)
    }

    /// Get the number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Get the number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns true if the dataset has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0 || self.columns.is_empty()
    }
}

/// Check if a raw text value represents a missing/null value.
pub fn is_null_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null_value() {
        assert!(is_null_value(""));
        assert!(is_null_value("NA"));
        assert!(is_null_value("na"));
        assert!(is_null_value("N/A"));
        assert!(is_null_value("NaN"));
        assert!(is_null_value("null"));
        assert!(is_null_value("None"));
        assert!(is_null_value("."));
        assert!(!is_null_value("value"));
        assert!(!is_null_value("0"));
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(Value::parse_cell("42"), Value::Number(42.0));
        assert_eq!(Value::parse_cell(" 3.5 "), Value::Number(3.5));
        assert_eq!(Value::parse_cell("NA"), Value::Missing);
        assert_eq!(Value::parse_cell("abc"), Value::Text("abc".to_string()));
        assert_eq!(Value::parse_cell("inf"), Value::Text("inf".to_string()));
    }

    #[test]
    fn test_value_key_distinguishes_number_and_text() {
        let one = Value::Number(1.0);
        let one_text = Value::from("1");
        assert_ne!(one.key(), one_text.key());
        assert_eq!(Value::Number(0.0).key(), Value::Number(-0.0).key());
        assert_eq!(Value::Missing.key(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(10.0).to_string(), "10");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = Dataset::new(vec![
            Column::new("a", [1, 2, 3]),
            Column::new("b", [1, 2]),
        ]);
        assert!(matches!(
            result,
            Err(EdaError::RaggedColumns { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Dataset::new(vec![Column::new("a", [1]), Column::new("a", [2])]);
        assert!(matches!(result, Err(EdaError::DuplicateColumn(name)) if name == "a"));
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let rows = vec![
            vec!["1".to_string(), "x".to_string()],
            vec!["2".to_string()],
        ];
        let dataset = Dataset::from_rows(vec!["n".into(), "s".into()], &rows).unwrap();

        assert_eq!(dataset.n_rows(), 2);
        assert_eq!(dataset.column("s").unwrap().values()[1], Value::Missing);
        assert_eq!(dataset.column("n").unwrap().numbers().sum::<f64>(), 3.0);
    }

    #[test]
    fn test_deserialize_checks_columns() {
        let duplicate = r#"{"columns":[{"name":"a","values":[1,2,3]},{"name":"a","values":[null]}],"n_rows":1}"#;
        assert!(serde_json::from_str::<Dataset>(duplicate).is_err());

        let ragged = r#"{"columns":[{"name":"a","values":[1,2]},{"name":"b","values":[1]}]}"#;
        assert!(serde_json::from_str::<Dataset>(ragged).is_err());

        let wrong_rows = r#"{"columns":[{"name":"a","values":[1,2]}],"n_rows":5}"#;
        assert!(serde_json::from_str::<Dataset>(wrong_rows).is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_shape() {
        let dataset = Dataset::new(vec![
            Column::new("id", [1, 2]),
            Column::new("city", [Some("A"), None]),
        ])
        .unwrap();

        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();

        assert_eq!(back, dataset);
        assert_eq!(back.n_rows(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(Vec::new()).unwrap();
        assert_eq!(dataset.n_rows(), 0);
        assert_eq!(dataset.n_cols(), 0);
        assert!(dataset.is_empty());
    }
}
