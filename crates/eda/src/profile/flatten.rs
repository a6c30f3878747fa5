//! Flat, row-per-column rendering of a dataset summary.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::Result;
use crate::schema::{ColumnSummary, DatasetSummary, NumericStatistics};

/// Field order of every flattened row.
pub const SUMMARY_FIELDS: &[&str] = &[
    "name",
    "dtype",
    "non_null",
    "missing",
    "missing_share",
    "unique",
    "example_values",
    "is_numeric",
    "top",
    "top_freq",
    "min",
    "max",
    "mean",
    "std",
    "q1",
    "median",
    "q3",
];

/// One flattened summary row: field name to value.
pub type SummaryRow = IndexMap<String, Value>;

/// A dataset summary laid out as a table, one row per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatSummary {
    pub fields: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl FlatSummary {
    /// Whether the table has a field of this name.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render every row as display strings, in field order.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.fields
                    .iter()
                    .map(|f| row.get(f).map(display_cell).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.fields)?;
        for row in self.display_rows() {
            csv.write_record(&row)?;
        }
        csv.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Render a JSON cell for tables: nulls blank, arrays joined.
pub fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.4}", f)
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(display_cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn flatten_column(column: &ColumnSummary) -> SummaryRow {
    let stat = |f: fn(&NumericStatistics) -> f64| -> Value {
        column
            .numeric
            .as_ref()
            .map(|s| Value::from(f(s)))
            .unwrap_or(Value::Null)
    };

    let values = [
        json!(column.name),
        json!(column.dtype.as_str()),
        json!(column.non_null),
        json!(column.missing),
        json!(column.missing_share),
        json!(column.unique),
        json!(column.example_values),
        json!(column.is_numeric),
        json!(column.top),
        json!(column.top_freq),
        stat(|s| s.min),
        stat(|s| s.max),
        stat(|s| s.mean),
        stat(|s| s.std),
        stat(|s| s.q1),
        stat(|s| s.median),
        stat(|s| s.q3),
    ];

    SUMMARY_FIELDS
        .iter()
        .map(|f| f.to_string())
        .zip(values)
        .collect()
}

/// Flatten a summary into one row per column, preserving column order.
pub fn flatten_summary_for_print(summary: &DatasetSummary) -> FlatSummary {
    FlatSummary {
        fields: SUMMARY_FIELDS.iter().map(|f| f.to_string()).collect(),
        rows: summary.columns.iter().map(flatten_column).collect(),
    }
}
