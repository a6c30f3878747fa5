//! Missing-value table.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use super::summary::share;
use crate::input::Dataset;

/// Missing-value statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub missing_count: usize,
    /// `missing_count / n_rows`, 0.0 for an empty dataset.
    pub missing_share: f64,
}

/// Per-column missing-value counts, keyed by column name in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingTable {
    entries: IndexMap<String, MissingEntry>,
}

impl MissingTable {
    /// Look up a column's entry.
    pub fn get(&self, column: &str) -> Option<&MissingEntry> {
        self.entries.get(column)
    }

    /// Iterate entries in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MissingEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest missing share of any column, 0.0 when there are no columns.
    pub fn max_share(&self) -> f64 {
        self.entries
            .values()
            .map(|e| e.missing_share)
            .fold(0.0, f64::max)
    }

    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.entries.values().map(|e| e.missing_count).sum()
    }

    /// Entries sorted by missing share, highest first. Ties keep dataset order.
    pub fn sorted_by_share(&self) -> Vec<(&str, &MissingEntry)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| b.1.missing_share.total_cmp(&a.1.missing_share));
        rows
    }
}

/// Count missing cells in every column.
pub fn missing_table(dataset: &Dataset) -> MissingTable {
    let n_rows = dataset.n_rows();
    let entries: IndexMap<String, MissingEntry> = dataset
        .columns()
        .iter()
        .map(|column| {
            let missing_count = column.missing_count();
            let entry = MissingEntry {
                missing_count,
                missing_share: share(missing_count, n_rows),
            };
            (column.name().to_string(), entry)
        })
        .collect();

    let table = MissingTable { entries };
    debug!(
        "missing table: {} missing cells across {} columns",
        table.total_missing(),
        table.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Column, Value};

    #[test]
    fn test_missing_counts() {
        let dataset = Dataset::new(vec![
            Column::new("age", [Some(10), Some(20), Some(30), None]),
            Column::new("city", [Some("A"), None, Some("A"), None]),
            Column::new("height", [1, 2, 3, 4]),
        ])
        .unwrap();

        let table = missing_table(&dataset);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("age").unwrap().missing_count, 1);
        assert_eq!(table.get("age").unwrap().missing_share, 0.25);
        assert_eq!(table.get("city").unwrap().missing_count, 2);
        assert_eq!(table.get("height").unwrap().missing_count, 0);
        assert_eq!(table.max_share(), 0.5);
        assert_eq!(table.total_missing(), 3);

        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["age", "city", "height"]);

        let sorted: Vec<&str> = table.sorted_by_share().iter().map(|(n, _)| *n).collect();
        assert_eq!(sorted, vec!["city", "age", "height"]);
    }

    #[test]
    fn test_zero_rows() {
        let dataset = Dataset::new(vec![Column::new("x", Vec::<Value>::new())]).unwrap();
        let table = missing_table(&dataset);
        assert_eq!(table.get("x").unwrap().missing_share, 0.0);
        assert_eq!(table.max_share(), 0.0);
    }

    #[test]
    fn test_serializes_by_column_name() {
        let dataset = Dataset::new(vec![Column::new("a", [Some(1), None])]).unwrap();
        let json = serde_json::to_value(missing_table(&dataset)).unwrap();
        assert_eq!(json["a"]["missing_count"], 1);
        assert_eq!(json["a"]["missing_share"], 0.5);
    }
}
