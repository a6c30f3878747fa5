//! Most frequent values of categorical columns.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use super::counts::{ranked, value_counts};
use super::summary::{infer_type, share};
use crate::error::{EdaError, Result};
use crate::input::Dataset;

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Fraction of the column's non-missing values.
    pub share: f64,
}

/// Frequency table for a single column, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    pub rows: Vec<CategoryCount>,
}

impl CategoryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values in rank order.
    pub fn values(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.value.as_str()).collect()
    }
}

/// Frequency tables keyed by column name, in dataset order.
pub type TopCategories = IndexMap<String, CategoryTable>;

/// Top `top_k` values for up to `max_columns` text columns.
///
/// Columns are taken in dataset order. Values are ranked by count with
/// ties broken by first appearance.
pub fn top_categories(dataset: &Dataset, max_columns: usize, top_k: usize) -> Result<TopCategories> {
    if max_columns == 0 {
        return Err(EdaError::InvalidArgument(
            "max_columns must be positive".to_string(),
        ));
    }
    if top_k == 0 {
        return Err(EdaError::InvalidArgument("top_k must be positive".to_string()));
    }

    let result: TopCategories = dataset
        .columns()
        .iter()
        .filter(|c| infer_type(c).is_categorical())
        .take(max_columns)
        .map(|column| {
            let counts = value_counts(column);
            let present: usize = counts.values().map(|t| t.count).sum();
            let rows = ranked(&counts)
                .into_iter()
                .take(top_k)
                .map(|t| CategoryCount {
                    value: t.value.to_string(),
                    count: t.count,
                    share: share(t.count, present),
                })
                .collect();
            (column.name().to_string(), CategoryTable { rows })
        })
        .collect();

    debug!("top categories for {} columns (top_k = {})", result.len(), top_k);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Column;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Column::new("age", [Some(10), Some(20), Some(30), None]),
            Column::new("city", [Some("A"), Some("B"), Some("A"), None]),
            Column::new("color", ["red", "blue", "green", "blue"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_top_categories() {
        let top = top_categories(&dataset(), 5, 2).unwrap();

        assert!(!top.contains_key("age"));
        let city = &top["city"];
        assert_eq!(city.len(), 2);
        assert_eq!(city.rows[0].value, "A");
        assert_eq!(city.rows[0].count, 2);
        assert!((city.rows[0].share - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(city.rows[1].value, "B");
    }

    #[test]
    fn test_ties_use_first_seen_order() {
        let top = top_categories(&dataset(), 5, 3).unwrap();
        assert_eq!(top["color"].values(), vec!["blue", "red", "green"]);
    }

    #[test]
    fn test_max_columns_limits_selection() {
        let top = top_categories(&dataset(), 1, 5).unwrap();
        assert_eq!(top.keys().collect::<Vec<_>>(), vec!["city"]);
    }

    #[test]
    fn test_zero_arguments_rejected() {
        assert!(matches!(
            top_categories(&dataset(), 0, 5),
            Err(EdaError::InvalidArgument(_))
        ));
        assert!(matches!(
            top_categories(&dataset(), 5, 0),
            Err(EdaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_serialized_rows_have_value_field() {
        let top = top_categories(&dataset(), 5, 2).unwrap();
        let json = serde_json::to_value(&top).unwrap();
        assert_eq!(json["city"][0]["value"], "A");
        assert_eq!(json["city"][0]["count"], 2);
    }
}
