//! Individual data quality heuristics.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::Dataset;
use crate::profile::{share, value_counts};
use crate::schema::DatasetSummary;

/// Default pattern for identifier-like column names: `id`, `customer_id`, `Order_ID`.
pub const DEFAULT_ID_PATTERN: &str = r"(?i)(^|_)id$";

pub(crate) static DEFAULT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_ID_PATTERN).expect("default identifier pattern is valid")
});

/// Repeated values found in an identifier-like column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdDuplicates {
    /// Rows whose value already appeared earlier in the column.
    pub duplicates_count: usize,
    /// `duplicates_count / n_rows`.
    pub duplicates_share: f64,
}

/// Count repeated values in every column whose name matches `id_pattern`.
///
/// Missing cells are ignored. Columns without repeats are left out.
pub fn find_id_duplicates(dataset: &Dataset, id_pattern: &Regex) -> IndexMap<String, IdDuplicates> {
    let n_rows = dataset.n_rows();

    dataset
        .columns()
        .iter()
        .filter(|column| id_pattern.is_match(column.name()))
        .filter_map(|column| {
            let duplicates_count: usize = value_counts(column)
                .values()
                .map(|t| t.count - 1)
                .sum();

            (duplicates_count > 0).then(|| {
                let duplicates = IdDuplicates {
                    duplicates_count,
                    duplicates_share: share(duplicates_count, n_rows),
                };
                (column.name().to_string(), duplicates)
            })
        })
        .collect()
}

/// Columns holding exactly one distinct non-missing value.
pub fn find_constant_columns(summary: &DatasetSummary) -> IndexSet<String> {
    summary
        .columns
        .iter()
        .filter(|c| c.is_constant())
        .map(|c| c.name.clone())
        .collect()
}

/// Worst per-column duplicate share, 0.0 when nothing was found.
pub fn total_duplicate_share(duplicates: &IndexMap<String, IdDuplicates>) -> f64 {
    duplicates
        .values()
        .map(|d| d.duplicates_share)
        .fold(0.0, f64::max)
}
