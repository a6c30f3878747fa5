//! Descriptive profiling of a dataset.
//!
//! Every function here is pure: it reads an immutable [`Dataset`](crate::Dataset)
//! and returns a freshly computed, serializable value.

mod categories;
mod correlation;
mod counts;
mod flatten;
mod missing;
mod summary;

pub use categories::{CategoryCount, CategoryTable, TopCategories, top_categories};
pub use correlation::{CorrelationMatrix, correlation_matrix, pearson};
pub use flatten::{FlatSummary, SUMMARY_FIELDS, SummaryRow, display_cell, flatten_summary_for_print};
pub use missing::{MissingEntry, MissingTable, missing_table};
pub use summary::{infer_type, summarize_column, summarize_dataset};

pub(crate) use counts::value_counts;
pub(crate) use summary::share;
