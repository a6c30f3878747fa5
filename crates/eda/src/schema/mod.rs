//! Schema and summary types describing a profiled dataset.

mod summary;
mod types;

pub use summary::{ColumnSummary, DatasetSummary, NumericStatistics};
pub use types::ColumnType;
