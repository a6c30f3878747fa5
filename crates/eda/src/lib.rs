//! EDA: exploratory data analysis and data quality profiling for tabular datasets.
//!
//! Given a [`Dataset`] of named columns, the library computes column
//! summaries, a missing-value table, a correlation matrix over numeric
//! columns, the most frequent values of text columns, and a set of data
//! quality flags folded into one score.
//!
//! # Core Principles
//!
//! - **Pure**: every operation reads an immutable dataset and returns a fresh value
//! - **Typed**: cells are a tagged union, reports are fixed-field records
//! - **Serializable**: every result can be written straight to JSON
//!
//! # Example
//!
//! ```
//! use eda::{Column, Dataset, compute_quality_flags, missing_table, summarize_dataset};
//!
//! let dataset = Dataset::new(vec![
//!     Column::new("customer_id", [1, 2, 3, 1, 2]),
//!     Column::new("amount", [50, 10, 20, 40, 30]),
//! ])
//! .unwrap();
//!
//! let summary = summarize_dataset(&dataset);
//! let missing = missing_table(&dataset);
//! let flags = compute_quality_flags(&dataset, &summary, &missing);
//!
//! assert!(flags.has_suspicious_id_duplicates);
//! assert_eq!(flags.id_duplicates["customer_id"].duplicates_count, 2);
//! ```

pub mod error;
pub mod input;
pub mod profile;
pub mod quality;
pub mod report;
pub mod schema;

mod profiler;

pub use crate::profiler::{ProfileReport, Profiler, ProfilerConfig};
pub use error::{EdaError, Result};
pub use input::{Column, Dataset, Parser, ParserConfig, SourceMetadata, Value};
pub use profile::{
    CategoryTable, CorrelationMatrix, FlatSummary, MissingTable, correlation_matrix,
    flatten_summary_for_print, missing_table, summarize_dataset, top_categories,
};
pub use quality::{QualityChecker, QualityConfig, QualityFlags, compute_quality_flags};
pub use report::{ReportOptions, render_markdown, write_report};
pub use schema::{ColumnSummary, ColumnType, DatasetSummary, NumericStatistics};
