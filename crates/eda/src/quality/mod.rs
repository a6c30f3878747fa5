//! Data quality heuristics folded into a single score.
//!
//! Two column-level heuristics run against the raw dataset and its summary:
//!
//! - **Identifier duplicates**: columns named like identifiers (`id`,
//!   `customer_id`) that repeat values.
//! - **Constant columns**: columns with a single distinct non-missing value.
//!
//! Together with row/column count checks and the worst missing share they
//! produce [`QualityFlags::quality_score`], which only drops as any of these
//! severities grows.

mod checks;
mod flags;
mod scoring;

pub use checks::{
    DEFAULT_ID_PATTERN, IdDuplicates, find_constant_columns, find_id_duplicates,
    total_duplicate_share,
};
pub use flags::{QualityChecker, QualityFlags, compute_quality_flags};
pub use scoring::{QualityConfig, ScoreInputs, quality_score};
