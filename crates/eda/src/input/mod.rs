//! Input parsing and the in-memory dataset.

mod dataset;
mod parser;
mod source;

pub(crate) use dataset::format_number;
pub use dataset::{Column, Dataset, Value, ValueKey, is_null_value};
pub use parser::{Parser, ParserConfig};
pub use source::SourceMetadata;
