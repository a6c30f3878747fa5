//! CLI command implementations.

pub mod overview;
pub mod quality;
pub mod report;

use std::path::Path;

use eda::{Dataset, ParserConfig, Profiler, ProfilerConfig, SourceMetadata};

/// Parser configuration for an optional fixed delimiter.
fn parser_config(sep: Option<u8>) -> ParserConfig {
    match sep {
        Some(delimiter) => ParserConfig::default().with_delimiter(delimiter),
        None => ParserConfig::default(),
    }
}

/// Load a data file, checking it exists first.
fn load(
    file: &Path,
    sep: Option<u8>,
) -> Result<(Dataset, SourceMetadata), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = ProfilerConfig::default().with_parser(parser_config(sep));
    Ok(Profiler::with_config(config)?.load(file)?)
}
